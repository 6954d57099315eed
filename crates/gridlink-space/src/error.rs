//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// The side length does not fit the `i32` coordinate space.
    DimensionTooLarge {
        /// The requested side length.
        value: u32,
        /// The largest accepted side length.
        max: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { value, max } => {
                write!(f, "grid size {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
