//! Input validation errors.
//!
//! Solver input is validated once, when a solve starts. Every internal
//! helper assumes validated input and never re-checks it.

use crate::point::Point;
use std::error::Error;
use std::fmt;

/// Why a set of stations was rejected before solving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// No stations were given.
    EmptyInput,
    /// A station lies outside `[0, grid_size)` on some axis.
    OutOfBounds {
        /// The offending station.
        station: Point,
        /// Its position in the input.
        index: usize,
        /// Side length of the grid.
        grid_size: u32,
    },
    /// Two stations share a cell.
    DuplicateStation {
        /// The repeated coordinate.
        station: Point,
        /// Input position of the first occurrence.
        first: usize,
        /// Input position of the repeat.
        second: usize,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "no stations to connect"),
            Self::OutOfBounds {
                station,
                index,
                grid_size,
            } => write!(
                f,
                "station {index} at {station} is outside the {grid_size}x{grid_size} grid"
            ),
            Self::DuplicateStation {
                station,
                first,
                second,
            } => write!(
                f,
                "stations {first} and {second} both occupy {station}"
            ),
        }
    }
}

impl Error for SolveError {}
