//! Error types for layout generation.

use std::error::Error;
use std::fmt;

use gridlink_space::SpaceError;

/// Errors from [`generate`](crate::generate) and
/// [`place_stations`](crate::place_stations).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The configured grid could not be built.
    Space(SpaceError),
    /// The attempt budget ran out before every station was placed.
    NotEnoughRoom {
        /// Stations asked for.
        requested: usize,
        /// Stations placed before giving up.
        placed: usize,
        /// Draws made.
        attempts: u32,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "invalid layout grid: {e}"),
            Self::NotEnoughRoom {
                requested,
                placed,
                attempts,
            } => write!(
                f,
                "placed {placed} of {requested} stations in {attempts} attempts"
            ),
        }
    }
}

impl Error for LayoutError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::NotEnoughRoom { .. } => None,
        }
    }
}

impl From<SpaceError> for LayoutError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}
