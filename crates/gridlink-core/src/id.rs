//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a station by its position in the solver input.
///
/// `StationId(n)` is the n-th station passed to the solver. Groups record
/// which stations they cover by id rather than by coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub u32);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StationId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing merge step counter.
///
/// Step 1 is the first merge. A solve over `n` stations ends at step
/// `n - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u32);

impl StepId {
    /// The step after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StepId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
