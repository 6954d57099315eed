//! Solver configuration.
//!
//! [`SolverConfig`] is the builder-input for constructing a
//! [`Solver`](crate::Solver). It carries the two pluggable policies; the
//! grid and stations are passed separately because they are validated
//! per solve.

use std::num::NonZeroUsize;

use crate::policy::{FirstSynthesized, KeepAll, KeepFirst, RetentionPolicy, SelectionPolicy};

/// Default cap on tied candidates kept per group.
pub const DEFAULT_CANDIDATE_LIMIT: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(n) => n,
    None => panic!("candidate limit must be non-zero"),
};

/// Complete configuration for a solve.
///
/// # Examples
///
/// ```
/// use gridlink_engine::{SolverConfig, SeededSample};
/// use std::num::NonZeroUsize;
///
/// let config = SolverConfig::default()
///     .with_retention(SeededSample::new(NonZeroUsize::new(16).unwrap(), 7));
/// assert_eq!(config.retention.name(), "seeded_sample");
/// ```
#[derive(Debug)]
pub struct SolverConfig {
    /// How many tied candidates each merged group keeps.
    /// Default: [`KeepFirst`] with [`DEFAULT_CANDIDATE_LIMIT`].
    pub retention: Box<dyn RetentionPolicy>,
    /// How the reported network is picked from the terminal group.
    /// Default: [`FirstSynthesized`].
    pub selection: Box<dyn SelectionPolicy>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            retention: Box::new(KeepFirst::new(DEFAULT_CANDIDATE_LIMIT)),
            selection: Box::new(FirstSynthesized),
        }
    }
}

impl SolverConfig {
    /// Keep every tied candidate at every merge.
    ///
    /// Candidate counts multiply across merges, so this is only practical
    /// for a handful of stations.
    pub fn unbounded() -> Self {
        Self::default().with_retention(KeepAll)
    }

    /// Replace the retention policy.
    pub fn with_retention(mut self, retention: impl RetentionPolicy + 'static) -> Self {
        self.retention = Box::new(retention);
        self
    }

    /// Replace the selection policy.
    pub fn with_selection(mut self, selection: impl SelectionPolicy + 'static) -> Self {
        self.selection = Box::new(selection);
        self
    }
}
