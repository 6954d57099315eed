//! Pluggable policies for bounding and resolving tied candidates.
//!
//! A merge can synthesize many equally short candidates, and the count
//! multiplies across merges. A [`RetentionPolicy`] decides how many of
//! them a group keeps; a [`SelectionPolicy`] picks the one network
//! reported once every station is connected.

use gridlink_core::{Candidate, Group, StepId};
use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::num::NonZeroUsize;

/// Decides which tied candidates a merged group keeps.
///
/// # Contract
///
/// `retain` receives the non-empty, equal-length candidates synthesized
/// by one merge, in synthesis order, and must return a subset of them.
/// Returning an empty vector is treated as "keep the first one".
pub trait RetentionPolicy: fmt::Debug + Send {
    /// Short human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Upper bound on how many candidates one merge may synthesize before
    /// `retain` runs, or `None` for no bound.
    ///
    /// Enumeration stops once the budget is spent, so this also bounds the
    /// work done per merge.
    fn synthesis_budget(&self) -> Option<usize>;

    /// Choose the candidates to keep.
    fn retain(&self, step: StepId, candidates: Vec<Candidate>) -> Vec<Candidate>;
}

/// Keep every tied candidate.
///
/// Growth is unbounded; only suitable for a handful of stations.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeepAll;

impl RetentionPolicy for KeepAll {
    fn name(&self) -> &str {
        "keep_all"
    }

    fn synthesis_budget(&self) -> Option<usize> {
        None
    }

    fn retain(&self, _step: StepId, candidates: Vec<Candidate>) -> Vec<Candidate> {
        candidates
    }
}

/// Keep the first `limit` candidates in synthesis order.
#[derive(Clone, Copy, Debug)]
pub struct KeepFirst {
    /// Maximum candidates per group.
    pub limit: NonZeroUsize,
}

impl KeepFirst {
    /// Keep at most `limit` candidates per group.
    pub fn new(limit: NonZeroUsize) -> Self {
        Self { limit }
    }
}

impl RetentionPolicy for KeepFirst {
    fn name(&self) -> &str {
        "keep_first"
    }

    fn synthesis_budget(&self) -> Option<usize> {
        Some(self.limit.get())
    }

    fn retain(&self, _step: StepId, mut candidates: Vec<Candidate>) -> Vec<Candidate> {
        candidates.truncate(self.limit.get());
        candidates
    }
}

/// Keep a uniform random sample of `limit` candidates.
///
/// The RNG is a ChaCha8 stream seeded from `seed XOR step`, so a solve is
/// reproducible for a fixed seed while different merges draw different
/// samples. Kept candidates stay in synthesis order.
#[derive(Clone, Copy, Debug)]
pub struct SeededSample {
    /// Maximum candidates per group.
    pub limit: NonZeroUsize,
    /// Base seed for the per-step RNG.
    pub seed: u64,
}

impl SeededSample {
    /// How many candidates are synthesized per kept candidate.
    pub const OVERSAMPLE: usize = 4;

    /// Sample at most `limit` candidates per group.
    pub fn new(limit: NonZeroUsize, seed: u64) -> Self {
        Self { limit, seed }
    }
}

impl RetentionPolicy for SeededSample {
    fn name(&self) -> &str {
        "seeded_sample"
    }

    fn synthesis_budget(&self) -> Option<usize> {
        Some(self.limit.get().saturating_mul(Self::OVERSAMPLE))
    }

    fn retain(&self, step: StepId, candidates: Vec<Candidate>) -> Vec<Candidate> {
        let limit = self.limit.get();
        if candidates.len() <= limit {
            return candidates;
        }
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ u64::from(step.0));
        let mut keep = vec![false; candidates.len()];
        for i in index::sample(&mut rng, candidates.len(), limit).into_iter() {
            keep[i] = true;
        }
        candidates
            .into_iter()
            .zip(keep)
            .filter_map(|(c, k)| k.then_some(c))
            .collect()
    }
}

/// Picks the reported network from the terminal group.
///
/// No quality criterion between tied candidates is implied: they all have
/// the same length. Implementations may add one.
pub trait SelectionPolicy: fmt::Debug + Send {
    /// Short human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Index of the chosen candidate in `group.candidates()`.
    ///
    /// Out-of-range indices are clamped to the last candidate.
    fn select(&self, group: &Group) -> usize;
}

/// Pick the first candidate synthesized. Arbitrary but deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstSynthesized;

impl SelectionPolicy for FirstSynthesized {
    fn name(&self) -> &str {
        "first_synthesized"
    }

    fn select(&self, _group: &Group) -> usize {
        0
    }
}
