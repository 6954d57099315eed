//! Distance oracle: interior-cell cost between points, candidates and
//! groups.
//!
//! Every function here preserves ties. When several point pairs (or
//! candidate pairs) share the minimum cost, all of them are reported in
//! first-seen scan order, and the merge engine decides what to do with
//! them.

use gridlink_core::{Candidate, Group, Point};
use indexmap::IndexSet;
use std::hash::{Hash, Hasher};

/// Interior cells strictly required between `a` and `b` on a minimal
/// orthogonal path, excluding both endpoints.
///
/// This is the Manhattan distance minus one. Orthogonally adjacent cells
/// cost 0; so does a cell compared with itself, which happens when two
/// candidates share an interior cell.
pub fn point_distance(a: Point, b: Point) -> u32 {
    a.manhattan(b).saturating_sub(1)
}

/// Two points to be joined by a minimal path, `from` one candidate `to`
/// another.
///
/// Equality and hashing ignore orientation: `(a, b)` and `(b, a)` are the
/// same pair.
#[derive(Clone, Copy, Debug)]
pub struct PointPair {
    /// Endpoint taken from the left-hand candidate.
    pub from: Point,
    /// Endpoint taken from the right-hand candidate.
    pub to: Point,
}

impl PointPair {
    /// Pair `from` with `to`.
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Interior cost of joining the pair.
    pub fn distance(&self) -> u32 {
        point_distance(self.from, self.to)
    }

    fn key(&self) -> (Point, Point) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }
}

impl PartialEq for PointPair {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for PointPair {}

impl Hash for PointPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Result of [`candidate_distance`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateDistance {
    /// Minimum interior cost over all cross pairs.
    pub distance: u32,
    /// Every distinct point pair achieving `distance`, in scan order.
    pub pairs: Vec<PointPair>,
}

/// Minimum interior cost between any cell of `left` and any cell of
/// `right`, with every point pair achieving it.
///
/// Empty candidates never reach the oracle; for completeness they yield
/// `u32::MAX` and no pairs.
pub fn candidate_distance(left: &Candidate, right: &Candidate) -> CandidateDistance {
    let mut best = u32::MAX;
    let mut pairs: IndexSet<PointPair> = IndexSet::new();
    for &a in left.iter() {
        for &b in right.iter() {
            let d = point_distance(a, b);
            if d < best {
                best = d;
                pairs.clear();
            }
            if d == best {
                pairs.insert(PointPair::new(a, b));
            }
        }
    }
    CandidateDistance {
        distance: best,
        pairs: pairs.into_iter().collect(),
    }
}

/// One pair of candidates, by index into their groups, achieving the
/// minimum group distance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateMatch {
    /// Index into the left group's candidates.
    pub left: usize,
    /// Index into the right group's candidates.
    pub right: usize,
    /// Point pairs achieving the minimum between the two candidates.
    pub pairs: Vec<PointPair>,
}

/// Result of [`group_distance`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupDistance {
    /// Minimum interior cost over every candidate pair.
    pub distance: u32,
    /// Every candidate pair achieving `distance`, in scan order.
    pub matches: Vec<CandidateMatch>,
}

impl GroupDistance {
    /// Total number of point pairs across all matches.
    pub fn pair_count(&self) -> usize {
        self.matches.iter().map(|m| m.pairs.len()).sum()
    }
}

/// Minimum interior cost between two groups, with every candidate pair
/// (and, within each, every point pair) achieving it.
pub fn group_distance(left: &Group, right: &Group) -> GroupDistance {
    let mut best = u32::MAX;
    let mut matches = Vec::new();
    for (i, a) in left.candidates().iter().enumerate() {
        for (j, b) in right.candidates().iter().enumerate() {
            let cd = candidate_distance(a, b);
            if cd.distance < best {
                best = cd.distance;
                matches.clear();
            }
            if cd.distance == best && !cd.pairs.is_empty() {
                matches.push(CandidateMatch {
                    left: i,
                    right: j,
                    pairs: cd.pairs,
                });
            }
        }
    }
    GroupDistance {
        distance: best,
        matches,
    }
}
