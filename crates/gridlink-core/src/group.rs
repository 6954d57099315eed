//! Groups of tied candidate networks.

use crate::candidate::Candidate;
use crate::id::StationId;
use crate::point::Point;

/// A set of stations merged together, with every tied way of connecting
/// them that the solver still tracks.
///
/// All candidates in a group cover the same stations and have the same
/// number of cells. They are alternatives of equal quality, not a ranked
/// list; order is the order in which they were synthesized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    stations: Vec<StationId>,
    candidates: Vec<Candidate>,
}

impl Group {
    /// The starting group for a single station.
    pub fn singleton(id: StationId, station: Point) -> Self {
        Self {
            stations: vec![id],
            candidates: vec![Candidate::singleton(station)],
        }
    }

    /// The group formed by merging `left` and `right`.
    ///
    /// `candidates` must be non-empty and of equal length; the merge
    /// engine guarantees both.
    pub fn merged(left: &Group, right: &Group, candidates: Vec<Candidate>) -> Self {
        debug_assert!(!candidates.is_empty(), "merged group has no candidates");
        debug_assert!(
            candidates.windows(2).all(|w| w[0].len() == w[1].len()),
            "merged group candidates differ in length"
        );
        let mut stations = Vec::with_capacity(left.stations.len() + right.stations.len());
        stations.extend_from_slice(&left.stations);
        stations.extend_from_slice(&right.stations);
        Self {
            stations,
            candidates,
        }
    }

    /// Stations covered by this group, in merge order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Whether `id` is covered by this group.
    pub fn covers(&self, id: StationId) -> bool {
        self.stations.contains(&id)
    }

    /// The tied candidates, in synthesis order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Number of tied candidates.
    pub fn alternatives(&self) -> usize {
        self.candidates.len()
    }

    /// Cell count shared by every candidate.
    pub fn candidate_len(&self) -> usize {
        self.candidates.first().map_or(0, Candidate::len)
    }

    /// Interior cells shared by every candidate.
    pub fn interior_len(&self) -> usize {
        self.candidate_len().saturating_sub(self.stations.len())
    }

    /// Consume the group, yielding its candidates.
    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }

    /// Check the group invariants: at least one candidate, all candidates
    /// of equal length, and no station listed twice.
    pub fn is_well_formed(&self) -> bool {
        let Some(first) = self.candidates.first() else {
            return false;
        };
        let mut ids = self.stations.clone();
        ids.sort_unstable();
        ids.dedup();
        ids.len() == self.stations.len()
            && self.candidates.iter().all(|c| c.len() == first.len())
    }
}
