//! Test utilities for gridlink development.
//!
//! Provides a [`RecordingObserver`] that keeps every merge snapshot, and
//! assertion helpers for the invariants every solve must uphold: groups
//! are well-formed, they partition the stations, and the reported network
//! is connected.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::{HashSet, VecDeque};

use gridlink_core::{Group, Point, StationId};
use gridlink_engine::{MergeRecord, StepObserver, StepSnapshot};

/// Observer that stores an owned snapshot of every merge.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub snapshots: Vec<StepSnapshot>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in merge order.
    pub fn records(&self) -> Vec<&MergeRecord> {
        self.snapshots.iter().map(|s| &s.record).collect()
    }
}

impl StepObserver for RecordingObserver {
    fn on_step(&mut self, record: &MergeRecord, groups: &[Group]) {
        self.snapshots.push(StepSnapshot {
            record: record.clone(),
            groups: groups.to_vec(),
        });
    }
}

/// Assert every group is well-formed: non-empty, equal-length candidates,
/// each candidate holding at least its own stations' worth of cells.
pub fn assert_groups_well_formed(groups: &[Group]) {
    for (i, g) in groups.iter().enumerate() {
        assert!(g.is_well_formed(), "group {i} is not well-formed: {g:?}");
        assert!(
            g.candidate_len() >= g.stations().len(),
            "group {i} candidates have {} cells for {} stations",
            g.candidate_len(),
            g.stations().len()
        );
    }
}

/// Assert the groups' stations partition `0..station_count`, and every
/// candidate contains the coordinates of its group's stations.
pub fn assert_partition(groups: &[Group], stations: &[Point]) {
    let mut covered: HashSet<StationId> = HashSet::new();
    for g in groups {
        for &id in g.stations() {
            assert!(covered.insert(id), "station {id} covered twice");
            let at = stations[id.0 as usize];
            for c in g.candidates() {
                assert!(c.contains(&at), "candidate of group covering {id} misses {at}");
            }
        }
    }
    assert_eq!(covered.len(), stations.len(), "not every station is covered");
}

/// Assert every station is reachable from the first through orthogonal
/// steps over `cells`.
pub fn assert_connected<'a>(cells: impl IntoIterator<Item = &'a Point>, stations: &[Point]) {
    let cells: HashSet<Point> = cells.into_iter().copied().collect();
    let Some(&start) = stations.first() else {
        return;
    };
    let mut reached: HashSet<Point> = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(cur) = queue.pop_front() {
        for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let next = cur.offset(dr, dc);
            if cells.contains(&next) && reached.insert(next) {
                queue.push_back(next);
            }
        }
    }
    for s in stations {
        assert!(reached.contains(s), "station {s} is not connected to {start}");
    }
}
