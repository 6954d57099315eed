//! Candidate networks: one concrete realization of a connection.

use crate::point::Point;
use indexmap::IndexSet;

/// One concrete set of cells connecting a subset of stations.
///
/// A candidate holds the stations it connects plus every interior cell
/// chosen for it so far. Storage order is merge history, not a spatial
/// walk: two consecutive cells need not be grid-adjacent.
///
/// A cell is stored at most once. Equality is set equality, so two
/// candidates built in different orders over the same cells compare
/// equal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Candidate {
    cells: IndexSet<Point>,
}

impl Candidate {
    /// A candidate covering a single station and nothing else.
    pub fn singleton(station: Point) -> Self {
        let mut cells = IndexSet::with_capacity(1);
        cells.insert(station);
        Self { cells }
    }

    /// Build the candidate `self ++ other ++ path`.
    ///
    /// Cells already present earlier in the sequence are skipped, so the
    /// result can be shorter than the sum of its parts when the inputs
    /// overlap.
    pub fn joined(&self, other: &Candidate, path: &[Point]) -> Candidate {
        let mut cells = IndexSet::with_capacity(self.len() + other.len() + path.len());
        cells.extend(self.cells.iter().copied());
        cells.extend(other.cells.iter().copied());
        cells.extend(path.iter().copied());
        Candidate { cells }
    }

    /// Number of distinct cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True only for the default-constructed candidate.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `point` is one of this candidate's cells.
    pub fn contains(&self, point: &Point) -> bool {
        self.cells.contains(point)
    }

    /// Cells in storage (merge-history) order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Point> + '_ {
        self.cells.iter()
    }

    /// Cells in storage order, copied out.
    pub fn to_vec(&self) -> Vec<Point> {
        self.cells.iter().copied().collect()
    }

    /// Cells in row-major order. Two candidates with equal keys cover
    /// exactly the same cells.
    pub fn canonical_key(&self) -> Vec<Point> {
        let mut key = self.to_vec();
        key.sort_unstable();
        key
    }

    /// Interior cells of a candidate covering `station_count` stations.
    pub fn interior_len(&self, station_count: usize) -> usize {
        self.len().saturating_sub(station_count)
    }
}

impl FromIterator<Point> for Candidate {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
