//! Minimal orthogonal path enumeration.
//!
//! A minimal path from `a` to `b` is made of exactly `dy = |Δrow|`
//! vertical unit moves and `dx = |Δcol|` horizontal unit moves, each
//! signed toward `b`. Every distinct interleaving of those moves is one
//! path, so there are `C(dy + dx, dy)` of them. Paths are reported as
//! their interior cells only: both endpoints are excluded, leaving
//! `dy + dx - 1` cells per path.
//!
//! Enumeration is lazy ([`MinimalPaths`]) because the count grows
//! combinatorially; callers that only need a bounded number of paths
//! should `take()` from the iterator rather than collect it.

use gridlink_core::Point;
use std::iter::FusedIterator;

/// Lazy iterator over the interior cells of every minimal path between
/// two points.
///
/// Orderings are produced in lexicographic order of the positions of the
/// vertical moves, so the first path goes vertical-first and the last
/// goes horizontal-first. Each distinct ordering is produced exactly once.
#[derive(Clone, Debug)]
pub struct MinimalPaths {
    origin: Point,
    step_row: i32,
    step_col: i32,
    moves: usize,
    /// Positions (in move order) of the vertical moves, strictly increasing.
    verticals: Vec<usize>,
    done: bool,
}

impl MinimalPaths {
    fn new(from: Point, to: Point) -> Self {
        let dy = from.row.abs_diff(to.row) as usize;
        let dx = from.col.abs_diff(to.col) as usize;
        Self {
            origin: from,
            step_row: (to.row - from.row).signum(),
            step_col: (to.col - from.col).signum(),
            moves: dy + dx,
            verticals: (0..dy).collect(),
            done: false,
        }
    }

    fn current_path(&self) -> Vec<Point> {
        let interior = self.moves.saturating_sub(1);
        let mut out = Vec::with_capacity(interior);
        let mut cursor = self.origin;
        let mut next_vertical = self.verticals.iter().peekable();
        for pos in 0..interior {
            if next_vertical.peek() == Some(&&pos) {
                next_vertical.next();
                cursor = cursor.offset(self.step_row, 0);
            } else {
                cursor = cursor.offset(0, self.step_col);
            }
            out.push(cursor);
        }
        out
    }

    /// Step `verticals` to the next k-combination of `0..moves`.
    fn advance(&mut self) {
        let n = self.moves;
        let k = self.verticals.len();
        match (0..k).rev().find(|&i| self.verticals[i] < n - k + i) {
            Some(i) => {
                self.verticals[i] += 1;
                for j in i + 1..k {
                    self.verticals[j] = self.verticals[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
    }
}

impl Iterator for MinimalPaths {
    type Item = Vec<Point>;

    fn next(&mut self) -> Option<Vec<Point>> {
        if self.done {
            return None;
        }
        let path = self.current_path();
        self.advance();
        Some(path)
    }
}

impl FusedIterator for MinimalPaths {}

/// Lazily enumerate every minimal orthogonal path from `from` to `to`.
///
/// Identical or orthogonally adjacent endpoints yield a single empty path.
///
/// ```
/// use gridlink_core::Point;
/// use gridlink_space::minimal_paths;
///
/// let first = minimal_paths(Point::new(0, 0), Point::new(2, 2)).next().unwrap();
/// assert_eq!(first, vec![Point::new(1, 0), Point::new(2, 0), Point::new(2, 1)]);
/// ```
pub fn minimal_paths(from: Point, to: Point) -> MinimalPaths {
    MinimalPaths::new(from, to)
}

/// Collect every minimal orthogonal path from `from` to `to`.
pub fn enumerate_paths(from: Point, to: Point) -> Vec<Vec<Point>> {
    minimal_paths(from, to).collect()
}

/// Number of distinct minimal paths, `C(dy + dx, dy)`, saturating at
/// `u64::MAX`.
pub fn path_count(from: Point, to: Point) -> u64 {
    let dy = from.row.abs_diff(to.row) as u128;
    let dx = from.col.abs_diff(to.col) as u128;
    let n = dy + dx;
    let k = dy.min(dx);
    let mut count: u128 = 1;
    for i in 1..=k {
        count = count * (n - k + i) / i;
        if count > u64::MAX as u128 {
            return u64::MAX;
        }
    }
    count as u64
}
