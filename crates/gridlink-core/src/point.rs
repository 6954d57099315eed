//! Grid points.

use std::fmt;

/// A cell on the square grid, addressed as `(row, col)`.
///
/// Coordinates are signed so that step arithmetic toward a target never
/// underflows; valid grid cells always have `0 <= row, col < size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Row index, growing downwards.
    pub row: i32,
    /// Column index, growing to the right.
    pub col: i32,
}

impl Point {
    /// Create a point at `(row, col)`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance to `other`.
    ///
    /// ```
    /// use gridlink_core::Point;
    /// assert_eq!(Point::new(0, 0).manhattan(Point::new(2, 3)), 5);
    /// ```
    pub fn manhattan(self, other: Point) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The point shifted by `(dr, dc)`.
    pub fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// Whether `other` is one of the four orthogonal neighbours of `self`.
    pub fn is_orthogonal_neighbour(self, other: Point) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
