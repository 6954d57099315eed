//! Square grid with 4-connected neighbourhood (N/S/E/W).

use crate::error::SpaceError;
use gridlink_core::Point;
use smallvec::SmallVec;

/// A `size x size` square grid.
///
/// Each cell has coordinate `(row, col)` where `0 <= row, col < size`.
/// Neighbours are the four cardinal directions; cells on the border
/// simply have fewer of them. Distance is Manhattan (L1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareGrid {
    size: u32,
}

impl SquareGrid {
    /// Maximum side length: coordinates use `i32`, so each axis must fit.
    pub const MAX_SIZE: u32 = i32::MAX as u32;

    /// Create a new grid with `size * size` cells.
    ///
    /// Returns `Err(SpaceError::EmptyGrid)` if `size` is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if it exceeds `i32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlink_space::SquareGrid;
    /// use gridlink_core::Point;
    ///
    /// let grid = SquareGrid::new(5).unwrap();
    /// assert_eq!(grid.cell_count(), 25);
    ///
    /// // Corner cell (0, 0) has only 2 neighbours.
    /// assert_eq!(grid.neighbours(Point::new(0, 0)).len(), 2);
    /// ```
    pub fn new(size: u32) -> Result<Self, SpaceError> {
        if size == 0 {
            return Err(SpaceError::EmptyGrid);
        }
        if size > Self::MAX_SIZE {
            return Err(SpaceError::DimensionTooLarge {
                value: size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self { size })
    }

    /// Side length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Whether `p` lies on the grid.
    pub fn contains(&self, p: Point) -> bool {
        let n = self.size as i32;
        p.row >= 0 && p.row < n && p.col >= 0 && p.col < n
    }

    /// The in-bounds orthogonal neighbours of `p`, in N/S/W/E order.
    pub fn neighbours(&self, p: Point) -> SmallVec<[Point; 4]> {
        let offsets: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        offsets
            .into_iter()
            .map(|(dr, dc)| p.offset(dr, dc))
            .filter(|n| self.contains(*n))
            .collect()
    }

    /// Row-major canonical ordering: `(0,0), (0,1), ..., (size-1, size-1)`.
    pub fn canonical_ordering(&self) -> Vec<Point> {
        let n = self.size as i32;
        let mut out = Vec::with_capacity(self.cell_count());
        for r in 0..n {
            for c in 0..n {
                out.push(Point::new(r, c));
            }
        }
        out
    }

    /// Position of `p` in the canonical ordering, or `None` off-grid.
    pub fn canonical_rank(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.row as usize) * (self.size as usize) + (p.col as usize))
    }
}
