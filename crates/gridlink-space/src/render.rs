//! Text rendering of a grid, its stations and a connecting network.
//!
//! A [`Canvas`] is a value: overlaying a network returns a new canvas and
//! leaves the base untouched, so the same base can be reused for every
//! merge step of a solve.

use crate::grid::SquareGrid;
use gridlink_core::Point;
use std::fmt;

/// What occupies one cell of a [`Canvas`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    /// Empty cell.
    Blank,
    /// A station that must be connected.
    Station,
    /// An interior cell of a connecting network.
    Network,
}

impl Mark {
    /// Single-character glyph used by the [`Canvas`] display.
    pub fn glyph(self) -> char {
        match self {
            Self::Blank => '.',
            Self::Station => 'X',
            Self::Network => '#',
        }
    }
}

/// A row-major grid of [`Mark`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    grid: SquareGrid,
    marks: Vec<Mark>,
}

impl Canvas {
    /// A canvas with `stations` marked on an otherwise blank grid.
    ///
    /// Off-grid stations are ignored.
    pub fn new(grid: &SquareGrid, stations: &[Point]) -> Self {
        let mut marks = vec![Mark::Blank; grid.cell_count()];
        for &s in stations {
            if let Some(i) = grid.canonical_rank(s) {
                marks[i] = Mark::Station;
            }
        }
        Self { grid: *grid, marks }
    }

    /// A copy of this canvas with every blank cell in `cells` marked as
    /// [`Mark::Network`]. Stations keep their mark.
    pub fn overlay<'a>(&self, cells: impl IntoIterator<Item = &'a Point>) -> Canvas {
        let mut marks = self.marks.clone();
        for &cell in cells {
            if let Some(i) = self.grid.canonical_rank(cell) {
                if marks[i] == Mark::Blank {
                    marks[i] = Mark::Network;
                }
            }
        }
        Canvas {
            grid: self.grid,
            marks,
        }
    }

    /// The mark at `p`, or `None` off-grid.
    pub fn mark(&self, p: Point) -> Option<Mark> {
        self.grid.canonical_rank(p).map(|i| self.marks[i])
    }

    /// Number of cells carrying `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }
}

impl fmt::Display for Canvas {
    /// Column header, then one `row [c c c]` line per row. Columns are
    /// padded to the widest index so large grids stay aligned.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.grid.size() as usize;
        let width = (size - 1).to_string().len();
        write!(f, "{:width$}", "", width = width + 2)?;
        for c in 0..size {
            if c > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c:>width$}")?;
        }
        writeln!(f)?;
        for (r, row) in self.marks.chunks(size).enumerate() {
            write!(f, "{r:>width$} [")?;
            for (c, mark) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", mark.glyph())?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
