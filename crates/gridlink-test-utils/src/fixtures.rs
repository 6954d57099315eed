//! Reusable station layouts.
//!
//! Each fixture returns the grid and the stations in input order.

use gridlink_core::Point;
use gridlink_space::SquareGrid;

fn grid(size: u32) -> SquareGrid {
    SquareGrid::new(size).expect("fixture grid size is non-zero")
}

/// Two stations on one row with a single gap: length 1.
pub fn one_gap() -> (SquareGrid, Vec<Point>) {
    (grid(5), vec![Point::new(0, 0), Point::new(0, 2)])
}

/// Opposite corners of a 3x3 block: length 3, six tied paths.
pub fn diagonal() -> (SquareGrid, Vec<Point>) {
    (grid(5), vec![Point::new(0, 0), Point::new(2, 2)])
}

/// Three stations evenly spaced on one row: length 2.
pub fn three_in_a_row() -> (SquareGrid, Vec<Point>) {
    (grid(5), vec![Point::new(0, 0), Point::new(0, 2), Point::new(0, 4)])
}

/// The four corners of a `size x size` grid.
pub fn corners(size: u32) -> (SquareGrid, Vec<Point>) {
    let m = size as i32 - 1;
    (
        grid(size),
        vec![Point::new(0, 0), Point::new(0, m), Point::new(m, 0), Point::new(m, m)],
    )
}

/// A plus shape: one centre station and four arms `arm` cells out.
pub fn plus(arm: i32) -> (SquareGrid, Vec<Point>) {
    let c = arm;
    (
        grid((2 * arm + 1) as u32),
        vec![
            Point::new(c, c),
            Point::new(0, c),
            Point::new(2 * c, c),
            Point::new(c, 0),
            Point::new(c, 2 * c),
        ],
    )
}
