//! Benchmark layouts for the gridlink solver.
//!
//! - [`reference_layout`]: 12x12 grid, 6 stations
//! - [`stress_layout`]: 24x24 grid, 12 stations
//! - [`corner_layout`]: the four corners of an `n x n` grid, which
//!   maximizes tied routes per merge

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridlink_core::Point;
use gridlink_layout::{generate, Layout, LayoutConfig, LayoutError};
use gridlink_space::{SpaceError, SquareGrid};

/// Build the reference benchmark layout: 12x12 grid, 6 stations.
pub fn reference_layout(seed: u64) -> Result<Layout, LayoutError> {
    generate(&LayoutConfig {
        grid_size: 12,
        station_count: 6,
        seed,
        ..LayoutConfig::default()
    })
}

/// Build the stress layout: 24x24 grid, 12 stations.
///
/// Same generator as [`reference_layout`] at four times the cell count.
pub fn stress_layout(seed: u64) -> Result<Layout, LayoutError> {
    generate(&LayoutConfig {
        grid_size: 24,
        station_count: 12,
        seed,
        ..LayoutConfig::default()
    })
}

/// Stations on the four corners of an `n x n` grid.
pub fn corner_layout(n: u32) -> Result<Layout, SpaceError> {
    let grid = SquareGrid::new(n)?;
    let m = n as i32 - 1;
    let stations = vec![
        Point::new(0, 0),
        Point::new(0, m),
        Point::new(m, 0),
        Point::new(m, m),
    ];
    Ok(Layout { grid, stations })
}
