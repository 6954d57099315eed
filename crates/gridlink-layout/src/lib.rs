//! Random station layouts for gridlink.
//!
//! Stations are placed by uniform rejection sampling: a drawn cell is
//! rejected if it, or any of its orthogonal neighbours, already holds a
//! station. Diagonal neighbours are allowed. Every draw counts against
//! [`LayoutConfig::max_attempts`], so a layout that cannot fit fails with
//! [`LayoutError::NotEnoughRoom`] instead of spinning.
//!
//! All randomness comes from the caller's RNG, or from a
//! [`ChaCha8Rng`] seeded with [`LayoutConfig::seed`], so a layout is
//! reproducible from its config alone.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;

pub use config::LayoutConfig;
pub use error::LayoutError;

use std::collections::HashSet;

use gridlink_core::Point;
use gridlink_space::SquareGrid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// A grid and the stations placed on it, in placement order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// The grid the stations were placed on.
    pub grid: SquareGrid,
    /// Placed stations, in placement order.
    pub stations: Vec<Point>,
}

/// Generate a layout from `config`, seeding a [`ChaCha8Rng`] with
/// `config.seed`.
///
/// # Errors
///
/// [`LayoutError::Space`] for an invalid `grid_size`,
/// [`LayoutError::NotEnoughRoom`] if `max_attempts` draws did not place
/// every station.
pub fn generate(config: &LayoutConfig) -> Result<Layout, LayoutError> {
    let grid = SquareGrid::new(config.grid_size)?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let stations = place_stations(&grid, config.station_count, config.max_attempts, &mut rng)?;
    Ok(Layout { grid, stations })
}

/// Place `count` stations on `grid` by rejection sampling from `rng`.
///
/// # Errors
///
/// [`LayoutError::NotEnoughRoom`] if `max_attempts` draws were used up
/// first.
pub fn place_stations<R: Rng>(
    grid: &SquareGrid,
    count: usize,
    max_attempts: u32,
    rng: &mut R,
) -> Result<Vec<Point>, LayoutError> {
    let mut stations = Vec::with_capacity(count);
    let mut occupied: HashSet<Point> = HashSet::with_capacity(count);
    let side = grid.size() as i32;
    let mut attempts = 0u32;

    while stations.len() < count {
        if attempts == max_attempts {
            return Err(LayoutError::NotEnoughRoom {
                requested: count,
                placed: stations.len(),
                attempts,
            });
        }
        attempts += 1;

        let p = Point::new(rng.gen_range(0..side), rng.gen_range(0..side));
        if is_free(&occupied, grid, p) {
            occupied.insert(p);
            stations.push(p);
        }
    }

    debug!(stations = stations.len(), attempts, size = grid.size(), "placed stations");
    Ok(stations)
}

/// Whether `p` and its orthogonal neighbours are all unoccupied.
fn is_free(occupied: &HashSet<Point>, grid: &SquareGrid, p: Point) -> bool {
    !occupied.contains(&p) && grid.neighbours(p).iter().all(|n| !occupied.contains(n))
}
