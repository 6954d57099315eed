//! Generator configuration.

/// Parameters for [`generate`](crate::generate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Side length of the square grid. Default: 5.
    pub grid_size: u32,
    /// Stations to place. Default: 4.
    pub station_count: usize,
    /// Cell draws allowed before giving up. Default: 10 000.
    pub max_attempts: u32,
    /// Seed for the placement RNG. Default: 0.
    pub seed: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            station_count: 4,
            max_attempts: 10_000,
            seed: 0,
        }
    }
}
