//! Generate a random layout, solve it, and print every merge.
//!
//! Usage: `cargo run -p gridlink --example connect [SEED] [SIZE] [STATIONS]`
//!
//! Set `RUST_LOG=gridlink_engine=debug` to see per-merge solver events.

use gridlink::prelude::*;
use tracing_subscriber::EnvFilter;

fn arg<T: std::str::FromStr>(n: usize, default: T) -> T {
    std::env::args()
        .nth(n)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let defaults = LayoutConfig::default();
    let config = LayoutConfig {
        seed: arg(1, defaults.seed),
        grid_size: arg(2, defaults.grid_size),
        station_count: arg(3, defaults.station_count),
        ..defaults
    };
    let layout = generate(&config)?;
    let canvas = Canvas::new(&layout.grid, &layout.stations);
    println!("{canvas}");

    let mut print_step = |record: &MergeRecord, groups: &[Group]| {
        println!(
            "step {}: merged groups {} and {} (+{} cells, {} tied)",
            record.step, record.left, record.right, record.distance, record.retained
        );
        let merged = &groups[record.left];
        println!("{}", canvas.overlay(merged.candidates()[0].iter()));
    };
    let solution = Solver::new(SolverConfig::default(), layout.grid, &layout.stations)?
        .run(&mut print_step);

    println!("Final grid:");
    println!("{}", canvas.overlay(solution.interior()));
    println!(
        "Total path length: {} ({} tied networks)",
        solution.length(),
        solution.alternatives()
    );
    Ok(())
}
