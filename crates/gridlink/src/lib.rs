//! gridlink: connect stations on a square grid with a short rectilinear
//! network.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the gridlink sub-crates. For most users, adding `gridlink` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridlink::prelude::*;
//!
//! let layout = generate(&LayoutConfig { seed: 7, ..LayoutConfig::default() }).unwrap();
//! let solution = solve(&layout.grid, &layout.stations).unwrap();
//! assert_eq!(solution.history().len(), layout.stations.len() - 1);
//!
//! let picture = Canvas::new(&layout.grid, &layout.stations).overlay(solution.interior());
//! assert_eq!(picture.count(Mark::Network), solution.length());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridlink-core` | Points, IDs, candidates, groups, `SolveError` |
//! | [`space`] | `gridlink-space` | Grid geometry, distance oracle, path enumeration, rendering |
//! | [`engine`] | `gridlink-engine` | The solver, its policies and observers |
//! | [`layout`] | `gridlink-layout` | Seeded random station layouts |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`gridlink-core`).
pub use gridlink_core as types;

/// Grid geometry and the distance oracle (`gridlink-space`).
///
/// Provides [`space::SquareGrid`], [`space::group_distance`],
/// [`space::minimal_paths`] and the text [`space::Canvas`].
pub use gridlink_space as space;

/// The greedy merge solver (`gridlink-engine`).
///
/// [`engine::Solver`] for stepwise or full solves, [`engine::solve`] for
/// the default configuration.
pub use gridlink_engine as engine;

/// Seeded random station layouts (`gridlink-layout`).
pub use gridlink_layout as layout;

/// Common imports for typical gridlink usage.
///
/// ```rust
/// use gridlink::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridlink_core::{Candidate, Group, Point, SolveError, StationId, StepId};

    // Space
    pub use gridlink_space::{Canvas, Mark, SpaceError, SquareGrid};

    // Engine
    pub use gridlink_engine::{
        solve, ChannelObserver, KeepAll, KeepFirst, MergeRecord, NoopObserver, SeededSample,
        Solution, Solver, SolverConfig, StepObserver,
    };

    // Layout
    pub use gridlink_layout::{generate, Layout, LayoutConfig, LayoutError};
}
