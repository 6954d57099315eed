//! Grid geometry for gridlink.
//!
//! This crate holds everything the merge engine needs to know about the
//! square lattice:
//!
//! - [`SquareGrid`]: bounds, 4-connected neighbourhood, canonical order
//! - [`oracle`]: interior-cell cost between points, candidates and groups
//! - [`paths`]: lazy enumeration of every minimal orthogonal path
//! - [`render`]: text [`Canvas`] with pure overlays for display

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod oracle;
pub mod paths;
pub mod render;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::SpaceError;
pub use grid::SquareGrid;
pub use oracle::{
    candidate_distance, group_distance, point_distance, CandidateDistance, CandidateMatch,
    GroupDistance, PointPair,
};
pub use paths::{enumerate_paths, minimal_paths, path_count, MinimalPaths};
pub use render::{Canvas, Mark};
