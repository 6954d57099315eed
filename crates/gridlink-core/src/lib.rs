//! Core types for the gridlink solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the data model shared by every other gridlink crate: grid points,
//! identifiers, candidate networks, groups of tied candidates, and the
//! input validation error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod candidate;
pub mod error;
pub mod group;
pub mod id;
pub mod point;

pub use candidate::Candidate;
pub use error::SolveError;
pub use group::Group;
pub use id::{StationId, StepId};
pub use point::Point;
