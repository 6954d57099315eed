//! Greedy group-merge engine for gridlink.
//!
//! Starts from one group per station and repeatedly merges the two
//! closest groups until a single group covers every station. Each group
//! carries every tied way of connecting its stations that the configured
//! [`RetentionPolicy`] lets it keep; the terminal group's candidates are
//! resolved to one network by the [`SelectionPolicy`].
//!
//! The engine is single-threaded and synchronous. [`Solver`] can be
//! driven one merge at a time with [`Solver::step`] or to completion with
//! [`Solver::run`], which reports every merge to a [`StepObserver`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod observer;
pub mod policy;
pub mod solver;

pub use config::SolverConfig;
pub use metrics::{MergeRecord, SolveMetrics};
pub use observer::{ChannelObserver, NoopObserver, StepObserver, StepSnapshot};
pub use policy::{FirstSynthesized, KeepAll, KeepFirst, RetentionPolicy, SeededSample, SelectionPolicy};
pub use solver::{solve, validate_stations, Solution, Solver, SolverState};
