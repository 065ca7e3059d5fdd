//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: locate sources, parse each one, tally loops, build the run report
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{FileOutcome, ReportOptions, RunOutcome};
pub use orchestrator::CountLoops;
