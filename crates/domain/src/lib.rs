//! # Domain
//!
//! Loop-counting vocabulary shared by every other crate:
//!
//! - [`model`]: loop kinds, per-file reports, run totals
//! - [`analytics`]: per-directory roll-ups of file reports
//! - [`counter`]: the visitor that tallies one loop kind
//! - [`visit`]: the visitor contract syntax trees drive

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod counter;
pub mod model;
pub mod visit;

pub use analytics::{Aggregator, DirectorySummary};
pub use counter::{LoopCounter, LoopCounterSet};
pub use model::{FileReport, LoopKind, LoopTally, RunReport, RunSummary, SkipReason, SkippedFile};
pub use visit::{LoopSite, LoopVisitor};
