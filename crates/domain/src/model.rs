pub mod entities;
pub mod loop_kind;
pub mod run_report;
pub mod value_objects;

pub use entities::{FileReport, SkipReason, SkippedFile};
pub use loop_kind::LoopKind;
pub use run_report::RunReport;
pub use value_objects::{LoopTally, RunSummary};
