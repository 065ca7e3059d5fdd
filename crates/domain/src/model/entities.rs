pub mod file_report;
pub mod skipped_file;

pub use file_report::FileReport;
pub use skipped_file::{SkipReason, SkippedFile};
