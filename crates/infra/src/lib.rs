// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod frontend;
pub mod output;
pub mod persistence;
pub mod platform;

pub use filesystem::WalkSourceLocator;
pub use frontend::{FrontendConfig, TreeSitterFrontend};
pub use output::{JsonReportWriter, JsonStyle, ReportFormat};
