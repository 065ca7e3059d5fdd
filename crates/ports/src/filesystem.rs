// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use count_loops_shared_kernel::Result;

/// File name suffix identifying C translation units.
pub const SOURCE_SUFFIX: &str = ".c";

/// Input parameters controlling source discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatePlan {
    pub root: PathBuf,
    pub follow_links: bool,
    pub respect_ignore_files: bool,
    /// Glob patterns matched against root-relative paths.
    pub exclude: Vec<String>,
}

impl LocatePlan {
    /// Unconditional traversal of everything under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), follow_links: false, respect_ignore_files: false, exclude: Vec::new() }
    }
}

/// Port for enumerating source files.
///
/// Implementations return paths sorted and free of duplicates, and skip
/// entries they cannot read instead of failing the whole walk.
pub trait SourceLocator: Send + Sync {
    fn locate(&self, plan: &LocatePlan) -> Result<Vec<PathBuf>>;
}
