// crates/infra/src/frontend.rs
//! C front end: preprocessor subprocess, line-marker map, GNU sanitizer and
//! tree-sitter parser.

pub mod line_map;
pub mod preprocessor;
pub mod sanitize;
pub mod tree;

use std::path::PathBuf;

pub use line_map::{LineMap, Origin};
pub use preprocessor::Preprocessor;
pub use tree::{CTree, LoadedSource, TreeSitterFrontend};

use crate::platform::PreprocessorResolver;

/// How source files are turned into syntax trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Run the preprocessor before parsing; otherwise the file is parsed as written.
    pub use_cpp: bool,
    pub cpp_path: PathBuf,
    /// Passed as `-I<dir>`.
    pub include_dirs: Vec<PathBuf>,
    /// Passed as `-D<name[=value]>`.
    pub defines: Vec<String>,
    /// Extra arguments handed to the preprocessor verbatim.
    pub cpp_args: Vec<String>,
    /// Strip GCC extensions before parsing.
    pub sanitize_gnu: bool,
    /// Accept trees containing syntax errors.
    pub lenient: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            use_cpp: true,
            cpp_path: PreprocessorResolver::resolve(),
            include_dirs: Vec::new(),
            defines: Vec::new(),
            cpp_args: Vec::new(),
            sanitize_gnu: true,
            lenient: false,
        }
    }
}
