use std::{fmt, path::PathBuf};

/// Why a located file is missing from the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The file could not be read.
    Unreadable,
    /// The preprocessor could not be launched or exited with an error.
    Preprocess,
    /// The grammar rejected the (preprocessed) text.
    Parse,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unreadable => "unreadable",
            Self::Preprocess => "preprocess",
            Self::Parse => "parse",
        })
    }
}

/// A file that failed somewhere between reading and visiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
    pub message: String,
}

impl SkippedFile {
    pub fn new(path: impl Into<PathBuf>, reason: SkipReason, message: impl Into<String>) -> Self {
        Self { path: path.into(), reason, message: message.into() }
    }
}
