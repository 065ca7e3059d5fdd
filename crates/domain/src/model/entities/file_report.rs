use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::LoopTally;

/// Loop counts for one successfully parsed source file.
///
/// Serializes to `{"filename", "numwhile", "numdowhile", "numfor"}`; the full
/// path is kept for ordering and diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub filename: String,
    #[serde(skip)]
    pub path: PathBuf,
    #[serde(flatten)]
    pub tally: LoopTally,
}

impl FileReport {
    /// Report labelled with the file's basename.
    pub fn new(path: impl Into<PathBuf>, tally: LoopTally) -> Self {
        let path = path.into();
        let filename = basename(&path);
        Self { filename, path, tally }
    }

    /// Report labelled with `path` relative to `root`, using `/` separators.
    /// Falls back to the basename when `path` is not under `root`.
    pub fn relative_to(path: impl Into<PathBuf>, root: &Path, tally: LoopTally) -> Self {
        let path = path.into();
        let filename = match path.strip_prefix(root) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            _ => basename(&path),
        };
        Self { filename, path, tally }
    }
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
