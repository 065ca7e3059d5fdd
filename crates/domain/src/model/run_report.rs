use serde::{Deserialize, Serialize};

use crate::model::{FileReport, RunSummary};

/// The externally visible result of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub files: Vec<FileReport>,
    pub totals: RunSummary,
}

impl RunReport {
    /// Builds the report; totals are always recomputed from `files`.
    pub fn new(files: Vec<FileReport>) -> Self {
        let totals = RunSummary::from_reports(&files);
        Self { files, totals }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
