use count_loops_domain::{FileReport, RunReport, SkippedFile};

/// Result of processing one located file.
pub type FileOutcome = std::result::Result<FileReport, SkippedFile>;

/// Knobs for [`crate::CountLoops`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Worker threads; `1` processes files sequentially.
    pub jobs: usize,
    /// Label files with their root-relative path instead of the basename.
    pub relative_names: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { jobs: 1, relative_names: false }
    }
}

/// Everything a run produced: the serializable report plus the files left out of it.
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    pub report: RunReport,
    pub skipped: Vec<SkippedFile>,
}

impl RunOutcome {
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = FileOutcome>) -> Self {
        let mut files = Vec::new();
        let mut skipped = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(report) => files.push(report),
                Err(skip) => skipped.push(skip),
            }
        }
        Self { report: RunReport::new(files), skipped }
    }
}
