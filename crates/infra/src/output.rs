// crates/infra/src/output.rs
pub mod csv;
pub mod json;

use std::path::Path;

use count_loops_domain::{Aggregator, RunReport};
use count_loops_shared_kernel::{InfraResult, InfrastructureError};

pub use json::{JsonReportWriter, JsonStyle};

/// What a run is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// `{"files": [...], "totals": {...}}`.
    Json(JsonStyle),
    /// Per-file rows.
    Csv,
    /// Per-directory rows, keeping `depth` leading components (all when `None`).
    Directories { depth: Option<usize> },
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self::Json(JsonStyle::default())
    }
}

impl ReportFormat {
    /// Renders `report`; directory keys are taken relative to `root`.
    /// JSON has no trailing newline, the row formats end every row with one.
    pub fn render(self, report: &RunReport, root: &Path) -> InfraResult<String> {
        let mut buf = Vec::with_capacity(128 + report.files.len() * 64);
        match self {
            Self::Json(style) => JsonReportWriter::new(style).write(report, &mut buf)?,
            Self::Csv => csv::write_files(report, &mut buf)?,
            Self::Directories { depth } => {
                let groups = Aggregator::by_directory(&report.files, root, depth);
                csv::write_directories(&groups, &mut buf)?;
            }
        }
        String::from_utf8(buf).map_err(|err| InfrastructureError::SerializationError {
            format: self.name().to_string(),
            details: err.to_string(),
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Json(_) => "JSON",
            Self::Csv | Self::Directories { .. } => "CSV",
        }
    }
}

#[cfg(test)]
mod tests {
    use count_loops_domain::{FileReport, LoopTally};

    use super::*;

    fn sample() -> RunReport {
        RunReport::new(vec![
            FileReport::relative_to("root/lib/a.c", Path::new("root"), LoopTally::new(1, 0, 0)),
            FileReport::relative_to("root/lib/b.c", Path::new("root"), LoopTally::new(0, 2, 0)),
            FileReport::relative_to("root/c.c", Path::new("root"), LoopTally::new(0, 0, 1)),
        ])
    }

    #[test]
    fn default_is_pretty_json() {
        assert_eq!(ReportFormat::default(), ReportFormat::Json(JsonStyle::Pretty));
    }

    #[test]
    fn json_matches_the_json_writer() {
        let format = ReportFormat::Json(JsonStyle::Compact);
        let expected = JsonReportWriter::new(JsonStyle::Compact).render(&sample()).unwrap();
        assert_eq!(format.render(&sample(), Path::new("root")).unwrap(), expected);
    }

    #[test]
    fn csv_uses_report_filenames() {
        let text = ReportFormat::Csv.render(&sample(), Path::new("root")).unwrap();
        assert!(text.contains("\"lib/a.c\",1,0,0\n"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn directory_summary_leaves_json_shape_alone() {
        let text = ReportFormat::Directories { depth: None }.render(&sample(), Path::new("root")).unwrap();
        assert_eq!(
            text,
            "directory,files,numwhile,numdowhile,numfor,total\n\"lib\",2,1,2,0,3\n\".\",1,0,0,1,1\n"
        );
    }
}
