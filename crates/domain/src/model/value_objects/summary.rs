use count_loops_shared_kernel::LoopCount;
use serde::{Deserialize, Serialize};

use crate::model::{FileReport, LoopTally};

/// Run-wide totals, derived by summing the per-file reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    #[serde(rename = "totfiles")]
    pub files: usize,
    #[serde(rename = "totwhile")]
    pub while_loops: LoopCount,
    #[serde(rename = "totdowhile")]
    pub do_while_loops: LoopCount,
    #[serde(rename = "totfor")]
    pub for_loops: LoopCount,
}

impl RunSummary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let tally = reports.iter().fold(LoopTally::default(), |acc, report| acc + report.tally);
        Self {
            files: reports.len(),
            while_loops: tally.while_loops,
            do_while_loops: tally.do_while_loops,
            for_loops: tally.for_loops,
        }
    }
}
