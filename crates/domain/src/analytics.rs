//! Per-directory roll-up of file reports.

use std::{
    collections::HashMap,
    path::{Component, Path},
};

use crate::model::{FileReport, LoopTally};

/// Loop counts summed over every reported file below one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySummary {
    /// `/`-joined path relative to the scan root; `.` for the root itself.
    pub directory: String,
    pub files: usize,
    pub tally: LoopTally,
}

/// Groups file reports by the directory they live in.
pub struct Aggregator;

impl Aggregator {
    /// Sums `reports` per directory, keeping at most `depth` leading
    /// components of each root-relative parent (all of them when `None`).
    /// Sorted by total loops, descending, then by directory, descending.
    pub fn by_directory(reports: &[FileReport], root: &Path, depth: Option<usize>) -> Vec<DirectorySummary> {
        let mut map: HashMap<String, (usize, LoopTally)> = HashMap::new();
        for report in reports {
            let entry = map.entry(dir_key(&report.path, root, depth)).or_default();
            entry.0 += 1;
            entry.1 += report.tally;
        }

        let mut groups: Vec<DirectorySummary> = map
            .into_iter()
            .map(|(directory, (files, tally))| DirectorySummary { directory, files, tally })
            .collect();
        groups.sort_by(|a, b| {
            b.tally.total().cmp(&a.tally.total()).then_with(|| b.directory.cmp(&a.directory))
        });
        groups
    }
}

fn dir_key(path: &Path, root: &Path, depth: Option<usize>) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let base = relative.parent().unwrap_or(Path::new("."));
    let parts: Vec<String> = base
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .take(depth.unwrap_or(usize::MAX))
        .collect();
    if parts.is_empty() { ".".to_string() } else { parts.join("/") }
}
