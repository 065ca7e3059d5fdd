// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use count_loops_ports::filesystem::{LocatePlan, SOURCE_SUFFIX, SourceLocator};
use count_loops_shared_kernel::{DomainError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::{DirEntry, WalkBuilder};
use log::{debug, warn};

use crate::platform::sort_and_dedup;

/// Filesystem adapter implementing the `SourceLocator` port with the `ignore` walker.
#[derive(Debug, Default)]
pub struct WalkSourceLocator;

impl WalkSourceLocator {
    pub fn new() -> Self {
        Self
    }
}

impl SourceLocator for WalkSourceLocator {
    fn locate(&self, plan: &LocatePlan) -> Result<Vec<PathBuf>> {
        locate_sources(plan)
    }
}

fn locate_sources(plan: &LocatePlan) -> Result<Vec<PathBuf>> {
    if !plan.root.is_dir() {
        return Err(DomainError::InvalidConfiguration {
            reason: format!("root '{}' is not a readable directory", plan.root.display()),
        }
        .into());
    }
    let excludes = ExcludeMatcher::new(&plan.exclude)?;

    let mut builder = WalkBuilder::new(&plan.root);
    builder.follow_links(plan.follow_links);
    // Traversal is unconditional unless ignore files were requested.
    builder.hidden(false);
    builder.parents(plan.respect_ignore_files);
    builder.ignore(plan.respect_ignore_files);
    builder.git_ignore(plan.respect_ignore_files);
    builder.git_global(plan.respect_ignore_files);
    builder.git_exclude(plan.respect_ignore_files);
    builder.require_git(false);

    if !excludes.is_empty() {
        let root = plan.root.clone();
        builder.filter_entry(move |entry| entry.depth() == 0 || !excludes.is_excluded(entry.path(), &root));
    }

    let mut paths = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                warn!("walk error (entry skipped): {err}");
                continue;
            }
        };
        if is_source_file(&entry, plan.follow_links) {
            paths.push(entry.into_path());
        }
    }

    sort_and_dedup(&mut paths);
    debug!("walk of {} found {} candidate(s)", plan.root.display(), paths.len());
    Ok(paths)
}

fn is_source_file(entry: &DirEntry, follow_links: bool) -> bool {
    if !has_source_suffix(entry.path()) {
        return false;
    }
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        // The walker may report the link itself; decide by the target.
        Some(ft) if ft.is_symlink() && follow_links => {
            std::fs::metadata(entry.path()).map(|md| md.is_file()).unwrap_or(false)
        }
        _ => false,
    }
}

fn has_source_suffix(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name.to_string_lossy().ends_with(SOURCE_SUFFIX))
}

/// Compiled `--exclude` globs, tested against the root-relative path and the file name.
#[derive(Debug, Clone)]
struct ExcludeMatcher {
    set: GlobSet,
    len: usize,
}

impl ExcludeMatcher {
    fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            #[cfg(windows)]
            let pattern = &pattern.replace('\\', "/");
            let glob = Glob::new(pattern).map_err(|err| DomainError::InvalidPattern {
                pattern: pattern.clone(),
                details: err.to_string(),
                source: Some(Box::new(err)),
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|err| DomainError::InvalidPattern {
            pattern: patterns.join(","),
            details: err.to_string(),
            source: Some(Box::new(err)),
        })?;
        Ok(Self { set, len: patterns.len() })
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn is_excluded(&self, path: &Path, root: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        if self.set.is_match(relative) {
            return true;
        }
        path.file_name().is_some_and(|name| self.set.is_match(Path::new(name)))
    }
}
