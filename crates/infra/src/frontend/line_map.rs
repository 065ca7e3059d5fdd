// crates/infra/src/frontend/line_map.rs
//! Maps lines of preprocessed text back to the file and line they came from,
//! using the `# N "file" flags` markers the preprocessor emits.

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;

/// `# 12 "file.h" 3 4`, `#line 12 "file.h"` and `#line 12`.
static LINE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[ \t]*#[ \t]*(?:line[ \t]+)?(?P<line>\d+)(?:[ \t]+"(?P<file>(?:[^"\\]|\\.)*)")?(?:[ \t]+\d+)*[ \t]*\r?$"#)
        .expect("valid line marker regex")
});

/// A position in a file the user wrote (or a header it included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin<'a> {
    pub file: &'a Path,
    /// 1-based.
    pub line: usize,
}

/// Per-line origin table. Index 0 of `files` is always the translation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMap {
    files: Vec<PathBuf>,
    /// `(file index, 1-based line)` for each line of the stripped text.
    rows: Vec<(usize, usize)>,
}

impl LineMap {
    /// The text is the file itself: row `n` is line `n + 1` of `unit`.
    pub fn identity(unit: &Path) -> Self {
        Self { files: vec![unit.to_path_buf()], rows: Vec::new() }
    }

    pub fn unit(&self) -> &Path {
        &self.files[0]
    }

    /// Origin of the 0-based `row` of the stripped text. Rows past the last
    /// recorded one continue its file.
    pub fn locate(&self, row: usize) -> Origin<'_> {
        if let Some(&(file, line)) = self.rows.get(row) {
            return Origin { file: &self.files[file], line };
        }
        match self.rows.len().checked_sub(1).map(|last| (last, self.rows[last])) {
            Some((last, (file, line))) => Origin { file: &self.files[file], line: line + (row - last) },
            None => Origin { file: self.unit(), line: row + 1 },
        }
    }

    fn intern(&mut self, file: PathBuf) -> usize {
        if let Some(index) = self.files.iter().position(|known| *known == file) {
            return index;
        }
        self.files.push(file);
        self.files.len() - 1
    }
}

/// Replaces every line marker in `text` with an empty line and records where
/// each remaining line originated. The line count of `text` is unchanged.
pub fn strip_line_markers(text: &str, unit: &Path) -> (String, LineMap) {
    let mut map = LineMap::identity(unit);
    let mut out = String::with_capacity(text.len());
    let mut file = 0;
    let mut next_line = 1;

    for raw in text.split_inclusive('\n') {
        let (body, newline) = match raw.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (raw, ""),
        };
        let marker = LINE_MARKER
            .captures(body)
            .and_then(|caps| Some((caps["line"].parse::<usize>().ok()?, caps.name("file").map(|m| m.as_str()))));

        match marker {
            Some((line, name)) => {
                if let Some(name) = name {
                    file = map.intern(unescape_name(name));
                }
                map.rows.push((file, line.saturating_sub(1).max(1)));
                next_line = line;
                out.push_str(newline);
            }
            None => {
                map.rows.push((file, next_line));
                next_line += 1;
                out.push_str(raw);
            }
        }
    }
    (out, map)
}

/// Undoes the preprocessor's string escaping.
fn unescape_name(escaped: &str) -> PathBuf {
    let mut name = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                name.push(next);
            }
        } else {
            name.push(c);
        }
    }
    PathBuf::from(name)
}
