// crates/infra/src/frontend/preprocessor.rs
use std::{
    ffi::OsString,
    path::Path,
    process::{Command, Stdio},
};

use count_loops_shared_kernel::{InfraResult, InfrastructureError};
use log::debug;

use super::FrontendConfig;

/// Lines of preprocessor stderr kept in error messages.
const STDERR_LINES: usize = 8;

/// Runs the configured C preprocessor as a subprocess.
#[derive(Debug, Clone, Copy)]
pub struct Preprocessor<'a> {
    config: &'a FrontendConfig,
}

impl<'a> Preprocessor<'a> {
    pub fn new(config: &'a FrontendConfig) -> Self {
        Self { config }
    }

    /// Arguments placed before the input path. Line markers are kept for
    /// [`strip_line_markers`](super::line_map::strip_line_markers).
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(
            self.config.include_dirs.len() + self.config.defines.len() + self.config.cpp_args.len(),
        );
        for dir in &self.config.include_dirs {
            let mut arg = OsString::from("-I");
            arg.push(dir.as_os_str());
            args.push(arg);
        }
        for define in &self.config.defines {
            args.push(format!("-D{define}").into());
        }
        args.extend(self.config.cpp_args.iter().map(OsString::from));
        args
    }

    /// Macro-expands `path` and returns the expanded text.
    pub fn run(&self, path: &Path) -> InfraResult<String> {
        let program = &self.config.cpp_path;
        let args = self.args();
        debug!("{} {:?} {}", program.display(), args, path.display());

        let output = Command::new(program)
            .args(&args)
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| InfrastructureError::PreprocessorSpawn { program: program.clone(), source })?;

        if !output.status.success() {
            return Err(InfrastructureError::Preprocess {
                path: path.to_path_buf(),
                status: output.status.to_string(),
                stderr: summarize_stderr(&output.stderr),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn summarize_stderr(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let mut lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let hidden = lines.len().saturating_sub(STDERR_LINES);
    lines.truncate(STDERR_LINES);
    let mut summary = lines.join("; ");
    if hidden > 0 {
        summary.push_str(&format!(" (+{hidden} more line(s))"));
    }
    if summary.is_empty() {
        summary.push_str("no diagnostics");
    }
    summary
}
