// crates/infra/src/output/json.rs
use std::io::Write;

use count_loops_domain::RunReport;
use count_loops_shared_kernel::{InfraResult, InfrastructureError};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

const INDENT: &[u8] = b"    ";

/// Layout of the rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Four-space indentation, one field per line.
    #[default]
    Pretty,
    /// Single line, no insignificant whitespace.
    Compact,
}

/// Serializes a [`RunReport`]. Key order follows the struct declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReportWriter {
    style: JsonStyle,
}

impl JsonReportWriter {
    pub fn new(style: JsonStyle) -> Self {
        Self { style }
    }

    pub fn write(&self, report: &RunReport, out: impl Write) -> InfraResult<()> {
        match self.style {
            JsonStyle::Pretty => {
                let mut ser = Serializer::with_formatter(out, PrettyFormatter::with_indent(INDENT));
                report.serialize(&mut ser)?;
            }
            JsonStyle::Compact => serde_json::to_writer(out, report)?,
        }
        Ok(())
    }

    /// Renders the report as a string without a trailing newline.
    pub fn render(&self, report: &RunReport) -> InfraResult<String> {
        let mut buf = Vec::with_capacity(256 + report.files.len() * 96);
        self.write(report, &mut buf)?;
        String::from_utf8(buf).map_err(|err| InfrastructureError::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        })
    }
}
