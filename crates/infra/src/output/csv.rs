// crates/infra/src/output/csv.rs
use std::io::Write;

use count_loops_domain::{DirectorySummary, LoopKind, LoopTally, RunReport};
use count_loops_shared_kernel::InfraResult;

const SEP: char = ',';

/// One row per file: `filename,numwhile,numdowhile,numfor`.
pub fn write_files(report: &RunReport, out: &mut impl Write) -> InfraResult<()> {
    writeln!(out, "filename{SEP}numwhile{SEP}numdowhile{SEP}numfor")?;
    for file in &report.files {
        writeln!(out, "{}{SEP}{}", escape_field(&file.filename), counts(&file.tally))?;
    }
    Ok(())
}

/// One row per directory: `directory,files,numwhile,numdowhile,numfor,total`.
pub fn write_directories(groups: &[DirectorySummary], out: &mut impl Write) -> InfraResult<()> {
    writeln!(out, "directory{SEP}files{SEP}numwhile{SEP}numdowhile{SEP}numfor{SEP}total")?;
    for group in groups {
        writeln!(
            out,
            "{}{SEP}{}{SEP}{}{SEP}{}",
            escape_field(&group.directory),
            group.files,
            counts(&group.tally),
            group.tally.total()
        )?;
    }
    Ok(())
}

fn counts(tally: &LoopTally) -> String {
    LoopKind::ALL.iter().map(|&kind| tally[kind].to_string()).collect::<Vec<_>>().join(&SEP.to_string())
}

/// Always quoted, with embedded quotes doubled.
fn escape_field(s: &str) -> String {
    let escaped = s.replace('"', "\"\"");
    format!("\"{escaped}\"")
}
