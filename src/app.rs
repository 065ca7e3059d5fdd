// src/app.rs
use crate::config::Config;
use anyhow::{Context, Result};
use count_loops_infra::{TreeSitterFrontend, WalkSourceLocator, persistence::FileWriter};
use count_loops_usecase::{CountLoops, RunOutcome};
use log::{debug, info};
use std::io::Write;

/// Locates, parses and tallies every source file the configuration selects.
pub fn count(config: &Config) -> Result<RunOutcome> {
    let locator = WalkSourceLocator::new();
    let frontend = TreeSitterFrontend::new(config.frontend.clone());
    debug!("frontend: {:?}", frontend.config());

    CountLoops::new(&locator, &frontend)
        .with_options(config.report)
        .run(&config.plan)
        .with_context(|| format!("failed to count loops under {}", config.plan.root.display()))
}

/// Runs the count and renders the report in the configured format. JSON
/// comes back without a trailing newline.
pub fn generate_report(config: &Config) -> Result<String> {
    let outcome = count(config)?;
    config
        .format
        .render(&outcome.report, &config.plan.root)
        .with_context(|| format!("failed to serialize {} report", config.format.name()))
}

/// Full invocation: count, render, then write to the configured destination.
pub fn run(config: &Config) -> Result<()> {
    let mut text = generate_report(config)?;
    if !text.ends_with('\n') {
        text.push('\n');
    }

    match &config.output_path {
        Some(path) => {
            FileWriter::atomic_write(path, text.as_bytes())
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            info!("report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write report to stdout")?;
        }
    }
    Ok(())
}
