use std::path::{Path, PathBuf};

use count_loops_domain::{FileReport, LoopCounterSet, SkipReason, SkippedFile};
use count_loops_ports::{
    filesystem::{LocatePlan, SourceLocator},
    frontend::CFrontend,
};
use count_loops_shared_kernel::{ApplicationError, CountLoopsError, InfrastructureError, Result};
use log::{debug, info, warn};

use crate::dto::{FileOutcome, ReportOptions, RunOutcome};

/// The report builder: drives every located file through the front end and
/// tallies its loops with a fresh set of counters.
pub struct CountLoops<'a> {
    locator: &'a dyn SourceLocator,
    frontend: &'a dyn CFrontend,
    options: ReportOptions,
}

impl<'a> CountLoops<'a> {
    pub fn new(locator: &'a dyn SourceLocator, frontend: &'a dyn CFrontend) -> Self {
        Self { locator, frontend, options: ReportOptions::default() }
    }

    pub fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(&self, plan: &LocatePlan) -> Result<RunOutcome> {
        let paths = self.locator.locate(plan).map_err(|source| ApplicationError::LocateFailed {
            root: plan.root.clone(),
            source: Box::new(source),
        })?;
        info!("located {} source file(s) under {}", paths.len(), plan.root.display());
        self.report(&plan.root, &paths)
    }

    /// Builds the report for an explicit list of paths. `paths` should already
    /// be in the desired report order.
    pub fn report(&self, root: &Path, paths: &[PathBuf]) -> Result<RunOutcome> {
        let outcomes = self.process_all(root, paths)?;
        let outcome = RunOutcome::from_outcomes(outcomes);
        if !outcome.skipped.is_empty() {
            warn!("{} of {} file(s) skipped", outcome.skipped.len(), paths.len());
        }
        Ok(outcome)
    }

    #[cfg(feature = "parallel")]
    fn process_all(&self, root: &Path, paths: &[PathBuf]) -> Result<Vec<FileOutcome>> {
        use rayon::prelude::*;

        if self.options.jobs <= 1 || paths.len() <= 1 {
            return Ok(paths.iter().map(|path| self.process(root, path)).collect());
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.jobs)
            .build()
            .map_err(|err| ApplicationError::WorkerPool { details: err.to_string() })?;
        // indexed collect keeps the input order
        Ok(pool.install(|| paths.par_iter().map(|path| self.process(root, path)).collect()))
    }

    #[cfg(not(feature = "parallel"))]
    fn process_all(&self, root: &Path, paths: &[PathBuf]) -> Result<Vec<FileOutcome>> {
        if self.options.jobs > 1 {
            debug!("built without the `parallel` feature; ignoring jobs = {}", self.options.jobs);
        }
        Ok(paths.iter().map(|path| self.process(root, path)).collect())
    }

    fn process(&self, root: &Path, path: &Path) -> FileOutcome {
        debug!("processing {}", path.display());
        let tree = match self.frontend.parse(path) {
            Ok(tree) => tree,
            Err(err) => {
                let reason = classify(&err);
                warn!("skipping {} ({reason}): {err}", path.display());
                return Err(SkippedFile::new(path, reason, err.to_string()));
            }
        };

        let mut counters = LoopCounterSet::new();
        tree.accept(&mut counters);
        let tally = counters.tally();

        Ok(if self.options.relative_names {
            FileReport::relative_to(path, root, tally)
        } else {
            FileReport::new(path, tally)
        })
    }
}

fn classify(err: &CountLoopsError) -> SkipReason {
    match err.as_infrastructure() {
        Some(InfrastructureError::FileRead { .. }) => SkipReason::Unreadable,
        Some(InfrastructureError::PreprocessorSpawn { .. } | InfrastructureError::Preprocess { .. }) => {
            SkipReason::Preprocess
        }
        _ => SkipReason::Parse,
    }
}
