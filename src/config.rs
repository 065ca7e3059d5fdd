// src/config.rs
use crate::args::{Args, OutputFormat};
use count_loops_infra::{FrontendConfig, JsonStyle, ReportFormat};
use count_loops_ports::filesystem::LocatePlan;
use count_loops_shared_kernel::PresentationError;
use count_loops_usecase::ReportOptions;
use derive_builder::Builder;
use std::path::PathBuf;

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub plan: LocatePlan,
    #[builder(default)]
    pub frontend: FrontendConfig,
    #[builder(default)]
    pub report: ReportOptions,
    #[builder(default)]
    pub format: ReportFormat,
    /// `None` writes to stdout.
    #[builder(default)]
    pub output_path: Option<PathBuf>,
    /// Positive for `-v`, negative for `-q`.
    #[builder(default)]
    pub verbosity: i8,
}

impl Config {
    /// Settings for counting `root` with every default.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            plan: LocatePlan::new(root),
            frontend: FrontendConfig::default(),
            report: ReportOptions::default(),
            format: ReportFormat::default(),
            output_path: None,
            verbosity: 0,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let plan = LocatePlan {
            root: args.root,
            follow_links: args.scan.follow,
            respect_ignore_files: args.scan.gitignore,
            exclude: args.scan.exclude,
        };

        let report = ReportOptions {
            jobs: resolve_jobs(args.scan.jobs),
            relative_names: args.output.relative_names,
        };

        let style = if args.output.compact { JsonStyle::Compact } else { JsonStyle::Pretty };
        let format = match args.output.format {
            OutputFormat::Json => ReportFormat::Json(style),
            OutputFormat::Csv => ReportFormat::Csv,
            OutputFormat::Dirs => ReportFormat::Directories { depth: args.output.dir_depth },
        };

        let verbosity = i8::try_from(args.log.verbose).unwrap_or(i8::MAX)
            - i8::try_from(args.log.quiet).unwrap_or(i8::MAX);

        ConfigBuilder::default()
            .plan(plan)
            .frontend(frontend_config_from_args(args.preprocess))
            .report(report)
            .format(format)
            .output_path(args.output.output)
            .verbosity(verbosity)
            .build()
            .map_err(|err| PresentationError::ConfigBuildFailed(err.to_string()))
    }
}

fn frontend_config_from_args(opts: crate::args::PreprocessOptions) -> FrontendConfig {
    let defaults = FrontendConfig::default();
    FrontendConfig {
        use_cpp: !opts.no_cpp,
        cpp_path: opts.cpp.unwrap_or(defaults.cpp_path),
        include_dirs: opts.include_dirs,
        defines: opts.defines,
        cpp_args: opts.cpp_args,
        sanitize_gnu: !opts.no_sanitize,
        lenient: opts.lenient,
    }
}

fn resolve_jobs(requested: usize) -> usize {
    if requested == 0 { num_cpus::get().max(1) } else { requested }
}
