use std::io::Write;
use std::path::Path;

use crate::build::{BuildListener, BuildOrchestrator, BuildResult, CommandRunner, SystemRunner};
use crate::cli::{Cli, RunArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::framework::{BuildStep, Framework, FrameworkSet};
use crate::measure::ArtifactSizer;
use crate::output::svg::layout;
use crate::output::{BuildProgress, ErrorOutput, Report, ReportEmitter};
use crate::ranking::rank;
use crate::{BenchError, EXIT_SUCCESS, Result};

use super::exit_code_for;

pub const BUILD_HEADER: &str = "--- Building projects ---";

/// Prints build progress: one line per framework on stdout, a spinner per
/// step on stderr, and a warning for every failed build.
pub struct ConsoleListener {
    quiet: bool,
    verbose: bool,
    errors: ErrorOutput,
    progress: BuildProgress,
}

impl ConsoleListener {
    #[must_use]
    pub fn new(cli: &Cli, parallel: bool) -> Self {
        Self {
            quiet: cli.quiet,
            verbose: cli.verbose > 0 && !cli.quiet,
            errors: ErrorOutput::new(cli.color.into()),
            progress: BuildProgress::new(cli.quiet, parallel),
        }
    }
}

impl BuildListener for ConsoleListener {
    fn on_framework_start(&self, framework: &Framework) {
        if !self.quiet {
            println!("Building {}...", framework.display_name);
        }
    }

    fn on_step_start(&self, framework: &Framework, step: &BuildStep) {
        if self.verbose {
            println!("  $ {}", step.command_line());
        }
        self.progress
            .start(&format!("{}: {}", framework.display_name, step.command_line()));
    }

    fn on_step_finish(&self, _framework: &Framework, _step: &BuildStep) {
        self.progress.finish();
    }

    fn on_framework_finish(&self, framework: &Framework, result: &BuildResult) {
        if self.verbose && !result.output.trim().is_empty() {
            // one locked write keeps parallel builds' output in blocks
            let mut stdout = std::io::stdout().lock();
            for line in result.output.lines() {
                let _ = writeln!(stdout, "  | {line}");
            }
        }
        if let Some(diagnostic) = result.diagnostic() {
            self.errors
                .print_build_failure(&framework.display_name, diagnostic);
        }
    }
}

#[must_use]
pub fn run_bench(args: &RunArgs, cli: &Cli) -> i32 {
    let result = std::env::current_dir()
        .map_err(BenchError::from)
        .and_then(|root| run_bench_impl(args, cli, &SystemRunner, &root));

    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print_bench_error(&e);
            exit_code_for(&e)
        }
    }
}

/// Build (unless `--no-build`), measure, rank, and report under `root`.
///
/// Project directories resolve against `root` and both report files are
/// written into it.
///
/// # Errors
/// Returns an error if configuration is invalid, a required tool is missing,
/// or a report file cannot be written. Failed builds are warnings, not errors.
pub fn run_bench_impl<R: CommandRunner>(
    args: &RunArgs,
    cli: &Cli,
    runner: &R,
    root: &Path,
) -> Result<Report> {
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    if cli.verbose > 0 && !cli.quiet {
        match &loaded.source {
            Some(path) => println!("Using configuration: {}", path.display()),
            None => println!("Using built-in frameworks"),
        }
    }
    let config = loaded.config;
    let frameworks = FrameworkSet::from_config(&config);

    if !args.no_build {
        if !cli.quiet {
            println!("{BUILD_HEADER}");
        }
        let listener = ConsoleListener::new(cli, args.parallel);
        BuildOrchestrator::new(runner, root)
            .with_parallel(args.parallel)
            .build(&frameworks, &listener)?;
    }

    let report = emit_report(&frameworks, &config, cli, root)?;

    if !cli.quiet {
        println!();
        println!("{}", Report::summary());
    }
    Ok(report)
}

fn emit_report(
    frameworks: &FrameworkSet,
    config: &Config,
    cli: &Cli,
    root: &Path,
) -> Result<Report> {
    let metrics = ArtifactSizer::new(root).measure(frameworks);
    let ranked = rank(frameworks, &metrics);
    let chart = layout(&ranked);
    let report = ReportEmitter::new(frameworks, &config.report)
        .with_color(cli.color.into())
        .emit(&ranked, &chart)?;

    println!();
    print!("{}", report.table);
    report.write_to(root)?;
    Ok(report)
}

pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
