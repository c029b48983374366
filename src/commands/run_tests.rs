use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::TempDir;

use super::*;
use crate::build::StepOutput;
use crate::cli::{ColorChoice, Commands};
use crate::output::{JSON_REPORT_FILE, SVG_REPORT_FILE};

#[derive(Default)]
struct FakeRunner {
    tools: HashSet<String>,
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeRunner {
    fn with_tools(tools: &[&str]) -> Self {
        Self {
            tools: tools.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    fn failing(mut self, command: &str) -> Self {
        self.failing.insert(command.to_string());
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, step: &BuildStep, _cwd: &Path) -> io::Result<StepOutput> {
        let command = step.command_line();
        self.calls.lock().unwrap().push(command.clone());
        if self.failing.contains(&command) {
            return Ok(StepOutput::failed(1, "boom"));
        }
        Ok(StepOutput::succeeded())
    }

    fn tool_exists(&self, tool: &str) -> bool {
        self.tools.contains(tool)
    }
}

fn make_cli(no_config: bool) -> Cli {
    Cli {
        verbose: 0,
        quiet: true,
        color: ColorChoice::Never,
        no_config,
        command: Commands::Run(RunArgs::default()),
    }
}

fn write_artifact(root: &Path, relative: &str, bytes: usize) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, vec![b'x'; bytes]).unwrap();
}

fn project_dirs(root: &Path) {
    for dir in ["coi-counter", "react-counter", "vue-counter"] {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
}

fn record_keys(root: &Path) -> Vec<String> {
    let content = fs::read_to_string(root.join(JSON_REPORT_FILE)).unwrap();
    let record: crate::output::ResultsRecord = serde_json::from_str(&content).unwrap();
    record.keys().cloned().collect()
}

#[test]
fn no_build_measures_existing_output() {
    let temp = TempDir::new().unwrap();
    write_artifact(temp.path(), "coi-counter/dist/app.js", 2048);
    write_artifact(temp.path(), "react-counter/dist/app.js", 4096);
    write_artifact(temp.path(), "vue-counter/dist/assets/app.js", 1024);

    let runner = FakeRunner::default();
    let args = RunArgs {
        no_build: true,
        ..RunArgs::default()
    };

    let report = run_bench_impl(&args, &make_cli(true), &runner, temp.path()).unwrap();

    assert!(runner.calls().is_empty());
    assert_eq!(record_keys(temp.path()), vec!["vue", "coi", "react"]);
    assert!(report.table.contains("Vue             | 1.00"));
    assert!(temp.path().join(SVG_REPORT_FILE).exists());
}

#[test]
fn full_run_builds_in_configured_order() {
    let temp = TempDir::new().unwrap();
    project_dirs(temp.path());
    let runner = FakeRunner::with_tools(&["coi"]);

    run_bench_impl(&RunArgs::default(), &make_cli(true), &runner, temp.path()).unwrap();

    assert_eq!(
        runner.calls(),
        vec![
            "coi build",
            "npm install",
            "npm run build",
            "npm install",
            "npm run build"
        ]
    );
}

#[test]
fn missing_tool_aborts_before_builds_and_reports() {
    let temp = TempDir::new().unwrap();
    project_dirs(temp.path());
    let runner = FakeRunner::default();

    let err = run_bench_impl(&RunArgs::default(), &make_cli(true), &runner, temp.path())
        .unwrap_err();

    assert!(matches!(err, BenchError::ToolNotFound { ref tool, .. } if tool == "coi"));
    assert_eq!(exit_code_for(&err), crate::EXIT_FAILURE);
    assert!(runner.calls().is_empty());
    assert!(!temp.path().join(JSON_REPORT_FILE).exists());
    assert!(!temp.path().join(SVG_REPORT_FILE).exists());
}

#[test]
fn failed_build_still_reports_and_measures_zero() {
    let temp = TempDir::new().unwrap();
    project_dirs(temp.path());
    write_artifact(temp.path(), "coi-counter/dist/app.js", 100);
    write_artifact(temp.path(), "vue-counter/dist/app.js", 200);
    let runner = FakeRunner::with_tools(&["coi"]).failing("npm install");

    let report =
        run_bench_impl(&RunArgs::default(), &make_cli(true), &runner, temp.path()).unwrap();

    assert_eq!(record_keys(temp.path()), vec!["react", "coi", "vue"]);
    assert!(report.record.contains("\"bundle_size\": 0"));
}

#[test]
fn parallel_run_keeps_configured_attribution() {
    let temp = TempDir::new().unwrap();
    project_dirs(temp.path());
    write_artifact(temp.path(), "coi-counter/dist/app.js", 10);
    write_artifact(temp.path(), "react-counter/dist/app.js", 30);
    write_artifact(temp.path(), "vue-counter/dist/app.js", 20);
    let runner = FakeRunner::with_tools(&["coi"]);
    let args = RunArgs {
        parallel: true,
        ..RunArgs::default()
    };

    run_bench_impl(&args, &make_cli(true), &runner, temp.path()).unwrap();

    assert_eq!(runner.calls().len(), 5);
    assert_eq!(record_keys(temp.path()), vec!["coi", "vue", "react"]);
}

#[test]
fn explicit_config_path_is_used() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("bench.toml");
    fs::write(
        &config_path,
        r##"
[report]
title = "Solo"

[[framework]]
name = "solid"
project_dir = "solid-app"
output_dir = "build"
"##,
    )
    .unwrap();
    write_artifact(temp.path(), "solid-app/build/index.js", 512);

    let args = RunArgs {
        no_build: true,
        config: Some(config_path),
        ..RunArgs::default()
    };
    let report =
        run_bench_impl(&args, &make_cli(false), &FakeRunner::default(), temp.path()).unwrap();

    assert_eq!(record_keys(temp.path()), vec!["solid"]);
    assert!(report.record.contains("\"bundle_size\": 512"));
    assert!(report.markup.contains(">Solo</text>"));
    assert!(report.table.contains("Solid"));
}

#[test]
fn missing_config_path_is_config_error() {
    let temp = TempDir::new().unwrap();
    let args = RunArgs {
        no_build: true,
        config: Some(PathBuf::from("/nonexistent/bench.toml")),
        ..RunArgs::default()
    };

    let err = run_bench_impl(&args, &make_cli(false), &FakeRunner::default(), temp.path())
        .unwrap_err();

    assert!(err.is_config_error());
    assert_eq!(exit_code_for(&err), crate::EXIT_CONFIG_ERROR);
}

#[test]
fn no_config_ignores_config_path() {
    let result = load_config(Some(Path::new("/nonexistent/bench.toml")), true).unwrap();
    assert!(result.source.is_none());
    assert_eq!(result.config, Config::default());
}

#[test]
fn console_listener_is_quiet_in_quiet_mode() {
    let listener = ConsoleListener::new(&make_cli(true), false);
    assert!(listener.quiet);
    assert!(!listener.verbose);
    assert!(!listener.progress.is_visible());
}
