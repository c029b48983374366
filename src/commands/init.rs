use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::output::ErrorOutput;
use crate::{BenchError, EXIT_SUCCESS, Result};

use super::exit_code_for;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print_bench_error(&e);
            exit_code_for(&e)
        }
    }
}

/// Writes the default configuration template.
///
/// # Errors
/// Returns a configuration error if the file already exists (without `--force`),
/// or [`BenchError::FileWrite`] if it cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(BenchError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        BenchError::FileWrite {
            path: output_path.clone(),
            source,
        }
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

/// Commented template that parses to the built-in defaults.
#[must_use]
pub fn generate_config_template() -> String {
    r##"# bundle-bench configuration file
version = "1"

# Chart heading
[report]
title = "Bundle Size Comparison"
subtitle = "Counter App Implementation"

# One [[framework]] table per implementation, in legend order.
#
#   name           identifier, also the key in benchmark_results.json
#   display_name   label in the table and chart (default: capitalized name)
#   color          legend and bar color, #rgb or #rrggbb
#   project_dir    directory the build runs in (default: "<name>-counter")
#   output_dir     build output measured after the build, relative to project_dir
#   required_tool  program that must be on PATH before any build starts
#
# Each [[framework.build]] step runs in order; the first failing step ends
# that framework's build. Quiet steps never echo their output.

[[framework]]
name = "coi"
display_name = "Coi"
color = "#9477ff"
project_dir = "coi-counter"
output_dir = "dist"
required_tool = "coi"

[[framework.build]]
program = "coi"
args = ["build"]

[[framework]]
name = "react"
display_name = "React"
color = "#00d8ff"
project_dir = "react-counter"
output_dir = "dist"

[[framework.build]]
program = "npm"
args = ["install"]
quiet = true

[[framework.build]]
program = "npm"
args = ["run", "build"]
quiet = true

[[framework]]
name = "vue"
display_name = "Vue"
color = "#42b883"
project_dir = "vue-counter"
output_dir = "dist"

[[framework.build]]
program = "npm"
args = ["install"]
quiet = true

[[framework.build]]
program = "npm"
args = ["run", "build"]
quiet = true
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
