use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rayon::prelude::*;

use crate::error::{BenchError, Result};
use crate::framework::{BuildStep, Framework, FrameworkSet};

use super::runner::{CommandRunner, StepOutput};

/// Number of trailing stderr lines kept in a failure diagnostic.
const DIAGNOSTIC_TAIL_LINES: usize = 5;

/// Outcome of one framework build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStatus {
    Succeeded,
    Failed { diagnostic: String },
}

/// Per-framework build record, produced once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
    pub status: BuildStatus,
    /// Captured output of the non-quiet steps that ran, in order.
    pub output: String,
}

impl BuildResult {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, BuildStatus::Succeeded)
    }

    #[must_use]
    pub fn diagnostic(&self) -> Option<&str> {
        match &self.status {
            BuildStatus::Succeeded => None,
            BuildStatus::Failed { diagnostic } => Some(diagnostic),
        }
    }
}

/// Build results keyed by framework name, in configured order.
pub type BuildReport = IndexMap<String, BuildResult>;

/// Hooks for reporting build progress. All methods default to no-ops.
///
/// Called from rayon workers in parallel mode, hence `Sync`.
pub trait BuildListener: Sync {
    fn on_framework_start(&self, _framework: &Framework) {}
    fn on_step_start(&self, _framework: &Framework, _step: &BuildStep) {}
    fn on_step_finish(&self, _framework: &Framework, _step: &BuildStep) {}
    fn on_framework_finish(&self, _framework: &Framework, _result: &BuildResult) {}
}

/// Listener that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentListener;

impl BuildListener for SilentListener {}

/// Invokes each framework's build steps in its project directory.
///
/// A failing framework is recorded as [`BuildStatus::Failed`] and the run moves
/// on; only a missing required tool aborts the whole run.
pub struct BuildOrchestrator<'a, R: CommandRunner> {
    runner: &'a R,
    root: PathBuf,
    parallel: bool,
}

impl<'a, R: CommandRunner> BuildOrchestrator<'a, R> {
    #[must_use]
    pub fn new(runner: &'a R, root: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            root: root.into(),
            parallel: false,
        }
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Verify every declared required tool is on the execution path.
    ///
    /// # Errors
    /// Returns [`BenchError::ToolNotFound`] for the first missing tool in configured order.
    pub fn check_tools(&self, frameworks: &FrameworkSet) -> Result<()> {
        for framework in frameworks {
            if let Some(tool) = &framework.required_tool
                && !self.runner.tool_exists(tool)
            {
                return Err(BenchError::ToolNotFound {
                    tool: tool.clone(),
                    framework: framework.display_name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Check tools, then build every framework in configured order.
    ///
    /// # Errors
    /// Returns [`BenchError::ToolNotFound`] before any build starts if a required tool is missing.
    /// Individual build failures are never errors.
    pub fn build(
        &self,
        frameworks: &FrameworkSet,
        listener: &dyn BuildListener,
    ) -> Result<BuildReport> {
        self.check_tools(frameworks)?;

        let results: Vec<BuildResult> = if self.parallel {
            frameworks
                .as_slice()
                .par_iter()
                .map(|fw| self.build_one(fw, listener))
                .collect()
        } else {
            frameworks
                .iter()
                .map(|fw| self.build_one(fw, listener))
                .collect()
        };

        Ok(frameworks
            .iter()
            .map(|fw| fw.name.clone())
            .zip(results)
            .collect())
    }

    fn build_one(&self, framework: &Framework, listener: &dyn BuildListener) -> BuildResult {
        listener.on_framework_start(framework);
        let result = self.run_steps(framework, listener);
        listener.on_framework_finish(framework, &result);
        result
    }

    fn run_steps(&self, framework: &Framework, listener: &dyn BuildListener) -> BuildResult {
        let project_dir = framework.project_path(&self.root);
        let mut output = String::new();

        if !framework.steps.is_empty() && !project_dir.is_dir() {
            return failed(
                format!("project directory not found: {}", project_dir.display()),
                output,
            );
        }

        for step in &framework.steps {
            listener.on_step_start(framework, step);
            let outcome = self.runner.run(step, &project_dir);
            listener.on_step_finish(framework, step);

            match outcome {
                Ok(step_output) => {
                    if !step.quiet {
                        output.push_str(&step_output.stdout);
                        output.push_str(&step_output.stderr);
                    }
                    if !step_output.success {
                        return failed(exit_diagnostic(step, &step_output), output);
                    }
                }
                Err(e) => {
                    return failed(launch_diagnostic(step, &project_dir, &e), output);
                }
            }
        }

        BuildResult {
            status: BuildStatus::Succeeded,
            output,
        }
    }
}

const fn failed(diagnostic: String, output: String) -> BuildResult {
    BuildResult {
        status: BuildStatus::Failed { diagnostic },
        output,
    }
}

fn launch_diagnostic(step: &BuildStep, cwd: &Path, error: &std::io::Error) -> String {
    format!(
        "failed to launch `{}` in {}: {error}",
        step.command_line(),
        cwd.display()
    )
}

fn exit_diagnostic(step: &BuildStep, output: &StepOutput) -> String {
    let mut diagnostic = format!("`{}` failed with {}", step.command_line(), output.status);
    let tail = stderr_tail(&output.stderr);
    if !tail.is_empty() {
        diagnostic.push('\n');
        diagnostic.push_str(&tail);
    }
    diagnostic
}

fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(DIAGNOSTIC_TAIL_LINES);
    lines[start..].join("\n")
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
