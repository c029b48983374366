//! External command execution behind a trait so orchestration can be tested
//! without spawning real toolchains.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::framework::BuildStep;

use super::tool::find_executable;

/// Captured outcome of one finished build step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Exit status as reported by the OS (e.g. `exit status: 1`).
    pub status: String,
    pub stdout: String,
    pub stderr: String,
}

impl StepOutput {
    #[must_use]
    pub fn succeeded() -> Self {
        Self {
            success: true,
            status: "exit status: 0".to_string(),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    #[must_use]
    pub fn failed(code: i32, stderr: &str) -> Self {
        Self {
            success: false,
            status: format!("exit status: {code}"),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }
}

/// Runs build steps and answers tool lookups.
///
/// Implementations must be `Sync`: parallel builds share one runner.
pub trait CommandRunner: Sync {
    /// Run `step` with `cwd` as working directory and capture its output.
    ///
    /// # Errors
    /// Returns an error if the process cannot be launched.
    fn run(&self, step: &BuildStep, cwd: &Path) -> std::io::Result<StepOutput>;

    /// Whether `tool` can be found on the execution path.
    fn tool_exists(&self, tool: &str) -> bool;
}

/// Runs steps as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(step: &BuildStep) -> Command {
        // npm and friends are batch shims on Windows
        if cfg!(windows) {
            let mut cmd = Command::new("cmd.exe");
            cmd.arg("/c").arg(&step.program).args(&step.args);
            cmd
        } else {
            let mut cmd = Command::new(&step.program);
            cmd.args(&step.args);
            cmd
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, step: &BuildStep, cwd: &Path) -> std::io::Result<StepOutput> {
        let output = Self::command(step)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()?;

        Ok(StepOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn tool_exists(&self, tool: &str) -> bool {
        find_executable(tool).is_some()
    }
}
