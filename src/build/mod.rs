//! Build orchestration: tool checks and per-framework external builds.

mod orchestrator;
mod runner;
mod tool;

pub use orchestrator::{
    BuildListener, BuildOrchestrator, BuildReport, BuildResult, BuildStatus, SilentListener,
};
pub use runner::{CommandRunner, StepOutput, SystemRunner};
pub use tool::{find_executable, find_executable_in};
