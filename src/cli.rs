use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bundle-bench")]
#[command(author, version, about = "Build equivalent apps under several frameworks and compare bundle sizes")]
#[command(long_about = "Builds the same application under each configured framework, \
    measures the build output, ranks the sizes, and writes a JSON record and an SVG chart.\n\n\
    Exit codes:\n  \
    0 - Run completed (individual build failures are warnings)\n  \
    1 - Run failed (missing required tool, report write failure)\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Increase output verbosity (-v echoes build commands and their output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file and use built-in frameworks
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build, measure, rank, and report
    Run(RunArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Skip builds and measure existing build output only
    #[arg(long)]
    pub no_build: bool,

    /// Run framework builds concurrently
    #[arg(long, conflicts_with = "no_build")]
    pub parallel: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
