//! The ordered framework set shared by every pipeline stage.

use std::path::{Path, PathBuf};

use crate::config::{BuildStepConfig, Config, FrameworkConfig};

/// Fallback colors for frameworks that do not configure one.
const PALETTE: &[&str] = &["#9477ff", "#00d8ff", "#42b883", "#ff3e00", "#dd0031", "#f7df1e"];

/// One external command in a framework build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStep {
    pub program: String,
    pub args: Vec<String>,
    pub quiet: bool,
}

impl BuildStep {
    /// Command line as typed in a shell, for logs and diagnostics.
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<&BuildStepConfig> for BuildStep {
    fn from(step: &BuildStepConfig) -> Self {
        Self {
            program: step.program.clone(),
            args: step.args.clone(),
            quiet: step.quiet,
        }
    }
}

/// A named implementation variant being compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framework {
    pub name: String,
    pub display_name: String,
    pub color: String,
    /// Project directory, relative to the invocation root.
    pub project_dir: PathBuf,
    /// Build output directory, relative to the invocation root.
    pub output_dir: PathBuf,
    pub required_tool: Option<String>,
    pub steps: Vec<BuildStep>,
}

impl Framework {
    /// Minimal framework with default layout and no build steps.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let project_dir = PathBuf::from(format!("{name}-counter"));
        Self {
            name: name.to_string(),
            display_name: capitalize(name),
            color: PALETTE[0].to_string(),
            output_dir: project_dir.join("dist"),
            project_dir,
            required_tool: None,
            steps: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: BuildStep) -> Self {
        self.steps.push(step);
        self
    }

    #[must_use]
    pub fn with_required_tool(mut self, tool: &str) -> Self {
        self.required_tool = Some(tool.to_string());
        self
    }

    fn from_config(index: usize, config: &FrameworkConfig) -> Self {
        let project_dir = PathBuf::from(
            config
                .project_dir
                .clone()
                .unwrap_or_else(|| format!("{}-counter", config.name)),
        );
        Self {
            name: config.name.clone(),
            display_name: config
                .display_name
                .clone()
                .unwrap_or_else(|| capitalize(&config.name)),
            color: config
                .color
                .clone()
                .unwrap_or_else(|| PALETTE[index % PALETTE.len()].to_string()),
            output_dir: project_dir.join(&config.output_dir),
            project_dir,
            required_tool: config.required_tool.clone(),
            steps: config.build.iter().map(BuildStep::from).collect(),
        }
    }

    /// Absolute project directory under `root`.
    #[must_use]
    pub fn project_path(&self, root: &Path) -> PathBuf {
        root.join(&self.project_dir)
    }

    /// Absolute build output directory under `root`.
    #[must_use]
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir)
    }
}

/// Ordered, immutable set of frameworks for one run.
///
/// Built once from configuration and passed by reference into the build,
/// measure, rank, and report stages so they all see the same entries in the
/// same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkSet {
    frameworks: Vec<Framework>,
}

impl FrameworkSet {
    #[must_use]
    pub const fn new(frameworks: Vec<Framework>) -> Self {
        Self { frameworks }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config
                .frameworks
                .iter()
                .enumerate()
                .map(|(i, fw)| Framework::from_config(i, fw))
                .collect(),
        )
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Framework] {
        &self.frameworks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Framework> {
        self.frameworks.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frameworks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Framework> {
        self.frameworks.iter().find(|fw| fw.name == name)
    }
}

impl<'a> IntoIterator for &'a FrameworkSet {
    type Item = &'a Framework;
    type IntoIter = std::slice::Iter<'a, Framework>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Uppercase the first character, lowercase the rest (`react` -> `React`).
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

#[cfg(test)]
#[path = "framework_tests.rs"]
mod tests;
