use serde::{Deserialize, Serialize};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

pub const DEFAULT_TITLE: &str = "Bundle Size Comparison";
pub const DEFAULT_SUBTITLE: &str = "Counter App Implementation";

/// Top-level configuration file model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config schema version. `None` means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub report: ReportConfig,

    /// Frameworks in configured order [[framework]].
    #[serde(default, rename = "framework")]
    pub frameworks: Vec<FrameworkConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: None,
            report: ReportConfig::default(),
            frameworks: default_frameworks(),
        }
    }
}

/// Chart text settings [report].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_subtitle")]
    pub subtitle: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
        }
    }
}

/// One framework entry [[framework]].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FrameworkConfig {
    /// Identifier, also used as the key in the JSON record.
    pub name: String,

    /// Human-cased name. Defaults to the capitalized identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Bar and legend color (`#rgb` or `#rrggbb`). Defaults to a palette entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Project directory relative to the invocation directory. Defaults to `<name>-counter`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_dir: Option<String>,

    /// Build output directory relative to `project_dir`.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Tool that must be on PATH before any build starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_tool: Option<String>,

    /// Build steps run in order [[framework.build]].
    #[serde(default)]
    pub build: Vec<BuildStepConfig>,
}

/// A single external command in a framework build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BuildStepConfig {
    pub program: String,

    #[serde(default)]
    pub args: Vec<String>,

    /// Never echo the step's output, even with `-v`.
    #[serde(default)]
    pub quiet: bool,
}

impl BuildStepConfig {
    #[must_use]
    pub fn new(program: &str, args: &[&str], quiet: bool) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
            quiet,
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_subtitle() -> String {
    DEFAULT_SUBTITLE.to_string()
}

fn default_output_dir() -> String {
    "dist".to_string()
}

fn npm_steps() -> Vec<BuildStepConfig> {
    vec![
        BuildStepConfig::new("npm", &["install"], true),
        BuildStepConfig::new("npm", &["run", "build"], true),
    ]
}

/// The coi / react / vue counter-app comparison.
#[must_use]
pub fn default_frameworks() -> Vec<FrameworkConfig> {
    vec![
        FrameworkConfig {
            name: "coi".to_string(),
            display_name: None,
            color: Some("#9477ff".to_string()),
            project_dir: None,
            output_dir: default_output_dir(),
            required_tool: Some("coi".to_string()),
            build: vec![BuildStepConfig::new("coi", &["build"], false)],
        },
        FrameworkConfig {
            name: "react".to_string(),
            display_name: None,
            color: Some("#00d8ff".to_string()),
            project_dir: None,
            output_dir: default_output_dir(),
            required_tool: None,
            build: npm_steps(),
        },
        FrameworkConfig {
            name: "vue".to_string(),
            display_name: None,
            color: Some("#42b883".to_string()),
            project_dir: None,
            output_dir: default_output_dir(),
            required_tool: None,
            build: npm_steps(),
        },
    ]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
