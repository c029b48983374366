use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("'{tool}' command not found (required to build {framework})")]
    ToolNotFound { tool: String, framework: String },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl BenchError {
    /// Short category name shown before the message in diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::ToolNotFound { .. } => "ToolNotFound",
            Self::FileWrite { .. } => "FileWrite",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialization",
        }
    }

    /// Human-readable message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::ToolNotFound { tool, framework } => {
                format!("'{tool}' command not found (required to build {framework})")
            }
            Self::FileWrite { path, source } => {
                format!("{}: {source}", path.display())
            }
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Actionable hint for the user, if one exists.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ToolNotFound { .. } => {
                Some("Install the tool and make sure it is on PATH, or rerun with --no-build")
            }
            Self::TomlParse(_) => Some("Check the configuration file syntax"),
            Self::Config(_) => Some("Run `bundle-bench init` to generate a valid configuration"),
            Self::FileWrite { .. } | Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }

    /// Whether this error stems from configuration rather than the run itself.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::TomlParse(_))
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
