//! Configuration semantic validation.
//!
//! Runs after TOML parsing: checks framework identity, colors, and build steps.

use std::collections::HashSet;

use regex::Regex;

use crate::config::{Config, FrameworkConfig};
use crate::{BenchError, Result};

const NAME_PATTERN: &str = r"^[A-Za-z0-9_-]+$";
const COLOR_PATTERN: &str = r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$";

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| BenchError::Config(format!("Invalid validation pattern '{pattern}': {e}")))
}

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if there are no frameworks, a name is empty, malformed or
/// duplicated, a color is not a hex color, or a build step has no program.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.frameworks.is_empty() {
        return Err(BenchError::Config(
            "at least one [[framework]] entry is required".to_string(),
        ));
    }

    let name_re = compile(NAME_PATTERN)?;
    let color_re = compile(COLOR_PATTERN)?;
    let mut seen = HashSet::new();

    for (i, framework) in config.frameworks.iter().enumerate() {
        validate_framework(i, framework, &name_re, &color_re)?;
        if !seen.insert(framework.name.as_str()) {
            return Err(BenchError::Config(format!(
                "duplicate framework name '{}'",
                framework.name
            )));
        }
    }

    Ok(())
}

fn validate_framework(
    index: usize,
    framework: &FrameworkConfig,
    name_re: &Regex,
    color_re: &Regex,
) -> Result<()> {
    if !name_re.is_match(&framework.name) {
        return Err(BenchError::Config(format!(
            "framework[{index}].name '{}' must be non-empty and contain only letters, digits, '-' or '_'",
            framework.name
        )));
    }

    if let Some(color) = &framework.color
        && !color_re.is_match(color)
    {
        return Err(BenchError::Config(format!(
            "framework '{}': color '{color}' is not a hex color like #42b883",
            framework.name
        )));
    }

    if framework.output_dir.trim().is_empty() {
        return Err(BenchError::Config(format!(
            "framework '{}': output_dir must not be empty",
            framework.name
        )));
    }

    if let Some(tool) = &framework.required_tool
        && tool.trim().is_empty()
    {
        return Err(BenchError::Config(format!(
            "framework '{}': required_tool must not be empty",
            framework.name
        )));
    }

    for (step_index, step) in framework.build.iter().enumerate() {
        if step.program.trim().is_empty() {
            return Err(BenchError::Config(format!(
                "framework '{}': build[{step_index}].program must not be empty",
                framework.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
