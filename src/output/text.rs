use std::fmt::Write;

use crate::ranking::RankedEntry;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

pub const TABLE_TITLE: &str = "=== BUNDLE SIZE RESULTS ===";
const NAME_WIDTH: usize = 15;
const SIZE_WIDTH: usize = 10;
const RULE_WIDTH: usize = 30;

/// Fixed-width console table of ranked sizes.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// Title, header, rule, then one row per entry in the order given.
    #[must_use]
    pub fn format(&self, entries: &[RankedEntry]) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "{TABLE_TITLE}");
        let _ = writeln!(
            output,
            "{:<NAME_WIDTH$} | {:<SIZE_WIDTH$}",
            "Framework", "Size (KB)"
        );
        let _ = writeln!(output, "{}", "-".repeat(RULE_WIDTH));

        for entry in entries {
            let row = format!(
                "{:<NAME_WIDTH$} | {:<SIZE_WIDTH$.2}",
                entry.display_name,
                entry.kib()
            );
            if entry.is_minimum {
                let _ = writeln!(output, "{}", self.colorize(&row, ansi::GREEN));
            } else {
                let _ = writeln!(output, "{row}");
            }
        }

        output
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
