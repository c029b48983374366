//! Colored error and warning diagnostics on stderr.
//!
//! Format: ✖ Error Type: message / × detail / help: suggestion

use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;
use crate::error::BenchError;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates an error output formatter for an explicit color mode.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        };
        Self { use_colors }
    }

    /// Creates an error output formatter that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    fn stderr_supports_color() -> bool {
        // Presence of NO_COLOR (any value) disables color, per https://no-color.org
        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    /// Prints a crate error with its category and suggestion.
    pub fn print_bench_error(&self, error: &BenchError) {
        let mut stderr = std::io::stderr().lock();
        self.write_bench_error(&mut stderr, error);
    }

    /// Prints a warning for a framework whose build failed.
    ///
    /// The first diagnostic line is the detail; any further lines (captured
    /// stderr) are indented beneath it.
    pub fn print_build_failure(&self, display_name: &str, diagnostic: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_build_failure(&mut stderr, display_name, diagnostic);
    }

    /// Writes a crate error to a writer.
    pub fn write_bench_error<W: Write>(&self, w: &mut W, error: &BenchError) {
        let source_detail = std::error::Error::source(error).map(ToString::to_string);
        self.write_error(
            w,
            error.error_type(),
            &error.message(),
            source_detail.as_deref().filter(|d| !error.message().contains(d)),
            error.suggestion(),
        );
    }

    /// Writes a build failure warning to a writer.
    pub fn write_build_failure<W: Write>(&self, w: &mut W, display_name: &str, diagnostic: &str) {
        let mut lines = diagnostic.lines();
        let detail = lines.next();
        self.write_warning(
            w,
            &format!("Failed to build {display_name} project"),
            detail,
            None,
        );
        for line in lines {
            if self.use_colors {
                let _ = writeln!(w, "    {}{line}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "    {line}");
            }
        }
    }

    /// Writes an error to a writer.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Write errors are discarded: there is nowhere left to report them.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }
        self.write_tail(w, detail, suggestion);
    }

    /// Writes a warning to a writer.
    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
        self.write_tail(w, detail, suggestion);
    }

    fn write_tail<W: Write>(&self, w: &mut W, detail: Option<&str>, suggestion: Option<&str>) {
        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
