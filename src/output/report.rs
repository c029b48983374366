//! Assembles the three report renditions and writes the two report files.

use std::path::{Path, PathBuf};

use super::json::JsonFormatter;
use super::svg::{BundleSizeChart, ChartLayout, SvgElement};
use super::text::{ColorMode, TextFormatter};
use crate::config::ReportConfig;
use crate::error::{BenchError, Result};
use crate::framework::FrameworkSet;
use crate::ranking::RankedEntry;

pub const JSON_REPORT_FILE: &str = "benchmark_results.json";
pub const SVG_REPORT_FILE: &str = "benchmark_results.svg";

/// Rendered report, ready to print and persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Console table.
    pub table: String,
    /// Structured record (JSON).
    pub record: String,
    /// Chart markup (SVG).
    pub markup: String,
}

impl Report {
    /// Write the record and the chart into `dir`, overwriting existing files.
    ///
    /// Returns the written paths, record first.
    ///
    /// # Errors
    /// Returns [`BenchError::FileWrite`] naming the file that could not be written.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let files = [
            (dir.join(JSON_REPORT_FILE), &self.record),
            (dir.join(SVG_REPORT_FILE), &self.markup),
        ];

        let mut written = Vec::with_capacity(files.len());
        for (path, content) in files {
            std::fs::write(&path, content)
                .map_err(|source| BenchError::FileWrite {
                    path: path.clone(),
                    source,
                })?;
            written.push(path);
        }
        Ok(written)
    }

    /// Closing line naming both output files.
    #[must_use]
    pub fn summary() -> String {
        format!("Reports generated: {JSON_REPORT_FILE}, {SVG_REPORT_FILE}")
    }
}

/// Renders ranked entries and their chart layout into a [`Report`].
///
/// Pure: nothing touches the filesystem until [`Report::write_to`].
pub struct ReportEmitter<'a> {
    frameworks: &'a FrameworkSet,
    config: &'a ReportConfig,
    color: ColorMode,
}

impl<'a> ReportEmitter<'a> {
    #[must_use]
    pub const fn new(frameworks: &'a FrameworkSet, config: &'a ReportConfig) -> Self {
        Self {
            frameworks,
            config,
            color: ColorMode::Never,
        }
    }

    /// Color mode for the console table.
    #[must_use]
    pub const fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// # Errors
    /// Returns an error if the structured record cannot be serialized.
    pub fn emit(&self, entries: &[RankedEntry], layout: &ChartLayout) -> Result<Report> {
        let table = TextFormatter::new(self.color).format(entries);
        let record = JsonFormatter.format(entries)?;
        let markup = BundleSizeChart::new(self.frameworks, layout)
            .with_title(&self.config.title)
            .with_subtitle(&self.config.subtitle)
            .render();

        Ok(Report {
            table,
            record,
            markup,
        })
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
