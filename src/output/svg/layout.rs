//! Chart geometry for the ranked bundle-size bar chart.
//!
//! Pure computation over fixed canvas constants: no I/O, no rendering.

use crate::ranking::RankedEntry;

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 380.0;
pub const CHART_X: f64 = 220.0;
pub const CHART_Y: f64 = 180.0;
pub const BAR_HEIGHT: f64 = 32.0;
pub const BAR_GAP: f64 = 12.0;
pub const MAX_BAR_WIDTH: f64 = 400.0;

/// Distance from a bar's top edge to its text baseline.
pub const LABEL_BASELINE_OFFSET: f64 = 22.0;

pub const WINNER_MARKER: &str = " ★";

/// Pixel geometry and labels for one ranked entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub display_name: String,
    /// Size label, e.g. `100.0 KB ★`.
    pub label: String,
    pub color: String,
    pub kib: f64,
    pub is_winner: bool,
    pub bar_width: f64,
    /// Offset below the chart origin.
    pub y_offset: f64,
    /// Absolute top edge of the bar.
    pub y: f64,
    /// Absolute baseline for the name and value labels.
    pub label_baseline: f64,
}

/// Geometry for every entry plus the scale it was computed with.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub entries: Vec<ChartGeometry>,
    /// Largest size in KiB, or 1.0 when every size is zero.
    pub scale_max_kib: f64,
    /// Smallest non-zero size in KiB, `None` when every size is zero.
    pub min_positive_kib: Option<f64>,
}

/// Lay out ranked entries top to bottom in the order given.
#[must_use]
#[allow(clippy::cast_precision_loss)] // rank indices are tiny
pub fn layout(entries: &[RankedEntry]) -> ChartLayout {
    let values: Vec<f64> = entries.iter().map(RankedEntry::kib).collect();

    let max_kib = values.iter().copied().fold(0.0_f64, f64::max);
    let scale_max_kib = if max_kib > 0.0 { max_kib } else { 1.0 };
    let min_positive_kib = values
        .iter()
        .copied()
        .filter(|v| *v > 0.0)
        .reduce(f64::min);

    let geometry = entries
        .iter()
        .zip(&values)
        .enumerate()
        .map(|(i, (entry, &kib))| {
            let y_offset = (BAR_HEIGHT + BAR_GAP) * i as f64;
            let y = CHART_Y + y_offset;
            ChartGeometry {
                display_name: entry.display_name.clone(),
                label: size_label(kib, entry.is_minimum),
                color: entry.color.clone(),
                kib,
                is_winner: entry.is_minimum,
                bar_width: (kib / scale_max_kib) * MAX_BAR_WIDTH,
                y_offset,
                y,
                label_baseline: y + LABEL_BASELINE_OFFSET,
            }
        })
        .collect();

    ChartLayout {
        entries: geometry,
        scale_max_kib,
        min_positive_kib,
    }
}

/// `{kib:.1} KB`, with the winner marker appended for winners.
#[must_use]
pub fn size_label(kib: f64, is_winner: bool) -> String {
    let marker = if is_winner { WINNER_MARKER } else { "" };
    format!("{kib:.1} KB{marker}")
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
