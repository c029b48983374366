//! Ascending-size ranking with stable tie-break and winner marking.

use crate::framework::FrameworkSet;
use crate::measure::SizeMetrics;

pub const BYTES_PER_KIB: f64 = 1024.0;

/// A framework's measured size with its derived rank and winner flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub name: String,
    pub display_name: String,
    pub color: String,
    pub bytes: u64,
    /// 0-based position in ascending size order.
    pub rank: usize,
    /// True for every entry whose size equals the minimum.
    pub is_minimum: bool,
}

impl RankedEntry {
    /// Size in kibibytes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // bundle sizes are far below 2^52 bytes
    pub fn kib(&self) -> f64 {
        self.bytes as f64 / BYTES_PER_KIB
    }
}

/// Order frameworks by measured size, smallest first.
///
/// Equal sizes keep configured framework order. Every entry tied at the
/// minimum is flagged, so an all-zero run flags all of them. A framework
/// absent from `metrics` ranks as zero bytes, the same as a missing output
/// directory.
#[must_use]
pub fn rank(frameworks: &FrameworkSet, metrics: &SizeMetrics) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = frameworks
        .iter()
        .map(|fw| RankedEntry {
            name: fw.name.clone(),
            display_name: fw.display_name.clone(),
            color: fw.color.clone(),
            bytes: metrics.get(&fw.name).copied().unwrap_or(0),
            rank: 0,
            is_minimum: false,
        })
        .collect();

    // sort_by_key is stable: ties stay in configured order
    entries.sort_by_key(|e| e.bytes);

    let minimum = entries.iter().map(|e| e.bytes).min().unwrap_or(0);
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i;
        entry.is_minimum = entry.bytes == minimum;
    }

    entries
}

/// Entries flagged as winners, in rank order.
pub fn winners(entries: &[RankedEntry]) -> impl Iterator<Item = &RankedEntry> {
    entries.iter().filter(|e| e.is_minimum)
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod tests;
