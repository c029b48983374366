use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use crate::ranking::RankedEntry;

/// Per-framework value in the structured record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    /// Total bytes of regular files in the build output directory.
    pub bundle_size: u64,
}

/// Framework name to size, in ascending-size order.
pub type ResultsRecord = IndexMap<String, RecordEntry>;

/// Serializes ranked entries as the machine-readable results record.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Build the ordered record from ranked entries.
    #[must_use]
    pub fn record(entries: &[RankedEntry]) -> ResultsRecord {
        entries
            .iter()
            .map(|e| {
                (
                    e.name.clone(),
                    RecordEntry {
                        bundle_size: e.bytes,
                    },
                )
            })
            .collect()
    }

    /// Pretty JSON with four-space indentation.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn format(&self, entries: &[RankedEntry]) -> Result<String> {
        let record = Self::record(entries);
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        record.serialize(&mut serializer)?;

        let mut output = String::from_utf8_lossy(&buf).into_owned();
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
