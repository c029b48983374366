//! Artifact size measurement over build output directories.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::framework::FrameworkSet;

/// Measured byte counts keyed by framework name, in configured order.
pub type SizeMetrics = IndexMap<String, u64>;

/// Total bytes of regular files under `path`.
///
/// Missing paths measure as zero. Symbolic links are never followed nor
/// counted, so linked files are not double counted and link cycles cannot
/// occur. Entries that vanish or cannot be read mid-walk are skipped.
#[must_use]
pub fn artifact_size(path: &Path) -> u64 {
    if !path.exists() {
        return 0;
    }

    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|meta| meta.len())
        .sum()
}

/// Measures every framework's build output directory under a root.
#[derive(Debug, Clone)]
pub struct ArtifactSizer {
    root: PathBuf,
}

impl ArtifactSizer {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Size every framework's output directory. Walks run concurrently;
    /// the result keeps configured order.
    #[must_use]
    pub fn measure(&self, frameworks: &FrameworkSet) -> SizeMetrics {
        let sizes: Vec<u64> = frameworks
            .as_slice()
            .par_iter()
            .map(|fw| artifact_size(&fw.output_path(&self.root)))
            .collect();

        frameworks
            .iter()
            .map(|fw| fw.name.clone())
            .zip(sizes)
            .collect()
    }
}

#[cfg(test)]
#[path = "measure_tests.rs"]
mod tests;
