//! Running totals for the summary pipeline.

use std::fs;
use std::path::Path;

use filecensus_core::{ScanLog, ScanSummary};

/// Accumulates file count and cumulative byte size across a traversal.
///
/// One stat per file, no hashing, no lookups, so the summary pipeline
/// stays cheap. A file whose size cannot be read is excluded
/// from both totals, logged, and counted as skipped.
#[derive(Debug, Default)]
pub struct Aggregator {
    total_files: u64,
    total_bytes: u64,
    skipped_files: u64,
}

impl Aggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one enumerated path into the totals.
    pub fn record(&mut self, path: &Path, log: &dyn ScanLog) {
        match fs::metadata(path) {
            Ok(metadata) => {
                self.total_files += 1;
                self.total_bytes += metadata.len();
            }
            Err(err) => {
                self.skipped_files += 1;
                tracing::warn!(path = %path.display(), error = %err, "size unreadable");
                log.error(&format!("Error reading size of {}: {err}", path.display()));
            }
        }
    }

    /// Number of files excluded from the totals.
    pub fn skipped_files(&self) -> u64 {
        self.skipped_files
    }

    /// Finish the scan and produce the summary.
    pub fn finish(self) -> ScanSummary {
        ScanSummary {
            total_files: self.total_files,
            total_bytes: self.total_bytes,
        }
    }
}
