//! CSV report sinks.

use std::fs::File;
use std::path::Path;

use filecensus_core::{FileRecord, ScanSummary};

use crate::error::ReportError;

/// Column headers of the detailed report, in output order.
pub const DETAILED_COLUMNS: [&str; 11] = [
    "Filename",
    "File Size (Human-readable)",
    "File Format",
    "File Hash",
    "Compression Status",
    "File Type",
    "Owner",
    "Creation Time",
    "Last Modified Time",
    "File Permissions",
    "File Path",
];

/// Column headers of the summary report.
pub const SUMMARY_COLUMNS: [&str; 2] = ["Total Files", "Total Size (bytes)"];

/// Streaming sink for the per-file inventory.
///
/// The header row is written at creation, so even a scan that yields no
/// records leaves a valid CSV behind.
pub struct DetailedReport {
    writer: csv::Writer<File>,
    rows: u64,
}

impl DetailedReport {
    /// Create the output file and write the header row.
    pub fn create(path: &Path) -> Result<Self, ReportError> {
        let file = File::create(path).map_err(|source| ReportError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(DETAILED_COLUMNS)?;
        Ok(Self { writer, rows: 0 })
    }

    /// Append one record row.
    pub fn write_record(&mut self, record: &FileRecord) -> Result<(), ReportError> {
        self.writer.serialize(record)?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flush the report and return the final row count.
    pub fn finish(mut self) -> Result<u64, ReportError> {
        self.writer.flush()?;
        Ok(self.rows)
    }
}

/// One-shot sink for the aggregate summary: header plus a single row.
pub struct SummaryReport;

impl SummaryReport {
    /// Write the summary report to the given path.
    pub fn write(path: &Path, summary: &ScanSummary) -> Result<(), ReportError> {
        let file = File::create(path).map_err(|source| ReportError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(SUMMARY_COLUMNS)?;
        writer.serialize(summary)?;
        writer.flush()?;
        Ok(())
    }
}
