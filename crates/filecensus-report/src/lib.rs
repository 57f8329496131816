//! CSV report sinks and the scan event log for filecensus.
//!
//! This crate owns output formatting: the detailed per-file inventory,
//! the aggregate summary, and the timestamped `<output>.log` companion
//! file. The core pipeline hands it records and aggregates; nothing
//! here reads the filesystem being scanned.

mod error;
mod event_log;
mod sink;

pub use error::ReportError;
pub use event_log::EventLog;
pub use sink::{DETAILED_COLUMNS, DetailedReport, SUMMARY_COLUMNS, SummaryReport};
