//! Core types for filecensus.
//!
//! This crate provides the fundamental data structures shared by the
//! traversal, extraction and reporting crates: per-file records, scan
//! aggregates, configuration, the error taxonomy and the injected scan
//! log interface.

mod config;
mod error;
mod log;
mod record;

pub use config::{ScanConfig, ScanConfigBuilder};
pub use error::ScanError;
pub use log::{MemoryLog, NullLog, ScanLog};
pub use record::{
    ContentDigest, FileRecord, ScanSummary, UNAVAILABLE, human_size, is_compressed_extension,
};
