//! Per-file metadata extraction and scan aggregation for filecensus.
//!
//! Two consumers of the same traversal live here:
//!
//! - [`MetadataExtractor`] turns one path into one [`FileRecord`],
//!   degrading individual fields to the unavailable sentinel instead of
//!   dropping the record wherever the failure policy allows it.
//! - [`Aggregator`] keeps the summary pipeline's running totals without
//!   paying for hashing or lookups.
//!
//! # Example
//!
//! ```rust,no_run
//! use filecensus_core::{NullLog, ScanConfig};
//! use filecensus_extract::MetadataExtractor;
//!
//! let extractor = MetadataExtractor::new(ScanConfig::new("/srv/data"));
//! let record = extractor
//!     .extract("/srv/data/notes.txt".as_ref(), &NullLog)
//!     .unwrap();
//! println!("{} -> {}", record.name, record.content_hash);
//! ```

mod aggregate;
mod digest;
mod extractor;

pub use aggregate::Aggregator;
pub use digest::digest_file;
pub use extractor::MetadataExtractor;

// Re-export core types for convenience
pub use filecensus_core::{FileRecord, ScanConfig, ScanError, ScanLog, ScanSummary};
