//! Lazy directory traversal engine for filecensus.
//!
//! This crate walks a root directory depth-first and yields every file
//! it can reach as a pull-based iterator, so extraction can be
//! pipelined without materializing the tree in memory.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use filecensus_core::{NullLog, ScanConfig};
//! use filecensus_walk::DirWalker;
//!
//! let config = ScanConfig::new("/path/to/scan");
//! let walker = DirWalker::new(Arc::new(NullLog));
//! for path in walker.files(&config).unwrap() {
//!     println!("{}", path.display());
//! }
//! ```

mod walker;

pub use walker::{DirWalker, FilePaths};

// Re-export core types for convenience
pub use filecensus_core::{ScanConfig, ScanError, ScanLog};
