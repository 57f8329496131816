//! Serial jwalk-based directory walker.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use jwalk::{Parallelism, WalkDir};

use filecensus_core::{ScanConfig, ScanError, ScanLog};

/// Traversal engine yielding every file under a root directory.
///
/// The walk is depth-first and lazy; directories are visited in the
/// order the filesystem returns them. Symlinks and special files are
/// not distinguished from regular files: every non-directory entry is
/// yielded.
pub struct DirWalker {
    log: Arc<dyn ScanLog>,
}

impl DirWalker {
    /// Create a walker reporting to the given scan log.
    pub fn new(log: Arc<dyn ScanLog>) -> Self {
        Self { log }
    }

    /// Start a walk of the configured root.
    ///
    /// Fails up front if the root is not an openable directory; that is
    /// fatal for the calling pipeline. Each call produces a fresh,
    /// single-pass iterator.
    pub fn files(&self, config: &ScanConfig) -> Result<FilePaths, ScanError> {
        let root = &config.root;
        let metadata = fs::metadata(root).map_err(|e| ScanError::io(root, e))?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory { path: root.clone() });
        }
        // Probe readability now so an unreadable root fails the pipeline
        // instead of surfacing as skipped entries mid-walk.
        fs::read_dir(root).map_err(|e| ScanError::io(root, e))?;

        tracing::debug!(root = %root.display(), "starting walk");

        let walker = WalkDir::new(root)
            .parallelism(Parallelism::Serial)
            .skip_hidden(false)
            .follow_links(config.follow_symlinks);

        Ok(FilePaths {
            entries: walker.into_iter(),
            log: Arc::clone(&self.log),
        })
    }
}

/// Lazy sequence of file paths produced by [`DirWalker::files`].
///
/// Unreadable entries are reported to the scan log and skipped; the
/// iterator itself never fails.
pub struct FilePaths {
    entries: jwalk::DirEntryIter<((), ())>,
    log: Arc<dyn ScanLog>,
}

impl Iterator for FilePaths {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    tracing::warn!(path = %path.display(), error = %err, "entry unreadable");
                    self.log
                        .error(&format!("Error reading {}: {err}", path.display()));
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                return Some(entry.path());
            }
        }
    }
}
