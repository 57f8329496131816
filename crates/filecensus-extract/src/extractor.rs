//! Per-file metadata extraction.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use filecensus_core::{
    FileRecord, ScanConfig, ScanError, ScanLog, UNAVAILABLE, human_size, is_compressed_extension,
};

use crate::digest::digest_file;

/// Builds one [`FileRecord`] per enumerated path.
///
/// The stat call is the only step allowed to fail the whole record: a
/// path that vanished or turned unreadable between enumeration and
/// extraction is skipped by the caller. Every other step degrades to
/// the unavailable sentinel, with a log entry only for hash failures
/// (owner and MIME misses are the expected case, not an anomaly).
pub struct MetadataExtractor {
    config: ScanConfig,
}

impl MetadataExtractor {
    /// Create an extractor for the given scan configuration.
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Extract the full record for one file.
    pub fn extract(&self, path: &Path, log: &dyn ScanLog) -> Result<FileRecord, ScanError> {
        let metadata = fs::metadata(path).map_err(|e| ScanError::io(path, e))?;
        let size_bytes = metadata.len();

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let extension = extension_of(path);

        let content_hash = match digest_file(path, self.config.hash_chunk_size) {
            Ok(digest) => digest.to_hex(),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "content unreadable");
                log.error(&format!(
                    "Error calculating hash for {}: {err}",
                    path.display()
                ));
                UNAVAILABLE.to_string()
            }
        };

        Ok(FileRecord {
            size_human: human_size(size_bytes),
            compressed: is_compressed_extension(&extension),
            mime_type: mime_of(path).unwrap_or_else(|| UNAVAILABLE.to_string()),
            owner: owner_of(&metadata).unwrap_or_else(|| UNAVAILABLE.to_string()),
            created_at: creation_time(&metadata)
                .map(format_timestamp)
                .unwrap_or_else(|| UNAVAILABLE.to_string()),
            modified_at: metadata
                .modified()
                .ok()
                .map(format_timestamp)
                .unwrap_or_else(|| UNAVAILABLE.to_string()),
            permissions: format!("{:#o}", permission_bits(&metadata)),
            path: path.to_string_lossy().into_owned(),
            name,
            extension,
            content_hash,
            size_bytes,
        })
    }
}

/// Filename suffix after the last dot, empty if none.
fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Best-effort MIME guess from the extension. No content sniffing.
fn mime_of(path: &Path) -> Option<String> {
    mime_guess::from_path(path)
        .first_raw()
        .map(|mime| mime.to_string())
}

/// Render a timestamp in fixed C-locale ctime shape, local time.
fn format_timestamp(time: SystemTime) -> String {
    chrono::DateTime::<chrono::Local>::from(time)
        .format("%a %b %e %H:%M:%S %Y")
        .to_string()
}

// Cross-platform metadata helpers

/// Resolve the owning account name from file metadata.
#[cfg(unix)]
fn owner_of(metadata: &fs::Metadata) -> Option<String> {
    use std::os::unix::fs::MetadataExt;
    uzers::get_user_by_uid(metadata.uid()).map(|u| u.name().to_string_lossy().into_owned())
}

#[cfg(not(unix))]
fn owner_of(_metadata: &fs::Metadata) -> Option<String> {
    None // No user database to resolve against
}

/// Get the creation timestamp from metadata.
#[cfg(unix)]
fn creation_time(metadata: &fs::Metadata) -> Option<SystemTime> {
    use std::os::unix::fs::MetadataExt;
    use std::time::{Duration, UNIX_EPOCH};

    // Basic stat carries no birth time on Unix; the inode change time
    // is what stat reports and what gets inventoried here.
    let secs = metadata.ctime();
    let nanos = metadata.ctime_nsec().clamp(0, 999_999_999) as u32;
    Some(if secs >= 0 {
        UNIX_EPOCH + Duration::new(secs as u64, nanos)
    } else {
        UNIX_EPOCH - Duration::new(secs.unsigned_abs(), 0)
    })
}

#[cfg(not(unix))]
fn creation_time(metadata: &fs::Metadata) -> Option<SystemTime> {
    metadata.created().ok()
}

/// Get the low 12 permission bits of the file mode.
#[cfg(unix)]
fn permission_bits(metadata: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn permission_bits(metadata: &fs::Metadata) -> u32 {
    if metadata.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}
