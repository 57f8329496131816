//! Per-file records and scan aggregates.

use serde::{Deserialize, Serialize, Serializer};

/// Sentinel substituted for a field value that could not be produced.
pub const UNAVAILABLE: &str = "unavailable";

/// Extensions reported as compressed. Membership is case-sensitive.
const COMPRESSED_EXTENSIONS: [&str; 5] = ["zip", "gz", "tar", "bz2", "xz"];

/// Check whether an extension belongs to the known-compressed set.
pub fn is_compressed_extension(extension: &str) -> bool {
    COMPRESSED_EXTENSIONS.contains(&extension)
}

/// 128-bit content fingerprint computed over a file's full byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest(pub [u8; 16]);

impl ContentDigest {
    /// Create a new ContentDigest from raw bytes.
    pub fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Get the digest as a hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

/// Render a byte count with base-1024 scaling and two decimal digits.
///
/// The value is reported at the first unit where it drops below 1024.0,
/// e.g. 1536 bytes renders as "1.50 KB".
pub fn human_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in ["bytes", "KB", "MB", "GB"] {
        if size < 1024.0 {
            return format!("{size:.2} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.2} TB")
}

fn yes_no<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "Yes" } else { "No" })
}

/// Metadata extracted for one regular file.
///
/// Field order matches the detailed report's column order; the serde
/// renames carry the exact column names.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    /// Base filename.
    #[serde(rename = "Filename")]
    pub name: String,

    /// Display size, base-1024 scaled with two decimals.
    #[serde(rename = "File Size (Human-readable)")]
    pub size_human: String,

    /// Filename suffix after the last dot, empty if none.
    #[serde(rename = "File Format")]
    pub extension: String,

    /// Hex content digest, or the unavailable sentinel.
    #[serde(rename = "File Hash")]
    pub content_hash: String,

    /// True iff the extension is in the known-compressed set.
    #[serde(rename = "Compression Status", serialize_with = "yes_no")]
    pub compressed: bool,

    /// MIME guess from the extension, or the unavailable sentinel.
    #[serde(rename = "File Type")]
    pub mime_type: String,

    /// Owning account name, or the unavailable sentinel.
    #[serde(rename = "Owner")]
    pub owner: String,

    /// Creation time in ctime format.
    #[serde(rename = "Creation Time")]
    pub created_at: String,

    /// Last modification time in ctime format.
    #[serde(rename = "Last Modified Time")]
    pub modified_at: String,

    /// Permission bits as an octal string, e.g. "0o644".
    #[serde(rename = "File Permissions")]
    pub permissions: String,

    /// Full path, the record's identity within a scan.
    #[serde(rename = "File Path")]
    pub path: String,

    /// Exact size in bytes. Not a report column.
    #[serde(skip)]
    pub size_bytes: u64,
}

/// Aggregate totals for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Number of regular files counted.
    #[serde(rename = "Total Files")]
    pub total_files: u64,

    /// Sum of their sizes in bytes.
    #[serde(rename = "Total Size (bytes)")]
    pub total_bytes: u64,
}

impl ScanSummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the scan saw no files at all.
    pub fn is_empty(&self) -> bool {
        self.total_files == 0
    }
}
