//! Error types for report sinks.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while producing report artifacts.
///
/// Creation failures are fatal for the run per the exit-code contract;
/// everything else surfaces only if the output itself breaks mid-scan.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Output file could not be created.
    #[error("Cannot create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be written.
    #[error("Failed to write report row: {0}")]
    Csv(#[from] csv::Error),

    /// Generic I/O error on the output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_error_names_the_path() {
        let err = ReportError::Create {
            path: PathBuf::from("/readonly/report.csv"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/readonly/report.csv"));
    }
}
