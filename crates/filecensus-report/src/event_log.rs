//! Timestamped scan event log.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use filecensus_core::ScanLog;

use crate::error::ReportError;

/// Scan log writing to `<output_path>.log` and mirroring each line to
/// the console.
///
/// The file is truncated on creation, one log per run; lines are
/// `YYYY-MM-DD HH:MM:SS - LEVEL - message`. An instance lives for one
/// scan invocation.
pub struct EventLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl EventLog {
    /// Create the companion log for the given report path.
    pub fn for_report(output_path: &Path) -> Result<Self, ReportError> {
        let path = log_path(output_path);
        let file = File::create(&path).map_err(|source| ReportError::Create {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    /// Location of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, level: &str, message: &str) {
        let line = format!(
            "{} - {level} - {message}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        eprintln!("{line}");
        // A log line that cannot be written must not kill the scan.
        let mut writer = self.writer.lock().unwrap();
        let _ = writeln!(writer, "{line}");
        let _ = writer.flush();
    }
}

impl ScanLog for EventLog {
    fn info(&self, message: &str) {
        self.write("INFO", message);
    }

    fn error(&self, message: &str) {
        self.write("ERROR", message);
    }
}

/// Companion log path: the report path with `.log` appended.
fn log_path(output_path: &Path) -> PathBuf {
    let mut name = output_path.as_os_str().to_owned();
    name.push(".log");
    PathBuf::from(name)
}
