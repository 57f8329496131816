//! Injected scan observability interface.

use std::sync::Mutex;

/// Receives info/error notifications from the scan pipeline.
///
/// Implementations decide where events go (log file, console, test
/// buffer). An instance is scoped to one scan invocation; nothing here
/// touches process-wide logger state.
pub trait ScanLog: Send + Sync {
    /// Record an informational event.
    fn info(&self, message: &str);

    /// Record an error event.
    fn error(&self, message: &str);
}

/// Discards every event.
#[derive(Debug, Default)]
pub struct NullLog;

impl ScanLog for NullLog {
    fn info(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Buffers events in memory so tests can assert on them.
#[derive(Debug, Default)]
pub struct MemoryLog {
    infos: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl MemoryLog {
    /// Create an empty log buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the info messages recorded so far.
    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    /// Snapshot of the error messages recorded so far.
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl ScanLog for MemoryLog {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_log_records_both_levels() {
        let log = MemoryLog::new();
        log.info("started");
        log.error("bad file");
        log.info("done");

        assert_eq!(log.infos(), vec!["started", "done"]);
        assert_eq!(log.errors(), vec!["bad file"]);
    }

    #[test]
    fn test_null_log_is_silent() {
        let log = NullLog;
        log.info("ignored");
        log.error("ignored");
    }
}
