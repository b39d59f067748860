//! Logging sink contract shared with the host inspector
//!
//! The host hands serializers a log sink; entries end up in its log window.
//! [`TracingLogger`] is the default standalone sink and forwards everything
//! to the `tracing` ecosystem.

use std::sync::Mutex;
use tracing::{error, info, warn};

/// Severity of a host log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Error,
    Warning,
    Information,
}

/// Sink accepting (severity, message) pairs from this extension
pub trait LogSink {
    fn log(&self, level: LogLevel, message: &str);
}

/// Forwards log entries to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl LogSink for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Error => error!(target: "unreal_nodes", "{message}"),
            LogLevel::Warning => warn!(target: "unreal_nodes", "{message}"),
            LogLevel::Information => info!(target: "unreal_nodes", "{message}"),
        }
    }
}

/// Buffers log entries for later inspection
///
/// Used by tests and by hosts that surface diagnostics in batches after a
/// project load finishes.
#[derive(Debug, Default)]
pub struct CollectingLogger {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl CollectingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all collected entries in order
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.lock().expect("logger poisoned").clone()
    }

    /// Number of entries with the given severity
    pub fn count(&self, level: LogLevel) -> usize {
        self.entries
            .lock()
            .expect("logger poisoned")
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }

    pub fn clear(&self) {
        self.entries.lock().expect("logger poisoned").clear();
    }
}

impl LogSink for CollectingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries
            .lock()
            .expect("logger poisoned")
            .push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_logger_records_in_order() {
        let logger = CollectingLogger::new();
        logger.log(LogLevel::Error, "first");
        logger.log(LogLevel::Warning, "second");

        let entries = logger.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], (LogLevel::Error, "first".to_string()));
        assert_eq!(entries[1], (LogLevel::Warning, "second".to_string()));
    }

    #[test]
    fn test_collecting_logger_count_by_level() {
        let logger = CollectingLogger::new();
        logger.log(LogLevel::Warning, "a");
        logger.log(LogLevel::Warning, "b");
        logger.log(LogLevel::Information, "c");

        assert_eq!(logger.count(LogLevel::Warning), 2);
        assert_eq!(logger.count(LogLevel::Error), 0);

        logger.clear();
        assert!(logger.entries().is_empty());
    }

    #[test]
    fn test_tracing_logger_does_not_panic() {
        let logger = TracingLogger;
        logger.log(LogLevel::Error, "error entry");
        logger.log(LogLevel::Warning, "warning entry");
        logger.log(LogLevel::Information, "info entry");
    }
}
