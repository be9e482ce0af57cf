//! Thread-safe logger implementation.
//!
//! This module provides the main [`Logger`] interface. Filtering by level
//! happens on the caller side; delivery is handled by the logger's sink.

use crate::error::Result;
use crate::log_level::LogLevel;
use crate::record::LogRecord;
use crate::sink::Sink;
use std::path::Path;

/// Cloneable, level-filtering logger.
///
/// Clones and loggers derived with [`Logger::for_component`] share the same
/// sink.
///
/// # Examples
///
/// ```
/// use logging::{LogLevel, Logger};
///
/// let logger = Logger::in_memory(LogLevel::Info);
/// let media = logger.for_component("Media");
/// media.warn("Dropping a=rtpmap:120 for unknown payload type");
///
/// assert_eq!(logger.records().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    sink: Sink,
    level: LogLevel,
    component: Option<String>,
    console_output: bool,
}

impl Logger {
    /// Creates a logger appending to `log_path` from a dedicated writer thread.
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be created or opened.
    pub fn new(log_path: &Path, level: LogLevel) -> Result<Self> {
        Ok(Self::with_sink(Sink::file(log_path)?, level))
    }

    /// Creates a logger that keeps its records in memory.
    ///
    /// The records are available through [`Logger::records`].
    pub fn in_memory(level: LogLevel) -> Self {
        Self::with_sink(Sink::memory(), level)
    }

    /// Creates a logger that prints its records to stdout.
    pub fn console(level: LogLevel) -> Self {
        Self::with_sink(Sink::Console, level)
    }

    fn with_sink(sink: Sink, level: LogLevel) -> Self {
        Logger {
            sink,
            level,
            component: None,
            console_output: false,
        }
    }

    /// Also echoes every accepted record to stdout.
    ///
    /// Meant for file and memory loggers; a console logger already prints.
    pub fn with_console_output(mut self, enabled: bool) -> Self {
        self.console_output = enabled;
        self
    }

    /// Returns a logger tagged with `component` that shares this logger's sink,
    /// level and console setting.
    pub fn for_component(&self, component: &str) -> Self {
        Logger {
            component: Some(component.to_string()),
            ..self.clone()
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Formatted records captured so far by an in-memory logger.
    ///
    /// File and console loggers return an empty list.
    pub fn records(&self) -> Vec<String> {
        self.sink.snapshot()
    }

    /// Logs a debug message (only if level is Debug).
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Logs an info message (only if level is Info or lower).
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Logs a warning message (only if level is Warn or lower).
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Logs an error message (always recorded).
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < self.level {
            return;
        }

        let record = LogRecord::new(level, self.component.as_deref(), message);
        if self.console_output {
            println!("{}", record.format());
        }
        self.sink.deliver(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    fn wait_for_write() {
        thread::sleep(Duration::from_millis(50));
    }

    #[test]
    fn test_logger_creates_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::new(&log_path, LogLevel::Debug).unwrap();
        logger.info("Test message");
        wait_for_write();

        assert!(log_path.exists());
        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Test message"));
    }

    #[test]
    fn test_logger_respects_level() {
        let logger = Logger::in_memory(LogLevel::Warn);
        logger.debug("Debug message");
        logger.info("Info message");
        logger.warn("Warn message");
        logger.error("Error message");

        let records = logger.records();
        assert_eq!(records.len(), 2);
        assert!(records[0].contains("WARN: Warn message"));
        assert!(records[1].contains("ERROR: Error message"));
    }

    #[test]
    fn test_for_component_shares_sink() {
        let logger = Logger::in_memory(LogLevel::Debug);
        let media = logger.for_component("Media");

        media.debug("routing a=fmtp:97 apt=96");
        logger.info("done");

        let records = logger.records();
        assert_eq!(records.len(), 2);
        assert!(records[0].contains("DEBUG [Media]: routing a=fmtp:97 apt=96"));
        assert!(records[1].contains("INFO: done"));
        assert_eq!(media.level(), LogLevel::Debug);
    }

    #[test]
    fn test_logger_clone_across_threads() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::new(&log_path, LogLevel::Info).unwrap();
        let logger_clone = logger.for_component("Worker");

        thread::spawn(move || {
            logger_clone.info("Message from thread");
        })
        .join()
        .unwrap();

        logger.info("Message from main");
        wait_for_write();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("[Worker]: Message from thread"));
        assert!(content.contains("Message from main"));
    }

    #[test]
    fn test_console_logger_filters_and_keeps_nothing() {
        let logger = Logger::console(LogLevel::Error);
        logger.warn("filtered out");
        logger.error("printed");
        assert!(logger.records().is_empty());
        assert_eq!(logger.level(), LogLevel::Error);
    }

    #[test]
    fn test_file_logger_has_no_memory_records() {
        let dir = tempdir().unwrap();
        let logger = Logger::new(&dir.path().join("test.log"), LogLevel::Info).unwrap();
        logger.warn("written to disk");
        assert!(logger.records().is_empty());
    }
}
