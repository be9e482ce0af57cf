//! Internal log record structure.

use crate::log_level::LogLevel;
use chrono::Local;

/// One log entry, stamped when it is created.
#[derive(Debug, Clone)]
pub(crate) struct LogRecord {
    pub timestamp: String,
    pub level: LogLevel,
    pub component: Option<String>,
    pub message: String,
}

impl LogRecord {
    pub fn new(level: LogLevel, component: Option<&str>, message: &str) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            level,
            component: component.map(str::to_string),
            message: message.to_string(),
        }
    }

    /// Formats the record as `[timestamp] LEVEL [component]: message` (no newline).
    pub fn format(&self) -> String {
        match self.component {
            Some(ref component) => format!(
                "[{}] {} [{}]: {}",
                self.timestamp,
                self.level.as_str(),
                component,
                self.message
            ),
            None => format!(
                "[{}] {}: {}",
                self.timestamp,
                self.level.as_str(),
                self.message
            ),
        }
    }
}
