use std::fmt;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while locating, reading or interpreting configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file was not found.
    FileNotFound(String),

    /// The file exists but could not be read.
    ReadError(String),

    /// A non-comment line is not of the form `key=value`.
    InvalidLine { line: usize, content: String },

    /// A known key carries a value the consumer cannot interpret.
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::ReadError(msg) => {
                write!(f, "Failed to read configuration file: {}", msg)
            }
            ConfigError::InvalidLine { line, content } => {
                write!(f, "Line {}: expected 'key=value', found '{}'", line, content)
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value '{}' for key '{}'", value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
