//! Model configuration.
//!
//! Loaded from a `key=value` file:
//!
//! ```text
//! # sdp.conf
//! strictness=lenient
//! log_level=info
//! log_path=sdp.log
//! log_console=false
//! ```

use config_loader::{ConfigError, find_and_load, load_config_file, parse_key_values};
use logging::{LogLevel, Logger};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How a block reacts to lines that do not fit its structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Log a warning, drop the line and carry on.
    #[default]
    Lenient,
    /// Return the error to the caller.
    Strict,
}

impl FromStr for Strictness {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Strictness::Lenient),
            "strict" => Ok(Strictness::Strict),
            _ => Err(invalid_value("strictness", s)),
        }
    }
}

/// Settings for parsing and diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct SdpConfig {
    pub strictness: Strictness,
    pub log_level: LogLevel,
    /// Log file; no file logging when unset.
    pub log_path: Option<PathBuf>,
    pub log_console: bool,
    /// Keep records in memory instead of writing them anywhere.
    pub log_memory: bool,
    ignored_keys: Vec<String>,
}

impl Default for SdpConfig {
    fn default() -> Self {
        Self {
            strictness: Strictness::Lenient,
            log_level: LogLevel::Warn,
            log_path: None,
            log_console: false,
            log_memory: false,
            ignored_keys: Vec::new(),
        }
    }
}

impl SdpConfig {
    /// Builds a configuration from `key=value` text, starting from the defaults.
    ///
    /// Unknown keys are kept aside (see [`SdpConfig::ignored_keys`]).
    ///
    /// # Errors
    /// * `ConfigError::InvalidLine` - A line is not `key=value`
    /// * `ConfigError::InvalidValue` - A known key has a value that cannot be used
    pub fn from_content(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (key, value) in parse_key_values(content)? {
            match key.as_str() {
                "strictness" => config.strictness = value.parse()?,
                "log_level" => {
                    config.log_level = value
                        .parse()
                        .map_err(|_| invalid_value(&key, &value))?;
                }
                "log_path" => {
                    config.log_path = (!value.is_empty()).then(|| PathBuf::from(&value));
                }
                "log_console" => config.log_console = parse_flag(&key, &value)?,
                "log_memory" => config.log_memory = parse_flag(&key, &value)?,
                _ => config.ignored_keys.push(key),
            }
        }

        Ok(config)
    }

    /// Loads the configuration from a file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_content(&load_config_file(path)?)
    }

    /// Looks for `filename` in the standard locations and loads it.
    ///
    /// See [`config_loader::find_config_file`] for the search order.
    pub fn find_and_load(filename: &str) -> Result<Self, ConfigError> {
        Self::from_content(&find_and_load(filename)?)
    }

    /// Keys present in the source that this version does not understand.
    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored_keys
    }

    /// Creates the logger this configuration asks for.
    ///
    /// A log file takes precedence (echoing to stdout when `log_console` is
    /// set), then the in-memory sink, then plain console output. Returns
    /// `Ok(None)` when no logging was requested.
    ///
    /// # Errors
    /// Returns error if the log file cannot be opened.
    pub fn build_logger(&self) -> logging::Result<Option<Logger>> {
        if let Some(path) = &self.log_path {
            let logger = Logger::new(path, self.log_level)?.with_console_output(self.log_console);
            return Ok(Some(logger));
        }

        if self.log_memory {
            let logger = Logger::in_memory(self.log_level).with_console_output(self.log_console);
            return Ok(Some(logger));
        }

        if self.log_console {
            return Ok(Some(Logger::console(self.log_level)));
        }

        Ok(None)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(invalid_value(key, value)),
    }
}

fn invalid_value(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
