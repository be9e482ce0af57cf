//! # Config Loader
//!
//! Locates configuration files on disk and splits their `key=value` content.
//!
//! ```no_run
//! use config_loader::{find_config_file, load_config_file, parse_key_values};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let path = find_config_file("sdp.conf")?;
//!     let content = load_config_file(&path)?;
//!
//!     // The consumer decides what each key means.
//!     for (key, value) in parse_key_values(&content)? {
//!         println!("{} -> {}", key, value);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::{ConfigError, Result};

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the whole configuration file into a `String`.
///
/// The content is neither parsed nor validated here.
///
/// # Examples
///
/// ```no_run
/// use config_loader::load_config_file;
///
/// let content = load_config_file("./config/sdp.conf")?;
/// println!("Config content: {}", content);
/// # Ok::<(), config_loader::ConfigError>(())
/// ```
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))
}

/// Looks for a configuration file in the usual places.
///
/// Search order:
/// 1. Environment variable `CONFIG_PATH` (if set and the file exists)
/// 2. `./config/{filename}`
/// 3. `./{filename}`
pub fn find_config_file(filename: &str) -> Result<PathBuf> {
    if let Ok(path) = env::var("CONFIG_PATH") {
        let path_buf = PathBuf::from(&path);
        if path_buf.exists() {
            return Ok(path_buf);
        }
    }

    let config_dir = PathBuf::from("./config").join(filename);
    if config_dir.exists() {
        return Ok(config_dir);
    }

    let current_dir = PathBuf::from("./").join(filename);
    if current_dir.exists() {
        return Ok(current_dir);
    }

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found. Searched: CONFIG_PATH env var, ./config/{}, ./{}",
        filename, filename, filename
    )))
}

/// Finds and reads a configuration file in one step.
pub fn find_and_load(filename: &str) -> Result<String> {
    let path = find_config_file(filename)?;
    load_config_file(path)
}

/// Splits `key=value` configuration content into ordered, trimmed pairs.
///
/// Blank lines and lines starting with `#` are skipped. Only the first `=`
/// separates key from value, so values may contain `=` themselves.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidLine`] (1-based line number) for a line
/// without `=` or with an empty key.
pub fn parse_key_values(content: &str) -> Result<Vec<(String, String)>> {
    let mut entries = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let invalid = || ConfigError::InvalidLine {
            line: index + 1,
            content: line.to_string(),
        };

        let (key, value) = line.split_once('=').ok_or_else(invalid)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(invalid());
        }

        entries.push((key.to_string(), value.trim().to_string()));
    }

    Ok(entries)
}
