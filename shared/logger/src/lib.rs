//! Thread-safe logging library shared by the workspace crates.
//!
//! A [`Logger`] writes [`LogLevel`]-filtered records either to a file, through
//! a dedicated writer thread, or to an in-memory buffer that can be inspected
//! afterwards.

pub mod error;
mod log_level;
mod logger;
mod record;
mod sink;

pub use error::{LoggingError, Result};
pub use log_level::LogLevel;
pub use logger::Logger;
