//! SDP timing information.
//!
//! Defines when an SDP session starts and stops, or marks it as permanent.

use crate::{errors::SdpError, line::SdpLine};

/// Represents timing information (t=) as defined in RFC 4566.
///
/// If both values are zero, the session is considered permanent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timing {
    pub start_time: u64,
    pub stop_time: u64,
}

impl Timing {
    pub fn new(start_time: u64, stop_time: u64) -> Self {
        Timing {
            start_time,
            stop_time,
        }
    }

    /// True for the unbounded `t=0 0` session.
    pub fn is_permanent(&self) -> bool {
        self.start_time == 0 && self.stop_time == 0
    }
}

impl SdpLine for Timing {
    const KIND: &'static str = "timing";

    fn recognize(raw: &str) -> bool {
        raw.strip_prefix("t=")
            .is_some_and(|value| value.split_whitespace().count() == 2)
    }

    /// Parses a `t=` line holding exactly two integers.
    ///
    /// # Returns
    /// * `Ok(Timing)` - If both numbers are valid
    /// * `Err(SdpError::InvalidTimingFormat)` - If either is not a non-negative integer
    fn parse(raw: &str) -> Result<Self, SdpError> {
        let value = raw.strip_prefix("t=").ok_or(SdpError::InvalidTimingFormat)?;
        let parts: Vec<&str> = value.split_whitespace().collect();
        let [start, stop] = parts.as_slice() else {
            return Err(SdpError::InvalidTimingFormat);
        };

        Ok(Timing {
            start_time: start.parse().map_err(|_| SdpError::InvalidTimingFormat)?,
            stop_time: stop.parse().map_err(|_| SdpError::InvalidTimingFormat)?,
        })
    }
}

impl std::fmt::Display for Timing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t={} {}", self.start_time, self.stop_time)
    }
}
