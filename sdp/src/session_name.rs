//! SDP session name (`s=`).

use crate::{errors::SdpError, line::SdpLine};

/// Represents the session name line (s=).
///
/// The text is free-form and kept verbatim; `-` is the conventional
/// placeholder when there is no meaningful name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionName {
    pub name: String,
}

impl SdpLine for SessionName {
    const KIND: &'static str = "session name";

    fn recognize(raw: &str) -> bool {
        raw.starts_with("s=")
    }

    fn parse(raw: &str) -> Result<Self, SdpError> {
        let name = raw.strip_prefix("s=").ok_or(SdpError::InvalidAttributeFormat)?;
        Ok(SessionName {
            name: name.to_string(),
        })
    }
}

impl Default for SessionName {
    fn default() -> Self {
        Self {
            name: String::from("-"),
        }
    }
}

impl std::fmt::Display for SessionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s={}", self.name)
    }
}
