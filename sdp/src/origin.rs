//! SDP origin field representation.
//!
//! The origin field identifies the session and the host that created it.

use crate::{errors::SdpError, line::SdpLine};

/// Represents an Origin field in an SDP message according to RFC 4566.
///
/// Format:
/// `o=<username> <sess-id> <sess-version> <nettype> <addrtype> <unicast-address>`
///
/// Network and address types are kept as given; the model does not
/// restrict them to `IN` / `IP4` / `IP6`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub username: String,
    pub session_id: u64,
    pub session_version: u64,
    pub network_type: String,
    pub address_type: String,
    pub unicast_address: String,
}

impl SdpLine for Origin {
    const KIND: &'static str = "origin";

    fn recognize(raw: &str) -> bool {
        raw.strip_prefix("o=")
            .is_some_and(|value| value.split_whitespace().count() == 6)
    }

    /// Parses an `o=` line.
    ///
    /// # Returns
    /// * `Ok(Origin)` - If parsing is successful
    /// * `Err(SdpError)` - If the string format is invalid:
    ///   - `InvalidOriginFormat` - If the value doesn't contain exactly 6 parts
    ///   - `InvalidSessionId` - If session ID or version cannot be parsed as u64
    fn parse(raw: &str) -> Result<Self, SdpError> {
        let value = raw.strip_prefix("o=").ok_or(SdpError::InvalidOriginFormat)?;
        let parts: Vec<&str> = value.split_whitespace().collect();
        let [username, session_id, session_version, network_type, address_type, unicast_address] =
            parts.as_slice()
        else {
            return Err(SdpError::InvalidOriginFormat);
        };

        Ok(Origin {
            username: username.to_string(),
            session_id: session_id.parse().map_err(|_| SdpError::InvalidSessionId)?,
            session_version: session_version
                .parse()
                .map_err(|_| SdpError::InvalidSessionId)?,
            network_type: network_type.to_string(),
            address_type: address_type.to_string(),
            unicast_address: unicast_address.to_string(),
        })
    }
}

impl Default for Origin {
    fn default() -> Self {
        Self {
            username: String::from("-"),
            session_id: 0,
            session_version: 0,
            network_type: String::from("IN"),
            address_type: String::from("IP4"),
            unicast_address: String::from("0.0.0.0"),
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "o={} {} {} {} {} {}",
            self.username,
            self.session_id,
            self.session_version,
            self.network_type,
            self.address_type,
            self.unicast_address
        )
    }
}
