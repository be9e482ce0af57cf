//! SDP media line (`m=`).
//!
//! A media line opens a media description and declares the payload types
//! the stream may carry.

use crate::{
    errors::SdpError,
    line::{SdpLine, parse_payload_type},
};

/// Represents a media line (m=) as defined in RFC 4566.
///
/// ```text
/// m=<media> <port> <proto> <fmt> ...
/// ```
///
/// Numeric formats are RTP payload types. Any other token, such as
/// `webrtc-datachannel`, is kept in `formats` and rendered after the payload
/// types. A media line with no formats left renders as
/// `m=<media> <port> <proto>` and is still recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaLine {
    pub media_type: String,
    pub port: u16,
    pub protocol: String,
    pub payload_types: Vec<u8>,
    pub formats: Vec<String>,
}

impl MediaLine {
    pub fn new(media_type: &str, port: u16, protocol: &str, payload_types: Vec<u8>) -> Self {
        MediaLine {
            media_type: media_type.to_string(),
            port,
            protocol: protocol.to_string(),
            payload_types,
            formats: Vec::new(),
        }
    }

    /// Adds formats that are not RTP payload types.
    pub fn with_formats(mut self, formats: Vec<String>) -> Self {
        self.formats = formats;
        self
    }
}

impl SdpLine for MediaLine {
    const KIND: &'static str = "media";

    fn recognize(raw: &str) -> bool {
        raw.strip_prefix("m=")
            .is_some_and(|value| value.split_whitespace().count() >= 3)
    }

    /// Parses an `m=` line.
    ///
    /// # Returns
    /// * `Ok(MediaLine)` - A successfully parsed media line
    /// * `Err(SdpError::InvalidMediaFormat)` - If fewer than three fields are present
    /// * `Err(SdpError::InvalidPort)` - If the port number is invalid
    /// * `Err(SdpError::InvalidPayloadType)` - If a numeric format is out of range
    fn parse(raw: &str) -> Result<Self, SdpError> {
        let value = raw.strip_prefix("m=").ok_or(SdpError::InvalidMediaFormat)?;
        let parts: Vec<&str> = value.split_whitespace().collect();
        let [media_type, port, protocol, tokens @ ..] = parts.as_slice() else {
            return Err(SdpError::InvalidMediaFormat);
        };

        let port = port.parse().map_err(|_| SdpError::InvalidPort)?;
        let mut payload_types = Vec::new();
        let mut formats = Vec::new();
        for token in tokens {
            if token.bytes().all(|b| b.is_ascii_digit()) {
                payload_types.push(parse_payload_type(token)?);
            } else {
                formats.push(token.to_string());
            }
        }

        Ok(MediaLine {
            media_type: media_type.to_string(),
            port,
            protocol: protocol.to_string(),
            payload_types,
            formats,
        })
    }
}

impl std::fmt::Display for MediaLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "m={} {} {}", self.media_type, self.port, self.protocol)?;
        for pt in &self.payload_types {
            write!(f, " {}", pt)?;
        }
        for format in &self.formats {
            write!(f, " {}", format)?;
        }
        Ok(())
    }
}
