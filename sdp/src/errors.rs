//! Error types for SDP operations.
//!
//! Two families of errors exist. Parse errors come from a line kind that
//! recognized a line but found a malformed field in it. Structural errors
//! come from the blocks (unknown payload type, rendering a codec before its
//! rtpmap, ...) and are only returned when the block runs in
//! [`crate::Strictness::Strict`] mode; otherwise they are logged and the
//! offending line is dropped.

use logging::LoggingError;

/// Error type for SDP operations
#[derive(Debug)]
pub enum SdpError {
    /// Error when the version is not a non-negative integer
    InvalidVersion,
    /// Error when parsing origin format
    InvalidOriginFormat,
    /// Error when the session ID or version is not numeric
    InvalidSessionId,
    /// Error when parsing connection format
    InvalidConnectionFormat,
    /// Error when parsing TTL fails
    InvalidTtl,
    /// Error when parsing number of addresses fails
    InvalidAddressCount,
    /// Error when parsing timing format
    InvalidTimingFormat,
    /// Error when parsing media line format
    InvalidMediaFormat,
    /// Error when parsing port number
    InvalidPort,
    /// Error when a payload type is not an integer in 0..=255
    InvalidPayloadType(String),
    /// Error when an rtpmap encoding is not `<name>/<clock-rate>[/<params>]`
    InvalidRtpMapFormat,
    /// Error when an rtpmap clock rate is not numeric
    InvalidClockRate,
    /// Error when an fmtp line has no parameters
    InvalidFmtpFormat,
    /// Error when an rtcp-fb line has no feedback value
    InvalidRtcpFbFormat,
    /// Error when a direction token is not one of the four known values
    InvalidDirection(String),
    /// Error when parsing attribute format
    InvalidAttributeFormat,
    /// A codec line referenced a payload type the media line does not declare
    UnknownPayloadType(u8),
    /// A codec line was handed to the codec record of another payload type
    PayloadTypeMismatch { expected: u8, found: u8 },
    /// A line kind that the receiving container does not store
    UnexpectedLine(&'static str),
    /// A media line was handed to an existing media block
    MediaLineInBlock,
    /// A codec was rendered before any rtpmap line described it
    MissingRtpMap(u8),
    /// A media block was rendered without a direction attribute
    MissingDirection,
    /// The configured logger could not be created
    Logging(LoggingError),
}

impl SdpError {
    /// True for errors about how lines fit together rather than about the
    /// content of a single line.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            SdpError::UnknownPayloadType(_)
                | SdpError::PayloadTypeMismatch { .. }
                | SdpError::UnexpectedLine(_)
                | SdpError::MediaLineInBlock
                | SdpError::MissingRtpMap(_)
                | SdpError::MissingDirection
        )
    }
}

impl std::fmt::Display for SdpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use SdpError::*;
        let msg = match self {
            InvalidVersion => "Failed to parse version",
            InvalidOriginFormat => "Invalid origin format",
            InvalidSessionId => "Session ID and version must be numeric",
            InvalidConnectionFormat => "Invalid connection format",
            InvalidTtl => "Invalid TTL value",
            InvalidAddressCount => "Invalid number of addresses",
            InvalidTimingFormat => "Invalid timing format",
            InvalidMediaFormat => "Invalid media line format",
            InvalidPort => "Invalid port number",
            InvalidPayloadType(pt) => return write!(f, "Invalid payload type: {}", pt),
            InvalidRtpMapFormat => "Invalid rtpmap format",
            InvalidClockRate => "Invalid clock rate",
            InvalidFmtpFormat => "Invalid fmtp format",
            InvalidRtcpFbFormat => "Invalid rtcp-fb format",
            InvalidDirection(d) => return write!(f, "Invalid direction: {}", d),
            InvalidAttributeFormat => "Invalid attribute format",
            UnknownPayloadType(pt) => return write!(f, "Unknown payload type {}", pt),
            PayloadTypeMismatch { expected, found } => {
                return write!(
                    f,
                    "Line for payload type {} sent to codec {}",
                    found, expected
                );
            }
            UnexpectedLine(kind) => return write!(f, "Unexpected {} line", kind),
            MediaLineInBlock => "Media line passed to an existing media block",
            MissingRtpMap(pt) => return write!(f, "Codec {} has no rtpmap line", pt),
            MissingDirection => "Media block has no direction attribute",
            Logging(err) => return write!(f, "Logger setup failed: {}", err),
        };
        write!(f, "{}", msg)
    }
}

impl std::error::Error for SdpError {}

impl From<LoggingError> for SdpError {
    fn from(err: LoggingError) -> Self {
        SdpError::Logging(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_classification() {
        assert!(SdpError::UnknownPayloadType(120).is_structural());
        assert!(SdpError::MissingDirection.is_structural());
        assert!(SdpError::MediaLineInBlock.is_structural());
        assert!(!SdpError::InvalidTimingFormat.is_structural());
        assert!(!SdpError::InvalidPayloadType("x".to_string()).is_structural());
    }

    #[test]
    fn test_display_with_payload_type() {
        assert_eq!(
            SdpError::UnknownPayloadType(120).to_string(),
            "Unknown payload type 120"
        );
        assert_eq!(
            SdpError::PayloadTypeMismatch {
                expected: 96,
                found: 97
            }
            .to_string(),
            "Line for payload type 97 sent to codec 96"
        );
    }

    #[test]
    fn test_display_static_messages() {
        assert_eq!(SdpError::InvalidPort.to_string(), "Invalid port number");
        assert_eq!(
            SdpError::UnexpectedLine("timing").to_string(),
            "Unexpected timing line"
        );
    }
}
