//! `a=rtcp-fb` attribute (RFC 4585).

use crate::{
    errors::SdpError,
    line::{SdpLine, attribute_value, parse_payload_type, split_payload_type},
};

/// RTCP feedback capability of one payload type.
///
/// ```text
/// a=rtcp-fb:<payload type> <feedback type> [<parameters>]
/// ```
///
/// The feedback text is kept verbatim. The `*` wildcard payload type is not
/// bound to a single codec and fails to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtcpFb {
    pub payload_type: u8,
    pub feedback: String,
}

impl RtcpFb {
    pub fn new(payload_type: u8, feedback: &str) -> Self {
        RtcpFb {
            payload_type,
            feedback: feedback.to_string(),
        }
    }
}

impl SdpLine for RtcpFb {
    const KIND: &'static str = "rtcp-fb";

    fn recognize(raw: &str) -> bool {
        attribute_value(raw, "rtcp-fb")
            .and_then(split_payload_type)
            .is_some()
    }

    fn parse(raw: &str) -> Result<Self, SdpError> {
        let (pt, feedback) = attribute_value(raw, "rtcp-fb")
            .and_then(split_payload_type)
            .ok_or(SdpError::InvalidRtcpFbFormat)?;

        Ok(RtcpFb {
            payload_type: parse_payload_type(pt)?,
            feedback: feedback.to_string(),
        })
    }
}

impl std::fmt::Display for RtcpFb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a=rtcp-fb:{} {}", self.payload_type, self.feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rtcp_fb_parse() {
        let fb = RtcpFb::parse("a=rtcp-fb:96 nack pli").unwrap();
        assert_eq!(fb, RtcpFb::new(96, "nack pli"));
        assert_eq!(fb.render(), "a=rtcp-fb:96 nack pli");
    }

    #[test]
    fn test_rtcp_fb_recognize_shape() {
        assert!(RtcpFb::recognize("a=rtcp-fb:96 goog-remb"));
        assert!(RtcpFb::recognize("a=rtcp-fb:* nack"));
        assert!(!RtcpFb::recognize("a=rtcp-fb:96"));
        assert!(!RtcpFb::recognize("a=rtcp-fbx:96 nack"));
    }

    #[test]
    fn test_rtcp_fb_wildcard_is_parse_error() {
        let err = RtcpFb::parse("a=rtcp-fb:* nack").unwrap_err();
        assert_eq!(err.to_string(), "Invalid payload type: *");
    }
}
