//! `a=rtpmap` attribute: payload type to encoding mapping.

use crate::{
    errors::SdpError,
    line::{SdpLine, attribute_value, parse_payload_type, split_payload_type},
};

/// Maps an RTP payload type to an encoding (RFC 4566 section 6).
///
/// ```text
/// a=rtpmap:<payload type> <encoding name>/<clock rate>[/<encoding parameters>]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtpMap {
    pub payload_type: u8,
    pub encoding_name: String,
    pub clock_rate: u32,
    /// Channel count for audio, kept as text.
    pub encoding_params: Option<String>,
}

impl RtpMap {
    pub fn new(payload_type: u8, encoding_name: &str, clock_rate: u32) -> Self {
        RtpMap {
            payload_type,
            encoding_name: encoding_name.to_string(),
            clock_rate,
            encoding_params: None,
        }
    }

    pub fn with_encoding_params(mut self, params: &str) -> Self {
        self.encoding_params = Some(params.to_string());
        self
    }
}

impl SdpLine for RtpMap {
    const KIND: &'static str = "rtpmap";

    fn recognize(raw: &str) -> bool {
        attribute_value(raw, "rtpmap")
            .and_then(split_payload_type)
            .is_some()
    }

    /// Parses an `a=rtpmap` line.
    ///
    /// # Returns
    /// * `Ok(RtpMap)` - A successfully parsed mapping
    /// * `Err(SdpError::InvalidPayloadType)` - If the payload type is not 0..=255
    /// * `Err(SdpError::InvalidRtpMapFormat)` - If the encoding is not `<name>/<rate>[/<params>]`
    /// * `Err(SdpError::InvalidClockRate)` - If the clock rate is not numeric
    fn parse(raw: &str) -> Result<Self, SdpError> {
        let (pt, encoding) = attribute_value(raw, "rtpmap")
            .and_then(split_payload_type)
            .ok_or(SdpError::InvalidRtpMapFormat)?;
        let payload_type = parse_payload_type(pt)?;

        let mut parts = encoding.splitn(3, '/');
        let encoding_name = parts
            .next()
            .filter(|name| !name.is_empty())
            .ok_or(SdpError::InvalidRtpMapFormat)?;
        let clock_rate = parts
            .next()
            .ok_or(SdpError::InvalidRtpMapFormat)?
            .parse()
            .map_err(|_| SdpError::InvalidClockRate)?;
        let encoding_params = match parts.next() {
            Some("") => return Err(SdpError::InvalidRtpMapFormat),
            Some(params) => Some(params.to_string()),
            None => None,
        };

        Ok(RtpMap {
            payload_type,
            encoding_name: encoding_name.to_string(),
            clock_rate,
            encoding_params,
        })
    }
}

impl std::fmt::Display for RtpMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "a=rtpmap:{} {}/{}",
            self.payload_type, self.encoding_name, self.clock_rate
        )?;
        if let Some(params) = &self.encoding_params {
            write!(f, "/{}", params)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rtpmap_parse_video() {
        let rtpmap = RtpMap::parse("a=rtpmap:96 VP8/90000").unwrap();
        assert_eq!(rtpmap, RtpMap::new(96, "VP8", 90000));
    }

    #[test]
    fn test_rtpmap_parse_with_channels() {
        let rtpmap = RtpMap::parse("a=rtpmap:111 opus/48000/2").unwrap();
        assert_eq!(rtpmap.encoding_params.as_deref(), Some("2"));
        assert_eq!(rtpmap.render(), "a=rtpmap:111 opus/48000/2");
    }

    #[test]
    fn test_rtpmap_recognize_shape() {
        assert!(RtpMap::recognize("a=rtpmap:0 PCMU/8000"));
        assert!(RtpMap::recognize("a=rtpmap:x PCMU/8000"));
        assert!(!RtpMap::recognize("a=rtpmap:0"));
        assert!(!RtpMap::recognize("a=rtpmap"));
        assert!(!RtpMap::recognize("a=fmtp:0 PCMU/8000"));
    }

    #[test]
    fn test_rtpmap_parse_invalid() {
        assert!(RtpMap::parse("a=rtpmap:300 PCMU/8000").is_err());
        assert!(RtpMap::parse("a=rtpmap:0 PCMU").is_err());
        assert!(RtpMap::parse("a=rtpmap:0 PCMU/fast").is_err());
        assert!(RtpMap::parse("a=rtpmap:0 /8000").is_err());
        assert!(RtpMap::parse("a=rtpmap:0 L16/8000/").is_err());
    }

    #[test]
    fn test_rtpmap_builder() {
        let rtpmap = RtpMap::new(0, "L16", 44100).with_encoding_params("2");
        assert_eq!(rtpmap.to_string(), "a=rtpmap:0 L16/44100/2");
    }
}
