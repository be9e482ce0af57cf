//! `a=fmtp` attribute: format-specific parameters of one payload type.

use crate::{
    errors::SdpError,
    line::{SdpLine, attribute_value, parse_payload_type, split_payload_type},
};

/// Format parameters for a payload type.
///
/// ```text
/// a=fmtp:<payload type> <format specific parameters>
/// ```
///
/// The parameter string is kept verbatim for re-emission. [`Fmtp::parameters`]
/// gives a `key=value;flag` view over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fmtp {
    pub payload_type: u8,
    pub params: String,
}

impl Fmtp {
    pub fn new(payload_type: u8, params: &str) -> Self {
        Fmtp {
            payload_type,
            params: params.to_string(),
        }
    }

    /// The `;`-separated parameters in order, as `(key, value)` pairs.
    ///
    /// Flag parameters without `=` have no value. Empty segments are skipped.
    pub fn parameters(&self) -> Vec<(&str, Option<&str>)> {
        self.params
            .split(';')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value.trim())),
                None => (segment, None),
            })
            .collect()
    }

    /// Value of the first parameter named `key`, compared case-insensitively.
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters()
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .and_then(|(_, value)| value)
    }

    /// Payload type this format retransmits or protects (`apt=<pt>`).
    ///
    /// `None` when the parameter is absent or not a valid payload type.
    pub fn apt(&self) -> Option<u8> {
        self.parameter("apt")?.parse().ok()
    }
}

impl SdpLine for Fmtp {
    const KIND: &'static str = "fmtp";

    fn recognize(raw: &str) -> bool {
        attribute_value(raw, "fmtp")
            .and_then(split_payload_type)
            .is_some()
    }

    fn parse(raw: &str) -> Result<Self, SdpError> {
        let (pt, params) = attribute_value(raw, "fmtp")
            .and_then(split_payload_type)
            .ok_or(SdpError::InvalidFmtpFormat)?;

        Ok(Fmtp {
            payload_type: parse_payload_type(pt)?,
            params: params.to_string(),
        })
    }
}

impl std::fmt::Display for Fmtp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a=fmtp:{} {}", self.payload_type, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmtp_parse_keeps_params_verbatim() {
        let fmtp = Fmtp::parse("a=fmtp:111 minptime=10; useinbandfec=1").unwrap();
        assert_eq!(fmtp.payload_type, 111);
        assert_eq!(fmtp.params, "minptime=10; useinbandfec=1");
        assert_eq!(fmtp.render(), "a=fmtp:111 minptime=10; useinbandfec=1");
    }

    #[test]
    fn test_fmtp_parameters_view() {
        let fmtp = Fmtp::new(97, "profile-level-id=42e01f;packetization-mode=1; flag ;");
        assert_eq!(
            fmtp.parameters(),
            vec![
                ("profile-level-id", Some("42e01f")),
                ("packetization-mode", Some("1")),
                ("flag", None),
            ]
        );
        assert_eq!(fmtp.parameter("PACKETIZATION-MODE"), Some("1"));
        assert_eq!(fmtp.parameter("flag"), None);
        assert_eq!(fmtp.parameter("missing"), None);
    }

    #[test]
    fn test_fmtp_apt() {
        assert_eq!(Fmtp::new(97, "apt=96").apt(), Some(96));
        assert_eq!(Fmtp::new(97, "rtx-time=3000; APT = 96").apt(), Some(96));
        assert_eq!(Fmtp::new(97, "apt=abc").apt(), None);
        assert_eq!(Fmtp::new(97, "apt=300").apt(), None);
        assert_eq!(Fmtp::new(111, "minptime=10").apt(), None);
    }

    #[test]
    fn test_fmtp_recognize_shape() {
        assert!(Fmtp::recognize("a=fmtp:97 apt=96"));
        assert!(!Fmtp::recognize("a=fmtp:97"));
        assert!(!Fmtp::recognize("a=fmtp:97   "));
        assert!(!Fmtp::recognize("a=rtcp-fb:97 nack"));
    }

    #[test]
    fn test_fmtp_parse_invalid_payload_type() {
        assert!(Fmtp::parse("a=fmtp:abc apt=96").is_err());
    }
}
