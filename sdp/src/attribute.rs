//! SDP attribute representation.
//!
//! Generic `a=` lines that no specialized line kind claims.

use crate::{direction::Direction, errors::SdpError, line::SdpLine};

/// Attribute names that have their own line kind.
const CLAIMED_NAMES: &[&str] = &["rtpmap", "fmtp", "rtcp-fb"];

/// Represents an attribute (a=) as defined in RFC 4566.
///
/// # Format
/// - `a=<attribute-name>` for flag attributes (no value)
/// - `a=<attribute-name>:<attribute-value>` for value attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

impl Attribute {
    pub fn flag(name: &str) -> Self {
        Attribute {
            name: name.to_string(),
            value: None,
        }
    }

    pub fn with_value(name: &str, value: &str) -> Self {
        Attribute {
            name: name.to_string(),
            value: Some(value.to_string()),
        }
    }
}

impl SdpLine for Attribute {
    const KIND: &'static str = "attribute";

    fn recognize(raw: &str) -> bool {
        let Some(body) = raw.strip_prefix("a=") else {
            return false;
        };
        let name = body.split_once(':').map_or(body, |(name, _)| name);
        !name.is_empty() && !CLAIMED_NAMES.contains(&name) && !Direction::recognize(raw)
    }

    /// Parses an `a=` line, splitting name and value at the first `:`.
    fn parse(raw: &str) -> Result<Self, SdpError> {
        let body = raw
            .strip_prefix("a=")
            .ok_or(SdpError::InvalidAttributeFormat)?;
        let attribute = match body.split_once(':') {
            Some((name, value)) => Attribute::with_value(name, value),
            None => Attribute::flag(body),
        };
        if attribute.name.is_empty() {
            return Err(SdpError::InvalidAttributeFormat);
        }
        Ok(attribute)
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(val) => write!(f, "a={}:{}", self.name, val),
            None => write!(f, "a={}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_parse_flag() {
        let attr = Attribute::parse("a=rtcp-mux").unwrap();
        assert_eq!(attr, Attribute::flag("rtcp-mux"));
        assert_eq!(attr.render(), "a=rtcp-mux");
    }

    #[test]
    fn test_attribute_parse_with_colon_in_value() {
        let attr = Attribute::parse("a=fingerprint:sha-256 AA:BB:CC").unwrap();
        assert_eq!(attr.name, "fingerprint");
        assert_eq!(attr.value.as_deref(), Some("sha-256 AA:BB:CC"));
        assert_eq!(attr.render(), "a=fingerprint:sha-256 AA:BB:CC");
    }

    #[test]
    fn test_attribute_skips_claimed_names() {
        assert!(!Attribute::recognize("a=rtpmap:96 VP8/90000"));
        assert!(!Attribute::recognize("a=rtpmap:96"));
        assert!(!Attribute::recognize("a=fmtp:97 apt=96"));
        assert!(!Attribute::recognize("a=rtcp-fb:96 nack"));
        assert!(!Attribute::recognize("a=sendonly"));
        assert!(Attribute::recognize("a=sendonly:1"));
        assert!(Attribute::recognize("a=rtcp:9 IN IP4 0.0.0.0"));
    }

    #[test]
    fn test_attribute_requires_name() {
        assert!(!Attribute::recognize("a="));
        assert!(!Attribute::recognize("a=:value"));
        assert!(Attribute::parse("a=:value").is_err());
    }

    #[test]
    fn test_attribute_empty_value_round_trips() {
        let attr = Attribute::parse("a=label:").unwrap();
        assert_eq!(attr.value.as_deref(), Some(""));
        assert_eq!(attr.render(), "a=label:");
    }
}
