//! SDP protocol version (`v=`).

use crate::{errors::SdpError, line::SdpLine};

/// Represents the protocol version line (v=) as defined in RFC 4566.
///
/// Only version `0` exists today, but any non-negative integer is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Version {
    pub version: u32,
}

impl SdpLine for Version {
    const KIND: &'static str = "version";

    fn recognize(raw: &str) -> bool {
        raw.strip_prefix("v=")
            .is_some_and(|value| value.split_whitespace().count() == 1)
    }

    fn parse(raw: &str) -> Result<Self, SdpError> {
        let value = raw.strip_prefix("v=").ok_or(SdpError::InvalidVersion)?;
        let version = value.trim().parse().map_err(|_| SdpError::InvalidVersion)?;
        Ok(Version { version })
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v={}", self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        assert_eq!(Version::parse("v=0").unwrap().version, 0);
        assert_eq!(Version::parse("v=00").unwrap().render(), "v=0");
    }

    #[test]
    fn test_version_recognize() {
        assert!(Version::recognize("v=0"));
        assert!(Version::recognize("v=x"));
        assert!(!Version::recognize("v="));
        assert!(!Version::recognize("v=0 1"));
        assert!(!Version::recognize("t=0"));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("v=x").is_err());
        assert!(Version::parse("v=-1").is_err());
    }
}
