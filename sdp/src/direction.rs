//! Media direction attributes.

use crate::{errors::SdpError, line::SdpLine};
use std::str::FromStr;

/// One of the four direction flags of RFC 4566 section 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    SendRecv,
    SendOnly,
    RecvOnly,
    Inactive,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::SendRecv => "sendrecv",
            Direction::SendOnly => "sendonly",
            Direction::RecvOnly => "recvonly",
            Direction::Inactive => "inactive",
        }
    }
}

impl FromStr for Direction {
    type Err = SdpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sendrecv" => Ok(Direction::SendRecv),
            "sendonly" => Ok(Direction::SendOnly),
            "recvonly" => Ok(Direction::RecvOnly),
            "inactive" => Ok(Direction::Inactive),
            other => Err(SdpError::InvalidDirection(other.to_string())),
        }
    }
}

impl SdpLine for Direction {
    const KIND: &'static str = "direction";

    fn recognize(raw: &str) -> bool {
        raw.strip_prefix("a=")
            .is_some_and(|name| name.parse::<Direction>().is_ok())
    }

    fn parse(raw: &str) -> Result<Self, SdpError> {
        let name = raw
            .strip_prefix("a=")
            .ok_or_else(|| SdpError::InvalidDirection(raw.to_string()))?;
        name.parse()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a={}", self.as_str())
    }
}
