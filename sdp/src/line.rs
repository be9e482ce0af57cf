//! The SDP line taxonomy.
//!
//! Every line kind implements [`SdpLine`]; [`Line`] is the closed set of
//! kinds the model understands. Raw text is classified by trying each kind's
//! recognizer in a fixed order, first match wins. The recognizers are
//! disjoint, so the order only matters for speed and readability.

use crate::{
    attribute::Attribute, connection::Connection, direction::Direction, errors::SdpError,
    fmtp::Fmtp, media_line::MediaLine, origin::Origin, rtcp_fb::RtcpFb, rtpmap::RtpMap,
    session_name::SessionName, timing::Timing, version::Version,
};

/// Recognize / parse / render contract shared by all line kinds.
///
/// For any `raw` with `recognize(raw) == true` and `Ok(line) = parse(raw)`,
/// `recognize(&line.render())` holds and parsing the rendered text yields a
/// line equal to `line`. Rendering may normalize the input (numbers lose
/// leading zeros, runs of whitespace collapse to one space).
pub trait SdpLine: Sized + std::fmt::Display {
    /// Human-readable kind, used in diagnostics.
    const KIND: &'static str;

    /// Tests whether `raw` has the shape of this line kind. Pure and total.
    fn recognize(raw: &str) -> bool;

    /// Builds the typed line from a recognized raw line.
    fn parse(raw: &str) -> Result<Self, SdpError>;

    /// Canonical wire form, without a line terminator.
    fn render(&self) -> String {
        self.to_string()
    }
}

/// One parsed SDP line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Version(Version),
    Origin(Origin),
    SessionName(SessionName),
    Connection(Connection),
    Timing(Timing),
    Media(MediaLine),
    Direction(Direction),
    RtpMap(RtpMap),
    Fmtp(Fmtp),
    RtcpFb(RtcpFb),
    Attribute(Attribute),
}

/// Tries each kind in order and wraps the first match.
macro_rules! dispatch {
    ($raw:expr; $($kind:ident => $variant:ident),* $(,)?) => {{
        let raw = $raw;
        $(
            if $kind::recognize(raw) {
                return $kind::parse(raw).map(|line| Some(Line::$variant(line)));
            }
        )*
        Ok(None)
    }};
}

/// Applies the same expression to whichever kind the line holds.
macro_rules! each_kind {
    ($line:expr, $inner:ident => $body:expr) => {
        match $line {
            Line::Version($inner) => $body,
            Line::Origin($inner) => $body,
            Line::SessionName($inner) => $body,
            Line::Connection($inner) => $body,
            Line::Timing($inner) => $body,
            Line::Media($inner) => $body,
            Line::Direction($inner) => $body,
            Line::RtpMap($inner) => $body,
            Line::Fmtp($inner) => $body,
            Line::RtcpFb($inner) => $body,
            Line::Attribute($inner) => $body,
        }
    };
}

impl Line {
    /// Classifies and parses one raw line.
    ///
    /// # Returns
    /// * `Ok(Some(line))` - A kind recognized the line and parsed it
    /// * `Ok(None)` - No kind recognizes the line; callers ignore it
    /// * `Err(SdpError)` - A kind recognized the line but a field is malformed
    pub fn parse(raw: &str) -> Result<Option<Self>, SdpError> {
        dispatch!(raw;
            Version => Version,
            Origin => Origin,
            SessionName => SessionName,
            Connection => Connection,
            Timing => Timing,
            MediaLine => Media,
            Direction => Direction,
            RtpMap => RtpMap,
            Fmtp => Fmtp,
            RtcpFb => RtcpFb,
            Attribute => Attribute,
        )
    }

    /// True when some line kind recognizes `raw`.
    pub fn recognize(raw: &str) -> bool {
        Version::recognize(raw)
            || Origin::recognize(raw)
            || SessionName::recognize(raw)
            || Connection::recognize(raw)
            || Timing::recognize(raw)
            || MediaLine::recognize(raw)
            || Direction::recognize(raw)
            || RtpMap::recognize(raw)
            || Fmtp::recognize(raw)
            || RtcpFb::recognize(raw)
            || Attribute::recognize(raw)
    }

    pub fn render(&self) -> String {
        each_kind!(self, line => line.render())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Line::Version(_) => Version::KIND,
            Line::Origin(_) => Origin::KIND,
            Line::SessionName(_) => SessionName::KIND,
            Line::Connection(_) => Connection::KIND,
            Line::Timing(_) => Timing::KIND,
            Line::Media(_) => MediaLine::KIND,
            Line::Direction(_) => Direction::KIND,
            Line::RtpMap(_) => RtpMap::KIND,
            Line::Fmtp(_) => Fmtp::KIND,
            Line::RtcpFb(_) => RtcpFb::KIND,
            Line::Attribute(_) => Attribute::KIND,
        }
    }

    /// Payload type of a codec-addressing line (rtpmap, fmtp, rtcp-fb).
    pub fn payload_type(&self) -> Option<u8> {
        match self {
            Line::RtpMap(line) => Some(line.payload_type),
            Line::Fmtp(line) => Some(line.payload_type),
            Line::RtcpFb(line) => Some(line.payload_type),
            _ => None,
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        each_kind!(self, line => write!(f, "{}", line))
    }
}

macro_rules! impl_from_kind {
    ($($kind:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$kind> for Line {
                fn from(line: $kind) -> Self {
                    Line::$variant(line)
                }
            }
        )*
    };
}

impl_from_kind! {
    Version => Version,
    Origin => Origin,
    SessionName => SessionName,
    Connection => Connection,
    Timing => Timing,
    MediaLine => Media,
    Direction => Direction,
    RtpMap => RtpMap,
    Fmtp => Fmtp,
    RtcpFb => RtcpFb,
    Attribute => Attribute,
}

/// Returns the text after `a=<name>:` if `raw` is that attribute.
pub(crate) fn attribute_value<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    raw.strip_prefix("a=")?
        .strip_prefix(name)?
        .strip_prefix(':')
}

/// Splits a codec attribute value into its payload-type token and the
/// whitespace-trimmed remainder. Both parts are non-empty.
pub(crate) fn split_payload_type(value: &str) -> Option<(&str, &str)> {
    let (pt, rest) = value.split_once(char::is_whitespace)?;
    let rest = rest.trim();
    if pt.is_empty() || rest.is_empty() {
        return None;
    }
    Some((pt, rest))
}

pub(crate) fn parse_payload_type(token: &str) -> Result<u8, SdpError> {
    token
        .parse()
        .map_err(|_| SdpError::InvalidPayloadType(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dispatches_to_each_kind() {
        let cases = [
            ("v=0", "version"),
            ("o=- 1 2 IN IP4 127.0.0.1", "origin"),
            ("s=-", "session name"),
            ("c=IN IP4 10.0.0.1", "connection"),
            ("t=0 0", "timing"),
            ("m=audio 9 RTP/AVP 0", "media"),
            ("a=sendrecv", "direction"),
            ("a=rtpmap:0 PCMU/8000", "rtpmap"),
            ("a=fmtp:97 apt=96", "fmtp"),
            ("a=rtcp-fb:96 nack pli", "rtcp-fb"),
            ("a=mid:0", "attribute"),
        ];

        for (raw, kind) in cases {
            let line = Line::parse(raw).unwrap().unwrap();
            assert_eq!(line.kind(), kind, "{}", raw);
            assert_eq!(line.render(), raw);
        }
    }

    #[test]
    fn test_parse_unrecognized_is_none() {
        assert!(Line::parse("x=unknown").unwrap().is_none());
        assert!(Line::parse("not an sdp line").unwrap().is_none());
        assert!(Line::parse("").unwrap().is_none());
        assert!(!Line::recognize("z=0 0"));
    }

    #[test]
    fn test_parse_malformed_field_is_error() {
        assert!(Line::parse("t=abc 0").is_err());
        assert!(Line::parse("a=rtpmap:x PCMU/8000").is_err());
        assert!(Line::parse("m=audio port RTP/AVP 0").is_err());
    }

    #[test]
    fn test_recognizers_are_disjoint() {
        let samples = [
            "v=0",
            "o=jdoe 2890844526 2890842807 IN IP4 10.47.16.5",
            "s=SDP Seminar",
            "c=IN IP4 224.2.17.12/127",
            "t=2873397496 2873404696",
            "m=video 51372 RTP/AVP 99 100",
            "a=recvonly",
            "a=inactive",
            "a=rtpmap:99 h263-1998/90000",
            "a=fmtp:99 profile=0;level=10",
            "a=rtcp-fb:99 ccm fir",
            "a=rtcp-mux",
            "a=sendrecv:extra",
        ];

        for raw in samples {
            let matches = [
                Version::recognize(raw),
                Origin::recognize(raw),
                SessionName::recognize(raw),
                Connection::recognize(raw),
                Timing::recognize(raw),
                MediaLine::recognize(raw),
                Direction::recognize(raw),
                RtpMap::recognize(raw),
                Fmtp::recognize(raw),
                RtcpFb::recognize(raw),
                Attribute::recognize(raw),
            ]
            .iter()
            .filter(|m| **m)
            .count();
            assert_eq!(matches, 1, "{}", raw);
        }
    }

    #[test]
    fn test_payload_type_only_for_codec_lines() {
        let fmtp = Line::parse("a=fmtp:97 apt=96").unwrap().unwrap();
        let timing = Line::parse("t=0 0").unwrap().unwrap();
        assert_eq!(fmtp.payload_type(), Some(97));
        assert_eq!(timing.payload_type(), None);
    }

    #[test]
    fn test_display_matches_render() {
        let line: Line = Direction::SendOnly.into();
        assert_eq!(line.to_string(), "a=sendonly");
        assert_eq!(line.to_string(), line.render());
    }

    #[test]
    fn test_attribute_value_helper() {
        assert_eq!(attribute_value("a=fmtp:97 apt=96", "fmtp"), Some("97 apt=96"));
        assert_eq!(attribute_value("a=fmtpx:97", "fmtp"), None);
        assert_eq!(attribute_value("a=fmtp", "fmtp"), None);
    }

    #[test]
    fn test_split_payload_type_helper() {
        assert_eq!(split_payload_type("96  nack pli "), Some(("96", "nack pli")));
        assert_eq!(split_payload_type("96"), None);
        assert_eq!(split_payload_type("96 "), None);
    }
}
