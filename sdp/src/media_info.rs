//! Media description block.
//!
//! A [`MediaInfo`] is everything from one `m=` line up to the next: the
//! declared payload types, one [`CodecInfo`] per payload type, the direction
//! and the remaining media-level lines.

use crate::{
    codec_info::CodecInfo,
    config::Strictness,
    connection::Connection,
    direction::Direction,
    errors::SdpError,
    line::Line,
    media_line::MediaLine,
};
use logging::Logger;
use std::collections::{HashMap, HashSet};

/// One media description and its codecs.
///
/// The payload-type sequence and the codec map always hold the same set of
/// payload types.
#[derive(Clone)]
pub struct MediaInfo {
    media_type: String,
    port: u16,
    protocol: String,
    payload_types: Vec<u8>,
    formats: Vec<String>,
    codecs: HashMap<u8, CodecInfo>,
    direction: Option<Direction>,
    connection: Option<Connection>,
    other_lines: Vec<Line>,
    strictness: Strictness,
    logger: Option<Logger>,
}

impl std::fmt::Debug for MediaInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaInfo")
            .field("media_type", &self.media_type)
            .field("port", &self.port)
            .field("protocol", &self.protocol)
            .field("payload_types", &self.payload_types)
            .field("formats", &self.formats)
            .field("codecs", &self.codecs)
            .field("direction", &self.direction)
            .field("connection", &self.connection)
            .field("other_lines", &self.other_lines)
            .field("strictness", &self.strictness)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

impl MediaInfo {
    /// Creates the block for `media`, with an empty codec record for every
    /// declared payload type.
    ///
    /// A payload type listed twice is kept once, at its first position.
    pub fn new(media: MediaLine) -> Self {
        let mut seen = HashSet::new();
        let payload_types: Vec<u8> = media
            .payload_types
            .into_iter()
            .filter(|pt| seen.insert(*pt))
            .collect();
        let codecs = payload_types
            .iter()
            .map(|&pt| (pt, CodecInfo::new(pt)))
            .collect();

        Self {
            media_type: media.media_type,
            port: media.port,
            protocol: media.protocol,
            payload_types,
            formats: media.formats,
            codecs,
            direction: None,
            connection: None,
            other_lines: Vec::new(),
            strictness: Strictness::default(),
            logger: None,
        }
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Sets a logger for structural diagnostics.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Internal logging helper for warnings
    fn log_warn(&self, message: &str) {
        if let Some(ref logger) = self.logger {
            logger.warn(message);
        }
    }

    fn log_debug(&self, message: &str) {
        if let Some(ref logger) = self.logger {
            logger.debug(message);
        }
    }

    /// Applies the block's [`Strictness`] to a structural problem with `line`.
    fn reject(&self, err: SdpError, line: &Line) -> Result<(), SdpError> {
        match self.strictness {
            Strictness::Strict => Err(err),
            Strictness::Lenient => {
                self.log_warn(&format!("Dropping '{}' in {} block: {}", line, self.media_type, err));
                Ok(())
            }
        }
    }

    /// Adds one media-level line.
    ///
    /// Direction and connection lines replace any earlier one. Codec lines
    /// go to the codec of their payload type. Any other line is kept and
    /// re-emitted as is.
    ///
    /// # Errors
    /// Only in [`Strictness::Strict`] mode:
    /// * `SdpError::MediaLineInBlock` - `line` is an `m=` line
    /// * `SdpError::UnknownPayloadType` - A codec line names an undeclared payload type
    pub fn add_line(&mut self, line: Line) -> Result<(), SdpError> {
        match line {
            Line::Media(_) => self.reject(SdpError::MediaLineInBlock, &line),
            Line::Direction(direction) => {
                self.direction = Some(direction);
                Ok(())
            }
            Line::Connection(connection) => {
                self.connection = Some(connection);
                Ok(())
            }
            Line::RtpMap(_) | Line::Fmtp(_) | Line::RtcpFb(_) => self.route_to_codec(line),
            other => {
                self.other_lines.push(other);
                Ok(())
            }
        }
    }

    fn route_to_codec(&mut self, line: Line) -> Result<(), SdpError> {
        let Some(pt) = line.payload_type() else {
            return self.reject(SdpError::UnexpectedLine(line.kind()), &line);
        };

        if let Some(codec) = self.codecs.get_mut(&pt) {
            return codec.add_line(&line);
        }
        self.reject(SdpError::UnknownPayloadType(pt), &line)
    }

    pub fn get_codec_by_pt(&self, pt: u8) -> Option<&CodecInfo> {
        self.codecs.get(&pt)
    }

    /// Removes the codec at `pt` together with every codec whose `apt`
    /// points at it.
    ///
    /// Only direct dependents go: a codec depending on one of the dependents
    /// stays unless it also names `pt`. Dependents are removed even when `pt`
    /// itself is not declared. With nothing to remove the block is unchanged.
    ///
    /// # Returns
    /// The removed payload types, in their former sequence order.
    pub fn remove_pt(&mut self, pt: u8) -> Vec<u8> {
        let doomed: HashSet<u8> = self
            .codecs
            .values()
            .filter(|codec| codec.primary_payload_type() == Some(pt))
            .map(CodecInfo::payload_type)
            .chain(std::iter::once(pt))
            .collect();

        let removed: Vec<u8> = self
            .payload_types
            .iter()
            .copied()
            .filter(|p| doomed.contains(p))
            .collect();

        if removed.is_empty() {
            return removed;
        }

        self.codecs.retain(|p, _| !doomed.contains(p));
        self.payload_types.retain(|p| !doomed.contains(p));

        self.log_debug(&format!(
            "Removed payload types {:?} from {} block",
            removed, self.media_type
        ));
        removed
    }

    /// The block's lines in emission order: media line, connection,
    /// direction, other media-level lines, then every codec's lines in
    /// payload-type sequence order.
    ///
    /// # Errors
    /// Only in [`Strictness::Strict`] mode:
    /// * `SdpError::MissingDirection` - No direction line was ever added
    /// * `SdpError::MissingRtpMap` - A declared codec never got its rtpmap
    ///
    /// In lenient mode the missing pieces are logged and left out.
    pub fn to_lines(&self) -> Result<Vec<Line>, SdpError> {
        let mut lines = vec![Line::Media(self.media_line())];

        if let Some(connection) = &self.connection {
            lines.push(Line::Connection(connection.clone()));
        }

        match self.direction {
            Some(direction) => lines.push(Line::Direction(direction)),
            None => self.omit(SdpError::MissingDirection)?,
        }

        lines.extend(self.other_lines.iter().cloned());

        for codec in self.codecs() {
            match codec.to_lines() {
                Ok(codec_lines) => lines.extend(codec_lines),
                Err(err) => self.omit(err)?,
            }
        }

        Ok(lines)
    }

    /// Like [`MediaInfo::reject`], for pieces missing at render time.
    fn omit(&self, err: SdpError) -> Result<(), SdpError> {
        match self.strictness {
            Strictness::Strict => Err(err),
            Strictness::Lenient => {
                self.log_warn(&format!("Omitting from {} block: {}", self.media_type, err));
                Ok(())
            }
        }
    }

    /// The `m=` line for the current payload types.
    pub fn media_line(&self) -> MediaLine {
        MediaLine::new(
            &self.media_type,
            self.port,
            &self.protocol,
            self.payload_types.clone(),
        )
        .with_formats(self.formats.clone())
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn payload_types(&self) -> &[u8] {
        &self.payload_types
    }

    /// Declared formats that are not RTP payload types.
    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    /// Codecs in payload-type sequence order.
    pub fn codecs(&self) -> impl Iterator<Item = &CodecInfo> {
        self.payload_types
            .iter()
            .filter_map(|pt| self.codecs.get(pt))
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = Some(direction);
    }

    pub fn connection(&self) -> Option<&Connection> {
        self.connection.as_ref()
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::SdpLine;
    use logging::LogLevel;

    fn media(raw: &str) -> MediaInfo {
        MediaInfo::new(MediaLine::parse(raw).unwrap())
    }

    fn add(block: &mut MediaInfo, raw: &str) {
        block.add_line(Line::parse(raw).unwrap().unwrap()).unwrap();
    }

    fn rendered(block: &MediaInfo) -> Vec<String> {
        block.to_lines().unwrap().iter().map(Line::render).collect()
    }

    #[test]
    fn test_new_creates_codecs_eagerly() {
        let block = media("m=video 9 UDP/TLS/RTP/SAVPF 96 97 96");
        assert_eq!(block.payload_types(), [96, 97]);
        assert!(block.get_codec_by_pt(96).is_some());
        assert!(block.get_codec_by_pt(97).is_some());
        assert!(block.get_codec_by_pt(98).is_none());
        assert_eq!(block.codecs().count(), 2);
    }

    #[test]
    fn test_add_line_routes_codec_lines() {
        let mut block = media("m=audio 9 RTP/AVP 111 0");
        add(&mut block, "a=rtpmap:0 PCMU/8000");
        add(&mut block, "a=rtpmap:111 opus/48000/2");
        add(&mut block, "a=fmtp:111 minptime=10");

        let opus = block.get_codec_by_pt(111).unwrap();
        assert_eq!(opus.encoding_name(), Some("opus"));
        assert_eq!(opus.format_params(), ["minptime=10"]);
        assert_eq!(block.get_codec_by_pt(0).unwrap().clock_rate(), Some(8000));
    }

    #[test]
    fn test_to_lines_canonical_order() {
        let mut block = media("m=video 9 RTP/AVPF 97 96");
        add(&mut block, "a=fmtp:97 apt=96");
        add(&mut block, "a=rtpmap:96 VP8/90000");
        add(&mut block, "a=mid:video");
        add(&mut block, "a=rtcp-fb:96 nack");
        add(&mut block, "a=rtpmap:97 rtx/90000");
        add(&mut block, "a=recvonly");
        add(&mut block, "c=IN IP4 0.0.0.0");

        assert_eq!(
            rendered(&block),
            [
                "m=video 9 RTP/AVPF 97 96",
                "c=IN IP4 0.0.0.0",
                "a=recvonly",
                "a=mid:video",
                "a=rtpmap:97 rtx/90000",
                "a=fmtp:97 apt=96",
                "a=rtpmap:96 VP8/90000",
                "a=rtcp-fb:96 nack",
            ]
        );
    }

    #[test]
    fn test_direction_last_write_wins() {
        let mut block = media("m=audio 9 RTP/AVP 0");
        add(&mut block, "a=sendrecv");
        add(&mut block, "a=inactive");
        assert_eq!(block.direction(), Some(Direction::Inactive));

        block.set_direction(Direction::SendOnly);
        assert_eq!(block.direction(), Some(Direction::SendOnly));
    }

    #[test]
    fn test_unknown_payload_type_dropped_and_logged() {
        let logger = Logger::in_memory(LogLevel::Warn);
        let mut block = media("m=audio 9 RTP/AVP 0").with_logger(logger.clone());

        add(&mut block, "a=rtpmap:120 opus/48000/2");

        assert_eq!(block.payload_types(), [0]);
        assert!(block.get_codec_by_pt(120).is_none());
        let records = logger.records();
        assert_eq!(records.len(), 1);
        assert!(records[0].contains("Unknown payload type 120"));
        assert!(records[0].contains("a=rtpmap:120 opus/48000/2"));
    }

    #[test]
    fn test_strict_mode_returns_structural_errors() {
        let mut block = media("m=audio 9 RTP/AVP 0").with_strictness(Strictness::Strict);

        let unknown = Line::parse("a=fmtp:8 x=1").unwrap().unwrap();
        assert!(matches!(
            block.add_line(unknown),
            Err(SdpError::UnknownPayloadType(8))
        ));

        let nested = Line::parse("m=video 9 RTP/AVP 96").unwrap().unwrap();
        assert!(matches!(
            block.add_line(nested),
            Err(SdpError::MediaLineInBlock)
        ));

        assert!(matches!(block.to_lines(), Err(SdpError::MissingDirection)));
        block.set_direction(Direction::SendRecv);
        assert!(matches!(block.to_lines(), Err(SdpError::MissingRtpMap(0))));
    }

    #[test]
    fn test_lenient_render_omits_incomplete_pieces() {
        let logger = Logger::in_memory(LogLevel::Warn);
        let mut block = media("m=audio 9 RTP/AVP 0 8").with_logger(logger.clone());
        add(&mut block, "a=rtpmap:8 PCMA/8000");

        assert_eq!(rendered(&block), ["m=audio 9 RTP/AVP 0 8", "a=rtpmap:8 PCMA/8000"]);
        assert_eq!(logger.records().len(), 2);
    }

    #[test]
    fn test_remove_pt_cascades_one_level() {
        let mut block = media("m=video 9 RTP/AVPF 100 101 102 103");
        add(&mut block, "a=fmtp:101 apt=100");
        add(&mut block, "a=fmtp:102 apt=101");
        add(&mut block, "a=fmtp:103 apt=100");

        assert_eq!(block.remove_pt(100), vec![100, 101, 103]);
        assert_eq!(block.payload_types(), [102]);
        assert!(block.get_codec_by_pt(101).is_none());
        assert_eq!(
            block.get_codec_by_pt(102).unwrap().primary_payload_type(),
            Some(101)
        );
    }

    #[test]
    fn test_remove_pt_absent_is_noop() {
        let mut block = media("m=video 9 RTP/AVPF 96 97");
        add(&mut block, "a=fmtp:97 apt=96");

        assert!(block.remove_pt(99).is_empty());
        assert_eq!(block.payload_types(), [96, 97]);
        assert_eq!(block.codecs().count(), 2);
    }

    #[test]
    fn test_remove_pt_drops_dependents_of_undeclared_primary() {
        let mut block = media("m=video 9 RTP/AVPF 97 98");
        add(&mut block, "a=fmtp:97 apt=96");

        assert_eq!(block.remove_pt(96), vec![97]);
        assert_eq!(block.payload_types(), [98]);
        assert!(block.get_codec_by_pt(97).is_none());
    }

    #[test]
    fn test_non_rtp_formats_kept_without_codecs() {
        let mut block = media("m=application 9 UDP/DTLS/SCTP webrtc-datachannel");
        add(&mut block, "a=inactive");
        add(&mut block, "a=sctp-port:5000");

        assert!(block.payload_types().is_empty());
        assert_eq!(block.formats(), ["webrtc-datachannel"]);
        assert_eq!(block.codecs().count(), 0);
        assert_eq!(
            rendered(&block),
            [
                "m=application 9 UDP/DTLS/SCTP webrtc-datachannel",
                "a=inactive",
                "a=sctp-port:5000",
            ]
        );
    }

    #[test]
    fn test_remove_pt_keeps_survivor_order() {
        let mut block = media("m=audio 9 RTP/AVP 111 63 9 0 8");
        add(&mut block, "a=fmtp:63 apt=111");

        assert_eq!(block.remove_pt(111), vec![111, 63]);
        assert_eq!(block.payload_types(), [9, 0, 8]);
        assert_eq!(block.media_line().render(), "m=audio 9 RTP/AVP 9 0 8");
        assert!(block.remove_pt(111).is_empty());
    }
}
