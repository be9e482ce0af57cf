//! Complete SDP document.
//!
//! [`Sdp`] holds the session block and the media blocks in document order,
//! and drives ingestion of raw text one line at a time.

use crate::{
    config::{SdpConfig, Strictness},
    errors::SdpError,
    line::{Line, SdpLine},
    media_info::MediaInfo,
    media_line::MediaLine,
    session_info::SessionInfo,
};
use logging::Logger;
use std::str::FromStr;

/// SDP line terminator.
const CRLF: &str = "\r\n";

/// A session description: one session block plus its media blocks.
#[derive(Clone, Default)]
pub struct Sdp {
    session: SessionInfo,
    media: Vec<MediaInfo>,
    strictness: Strictness,
    logger: Option<Logger>,
    // set after a malformed m= line; its block's lines are dropped
    orphaned: bool,
}

impl std::fmt::Debug for Sdp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sdp")
            .field("session", &self.session)
            .field("media", &self.media)
            .field("strictness", &self.strictness)
            .field("logger", &self.logger.is_some())
            .field("orphaned", &self.orphaned)
            .finish()
    }
}

impl Sdp {
    /// Creates an empty, lenient document without logging.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document with the strictness and logger of `config`.
    ///
    /// # Errors
    /// `SdpError::Logging` if the configured log file cannot be opened.
    pub fn with_config(config: &SdpConfig) -> Result<Self, SdpError> {
        let sdp = Self::new().with_strictness(config.strictness);
        Ok(match config.build_logger()? {
            Some(logger) => sdp.with_logger(logger),
            None => sdp,
        })
    }

    /// Media blocks opened after this call inherit `strictness`.
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Sets a logger; media blocks opened afterwards log through it as well.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger.for_component("Sdp"));
        self
    }

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

    /// Parses a whole document with the default configuration.
    pub fn parse(text: &str) -> Result<Self, SdpError> {
        Self::parse_with_config(text, &SdpConfig::default())
    }

    /// Parses a whole document, one line at a time.
    ///
    /// See [`Sdp::add_raw_line`] for what happens to each line.
    pub fn parse_with_config(text: &str, config: &SdpConfig) -> Result<Self, SdpError> {
        let mut sdp = Self::with_config(config)?;
        for raw in text.split('\n') {
            sdp.add_raw_line(raw)?;
        }
        sdp.log_debug(&format!(
            "Parsed {} session lines and {} media blocks",
            sdp.session.lines().len(),
            sdp.media.len()
        ));
        Ok(sdp)
    }

    /// Recognizes and adds one raw line.
    ///
    /// A trailing `\r` is stripped and blank lines are skipped. Lines no
    /// kind recognizes are ignored. When a lenient document skips a
    /// malformed `m=` line, the lines of that media section are skipped too,
    /// up to the next `m=` line.
    ///
    /// # Errors
    /// In [`Strictness::Strict`] mode, a malformed field in a recognized line
    /// and every structural error from [`Sdp::add_line`]. Lenient documents
    /// log these and drop the line.
    pub fn add_raw_line(&mut self, raw: &str) -> Result<(), SdpError> {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if raw.trim().is_empty() {
            return Ok(());
        }

        match Line::parse(raw) {
            Ok(Some(Line::Media(media))) => {
                self.orphaned = false;
                self.add_line(Line::Media(media))
            }
            Ok(Some(_)) if self.orphaned => {
                self.log_debug(&format!("Skipping '{}' of a dropped media section", raw));
                Ok(())
            }
            Ok(Some(line)) => self.add_line(line),
            Ok(None) => {
                self.log_debug(&format!("Ignoring unrecognized line '{}'", raw));
                Ok(())
            }
            Err(err) => match self.strictness {
                Strictness::Strict => Err(err),
                Strictness::Lenient => {
                    self.log_warn(&format!("Skipping malformed line '{}': {}", raw, err));
                    if MediaLine::recognize(raw) {
                        self.orphaned = true;
                    }
                    Ok(())
                }
            },
        }
    }

    /// Adds a parsed line to the current block.
    ///
    /// A media line opens a new media block. Any other line goes to the
    /// latest media block, or to the session block before the first one.
    pub fn add_line(&mut self, line: Line) -> Result<(), SdpError> {
        match line {
            Line::Media(media) => {
                let block = self.open_media(media);
                self.media.push(block);
                Ok(())
            }
            other => match self.media.last_mut() {
                Some(block) => block.add_line(other),
                None => {
                    self.session.add_line(other);
                    Ok(())
                }
            },
        }
    }

    fn open_media(&self, media: MediaLine) -> MediaInfo {
        let block = MediaInfo::new(media).with_strictness(self.strictness);
        match &self.logger {
            Some(logger) => block.with_logger(logger.for_component("Media")),
            None => block,
        }
    }

    pub fn session(&self) -> &SessionInfo {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionInfo {
        &mut self.session
    }

    pub fn media(&self) -> &[MediaInfo] {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut [MediaInfo] {
        &mut self.media
    }

    pub fn add_media(&mut self, media: MediaInfo) {
        self.media.push(media);
    }

    /// Every line of the document in emission order.
    pub fn to_lines(&self) -> Result<Vec<Line>, SdpError> {
        let mut lines = self.session.to_lines();
        for block in &self.media {
            lines.extend(block.to_lines()?);
        }
        Ok(lines)
    }

    /// Renders the document, lines joined with CRLF and no terminator after
    /// the last one.
    ///
    /// # Errors
    /// Structural errors of strict media blocks, see [`MediaInfo::to_lines`].
    pub fn to_sdp(&self) -> Result<String, SdpError> {
        let rendered: Vec<String> = self.to_lines()?.iter().map(Line::render).collect();
        Ok(rendered.join(CRLF))
    }
}

impl FromStr for Sdp {
    type Err = SdpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sdp::parse(s)
    }
}
