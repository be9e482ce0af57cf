//! Per-payload-type codec record.

use crate::{
    errors::SdpError,
    fmtp::Fmtp,
    line::Line,
    rtcp_fb::RtcpFb,
    rtpmap::RtpMap,
};

/// Everything a media block knows about one payload type.
///
/// Built from the rtpmap, fmtp and rtcp-fb lines addressed to the payload
/// type. Fmtp and rtcp-fb strings are kept raw and re-emitted in the order
/// they arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct CodecInfo {
    payload_type: u8,
    encoding_name: Option<String>,
    clock_rate: Option<u32>,
    encoding_params: Option<String>,
    format_params: Vec<String>,
    feedback: Vec<String>,
    primary_payload_type: Option<u8>,
}

impl CodecInfo {
    pub fn new(payload_type: u8) -> Self {
        CodecInfo {
            payload_type,
            encoding_name: None,
            clock_rate: None,
            encoding_params: None,
            format_params: Vec::new(),
            feedback: Vec::new(),
            primary_payload_type: None,
        }
    }

    /// Adds one codec-addressing line to the record.
    ///
    /// An rtpmap replaces the encoding; fmtp and rtcp-fb lines are appended.
    /// An fmtp carrying a valid `apt` marks this codec as secondary to that
    /// payload type, and the mark is never cleared by later lines.
    ///
    /// # Errors
    /// * `SdpError::PayloadTypeMismatch` - The line addresses another payload type
    /// * `SdpError::UnexpectedLine` - The line is not rtpmap, fmtp or rtcp-fb
    pub fn add_line(&mut self, line: &Line) -> Result<(), SdpError> {
        if let Some(found) = line.payload_type() {
            if found != self.payload_type {
                return Err(SdpError::PayloadTypeMismatch {
                    expected: self.payload_type,
                    found,
                });
            }
        }

        match line {
            Line::RtpMap(rtpmap) => {
                self.encoding_name = Some(rtpmap.encoding_name.clone());
                self.clock_rate = Some(rtpmap.clock_rate);
                self.encoding_params = rtpmap.encoding_params.clone();
            }
            Line::Fmtp(fmtp) => {
                if let Some(apt) = fmtp.apt() {
                    self.primary_payload_type = Some(apt);
                }
                self.format_params.push(fmtp.params.clone());
            }
            Line::RtcpFb(fb) => self.feedback.push(fb.feedback.clone()),
            other => return Err(SdpError::UnexpectedLine(other.kind())),
        }
        Ok(())
    }

    /// Lines describing this codec: the rtpmap, then the rtcp-fb lines,
    /// then the fmtp lines.
    ///
    /// # Errors
    /// `SdpError::MissingRtpMap` if no rtpmap was ever added.
    pub fn to_lines(&self) -> Result<Vec<Line>, SdpError> {
        let rtpmap = self.rtpmap().ok_or(SdpError::MissingRtpMap(self.payload_type))?;

        let mut lines = Vec::with_capacity(1 + self.feedback.len() + self.format_params.len());
        lines.push(Line::RtpMap(rtpmap));
        lines.extend(
            self.feedback
                .iter()
                .map(|fb| Line::RtcpFb(RtcpFb::new(self.payload_type, fb))),
        );
        lines.extend(
            self.format_params
                .iter()
                .map(|params| Line::Fmtp(Fmtp::new(self.payload_type, params))),
        );
        Ok(lines)
    }

    fn rtpmap(&self) -> Option<RtpMap> {
        let name = self.encoding_name.as_deref()?;
        let rtpmap = RtpMap::new(self.payload_type, name, self.clock_rate?);
        Some(match &self.encoding_params {
            Some(params) => rtpmap.with_encoding_params(params),
            None => rtpmap,
        })
    }

    pub fn payload_type(&self) -> u8 {
        self.payload_type
    }

    pub fn encoding_name(&self) -> Option<&str> {
        self.encoding_name.as_deref()
    }

    pub fn clock_rate(&self) -> Option<u32> {
        self.clock_rate
    }

    pub fn encoding_params(&self) -> Option<&str> {
        self.encoding_params.as_deref()
    }

    /// Raw fmtp parameter strings in arrival order.
    pub fn format_params(&self) -> &[String] {
        &self.format_params
    }

    /// Raw rtcp-fb strings in arrival order.
    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }

    /// Payload type named by this codec's `apt` parameter, if any.
    pub fn primary_payload_type(&self) -> Option<u8> {
        self.primary_payload_type
    }

    /// True for codecs that depend on another one (RTX, FEC, ...).
    pub fn is_secondary(&self) -> bool {
        self.primary_payload_type.is_some()
    }
}

impl std::fmt::Display for CodecInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.encoding_name, self.clock_rate) {
            (Some(name), Some(rate)) => write!(f, "{} {}/{}", self.payload_type, name, rate),
            _ => write!(f, "{} (no rtpmap)", self.payload_type),
        }
    }
}
