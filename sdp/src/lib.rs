//! SDP Module - Session Description Protocol object model
//!
//! Typed lines (RFC 4566 plus the RTP attributes of RFC 4585), grouped into a
//! session block and media blocks, with per-payload-type codec records.
//!
//! ```
//! use sdp::Sdp;
//!
//! let mut sdp = Sdp::parse(
//!     "v=0\r\nm=video 9 RTP/AVPF 96 97\r\na=sendrecv\r\n\
//!      a=rtpmap:96 VP8/90000\r\na=rtpmap:97 rtx/90000\r\na=fmtp:97 apt=96\r\n",
//! )?;
//!
//! // Dropping VP8 also drops its retransmission codec.
//! assert_eq!(sdp.media_mut()[0].remove_pt(96), vec![96, 97]);
//! assert_eq!(sdp.to_sdp()?, "v=0\r\nm=video 9 RTP/AVPF\r\na=sendrecv");
//! # Ok::<(), sdp::SdpError>(())
//! ```

pub mod attribute;
pub mod codec_info;
pub mod config;
pub mod connection;
pub mod direction;
pub mod errors;
pub mod fmtp;
pub mod line;
pub mod media_info;
pub mod media_line;
pub mod origin;
pub mod rtcp_fb;
pub mod rtpmap;
pub mod session_description;
pub mod session_info;
pub mod session_name;
pub mod timing;
pub mod version;

pub use attribute::Attribute;
pub use codec_info::CodecInfo;
pub use config::{SdpConfig, Strictness};
pub use connection::Connection;
pub use direction::Direction;
pub use errors::SdpError;
pub use fmtp::Fmtp;
pub use line::{Line, SdpLine};
pub use media_info::MediaInfo;
pub use media_line::MediaLine;
pub use origin::Origin;
pub use rtcp_fb::RtcpFb;
pub use rtpmap::RtpMap;
pub use session_description::Sdp;
pub use session_info::SessionInfo;
pub use session_name::SessionName;
pub use timing::Timing;
pub use version::Version;
