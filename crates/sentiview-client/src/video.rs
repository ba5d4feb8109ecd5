//! Video reference parsing
//!
//! Users paste full watch URLs, short links, or embed URLs; the upstream
//! transcript endpoint only accepts the canonical 11-character video ID.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Canonical 11-character video identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    /// Identifier length fixed by the video platform
    pub const LEN: usize = 11;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Matches watch?v=, youtu.be/, embed/ and /v/ forms, with arbitrary path
// prefixes before the matching segment. The capture is restricted to the
// platform's identifier alphabet.
static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([A-Za-z0-9_-]{11})",
    )
    .expect("video id pattern is valid")
});

/// Extract the canonical video ID from a user-supplied reference.
///
/// Returns `None` when the reference contains no recognizable video URL;
/// callers treat that as an input validation failure, not a transport
/// failure. Pure and deterministic.
pub fn extract_video_id(reference: &str) -> Option<VideoId> {
    VIDEO_ID_RE
        .captures(reference)
        .and_then(|caps| caps.get(1))
        .map(|m| VideoId(m.as_str().to_string()))
}
