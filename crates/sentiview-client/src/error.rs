//! Error taxonomy for upstream sentiment operations

use thiserror::Error;

/// Classified failures surfaced to the presentation layer.
///
/// Every variant renders as a distinct, user-actionable message. Nothing
/// here is retried automatically; retries are user-initiated resubmissions.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed user input; rejected before any network call
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The calling environment intercepted the request before it left
    #[error("Request blocked by a local content filter or proxy. Adjust your environment and try again.")]
    ClientBlocked,

    /// No response within the configured bound
    #[error("Request timed out. The analysis model may still be loading; please try again.")]
    Timeout,

    /// Transport could not reach the service at all
    #[error("Cannot connect to the analysis service at {base_url}. Make sure the backend is running.")]
    NetworkUnreachable { base_url: String },

    /// A response arrived with a non-success status
    #[error("Analysis service error {status}: {detail}")]
    Upstream { status: u16, detail: String },

    /// Video-path 404: the video exists but has no usable captions
    #[error("No transcript available for video {video_id}. The video may not have English captions; try a different video.")]
    TranscriptUnavailable { video_id: String },

    /// Response received but not parseable into the expected model
    #[error("Malformed response from the analysis service: {0}")]
    Decode(String),
}

/// Result type alias for sentiment client operations
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// True when the failure happened before any request was issued
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Validation("empty symbol".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty symbol");

        let err = ApiError::Upstream {
            status: 500,
            detail: "Analysis failed: no data".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Analysis service error 500: Analysis failed: no data"
        );
    }

    #[test]
    fn test_transcript_unavailable_is_distinct_from_upstream() {
        let missing = ApiError::TranscriptUnavailable {
            video_id: "dQw4w9WgXcQ".to_string(),
        };
        let generic = ApiError::Upstream {
            status: 500,
            detail: "boom".to_string(),
        };
        assert_ne!(missing.to_string(), generic.to_string());
        assert!(missing.to_string().contains("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_is_validation() {
        assert!(ApiError::Validation("x".to_string()).is_validation());
        assert!(!ApiError::Timeout.is_validation());
    }
}
