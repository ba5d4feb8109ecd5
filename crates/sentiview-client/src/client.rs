//! HTTP client for the analysis service
//!
//! All five upstream operations share one transport contract: one
//! configurable timeout per call and one central mapping from transport
//! signals to the [`ApiError`] taxonomy. Call sites never inspect raw
//! transport errors.

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::models::{
    BlogResponse, InvestmentAdvice, NewsResponse, SentimentReport, SentimentScore, SourceType,
    VideoAnalysis,
};
use crate::video::VideoId;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

#[cfg(test)]
use mockall::automock;

/// Typed boundary to the remote analysis capabilities.
///
/// The orchestrator depends on this trait rather than the concrete client
/// so aggregation policy can be tested without a network.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UpstreamApi: Send + Sync {
    /// GET `/api/analysis/symbol/{symbol}`
    async fn symbol_sentiment(&self, symbol: &str) -> Result<SentimentReport>;

    /// GET `/api/analysis/advice/{symbol}`
    async fn investment_advice(&self, symbol: &str) -> Result<InvestmentAdvice>;

    /// GET `/api/data/news/{symbol}`
    async fn news_articles(&self, symbol: &str) -> Result<NewsResponse>;

    /// GET `/api/data/blogs/{symbol}`
    async fn blog_posts(&self, symbol: &str) -> Result<BlogResponse>;

    /// POST `/api/sentiment/youtube/transcript`
    async fn video_transcript_sentiment(
        &self,
        video_id: &VideoId,
        language: &str,
    ) -> Result<VideoAnalysis>;

    /// POST `/api/sentiment/analyze`
    async fn text_sentiment(&self, text: &str, source: SourceType) -> Result<SentimentScore>;
}

#[derive(Serialize)]
struct TranscriptRequest<'a> {
    video_id: &'a str,
    language: &'a str,
}

#[derive(Serialize)]
struct TextRequest<'a> {
    text: &'a str,
    source_type: SourceType,
}

/// Concrete HTTP client for the analysis service
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a client from configuration
    pub fn new(config: ClientConfig) -> Self {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { http, config }
    }

    /// Create a client with the base URL taken from `SENTIVIEW_API_URL`
    pub fn from_env() -> Self {
        Self::new(ClientConfig::default().with_env_base_url())
    }

    /// The configured service base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| classify_transport(&e, &self.config.base_url))?;

        self.read_body(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| classify_transport(&e, &self.config.base_url))?;

        self.read_body(response).await
    }

    async fn read_body<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(upstream_error(status, &body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| classify_transport(&e, &self.config.base_url))
    }
}

#[async_trait]
impl UpstreamApi for ApiClient {
    async fn symbol_sentiment(&self, symbol: &str) -> Result<SentimentReport> {
        self.get_json(&format!("/api/analysis/symbol/{symbol}")).await
    }

    async fn investment_advice(&self, symbol: &str) -> Result<InvestmentAdvice> {
        self.get_json(&format!("/api/analysis/advice/{symbol}")).await
    }

    async fn news_articles(&self, symbol: &str) -> Result<NewsResponse> {
        self.get_json(&format!("/api/data/news/{symbol}")).await
    }

    async fn blog_posts(&self, symbol: &str) -> Result<BlogResponse> {
        self.get_json(&format!("/api/data/blogs/{symbol}")).await
    }

    async fn video_transcript_sentiment(
        &self,
        video_id: &VideoId,
        language: &str,
    ) -> Result<VideoAnalysis> {
        let request = TranscriptRequest {
            video_id: video_id.as_str(),
            language,
        };

        // 404 on this path means the video has no usable captions; surface
        // that meaning instead of a generic upstream failure.
        match self
            .post_json("/api/sentiment/youtube/transcript", &request)
            .await
        {
            Err(ApiError::Upstream { status: 404, .. }) => Err(ApiError::TranscriptUnavailable {
                video_id: video_id.to_string(),
            }),
            other => other,
        }
    }

    async fn text_sentiment(&self, text: &str, source: SourceType) -> Result<SentimentScore> {
        let request = TextRequest {
            text,
            source_type: source,
        };
        self.post_json("/api/sentiment/analyze", &request).await
    }
}

/// Map a transport-layer error to the taxonomy.
///
/// Central and call-site independent: timeouts, blocked sockets, unreachable
/// hosts, and body decode failures each get exactly one classification.
fn classify_transport(err: &reqwest::Error, base_url: &str) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    if err.is_decode() {
        return ApiError::Decode(err.to_string());
    }
    if is_blocked(err) {
        return ApiError::ClientBlocked;
    }

    // No response was received at all; distinguished from a received error
    // response, which is handled by `upstream_error`.
    ApiError::NetworkUnreachable {
        base_url: base_url.to_string(),
    }
}

/// Detect interception by the local environment (content filter, sandbox
/// policy). Shows up as a permission-denied I/O error underneath the
/// transport error rather than as any HTTP status.
fn is_blocked(err: &reqwest::Error) -> bool {
    use std::error::Error as _;

    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::PermissionDenied {
                return true;
            }
        }
        source = cause.source();
    }
    false
}

/// Build an `Upstream` error from a non-success response body.
///
/// The service wraps failure messages as `{"detail": "..."}`; the detail is
/// surfaced when present, otherwise the raw body, otherwise a generic
/// message.
fn upstream_error(status: StatusCode, body: &str) -> ApiError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str().map(String::from)))
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "analysis request failed".to_string()
            } else {
                trimmed.to_string()
            }
        });

    ApiError::Upstream {
        status: status.as_u16(),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new(ClientConfig::default());
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_upstream_error_extracts_detail() {
        let err = upstream_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"detail": "Analysis failed: no data for symbol"}"#,
        );
        match err {
            ApiError::Upstream { status, detail } => {
                assert_eq!(status, 500);
                assert_eq!(detail, "Analysis failed: no data for symbol");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn test_upstream_error_falls_back_to_raw_body() {
        let err = upstream_error(StatusCode::BAD_GATEWAY, "gateway exploded");
        match err {
            ApiError::Upstream { status, detail } => {
                assert_eq!(status, 502);
                assert_eq!(detail, "gateway exploded");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn test_upstream_error_generic_on_empty_body() {
        let err = upstream_error(StatusCode::INTERNAL_SERVER_ERROR, "");
        match err {
            ApiError::Upstream { detail, .. } => {
                assert_eq!(detail, "analysis request failed");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn test_upstream_404_and_500_messages_differ() {
        let missing = upstream_error(StatusCode::NOT_FOUND, r#"{"detail": "Transcript not available"}"#);
        let failed = upstream_error(StatusCode::INTERNAL_SERVER_ERROR, r#"{"detail": "boom"}"#);
        assert_ne!(missing.to_string(), failed.to_string());
    }

    #[tokio::test]
    #[ignore] // Requires a running analysis backend
    async fn test_symbol_sentiment_live() {
        let client = ApiClient::from_env();
        let report = client.symbol_sentiment("AAPL").await.unwrap();
        assert_eq!(report.symbol, "AAPL");
    }
}
