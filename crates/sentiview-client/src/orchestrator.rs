//! Multi-source aggregation orchestration
//!
//! Fans out the four symbol-scoped upstream calls concurrently and joins
//! them into one display-ready report. Sentiment and advice are required;
//! news and blogs are best-effort enrichment that degrade to absent.

use crate::client::UpstreamApi;
use crate::error::{ApiError, Result};
use crate::models::{
    BlogResponse, InvestmentAdvice, NewsResponse, SentimentReport, SentimentScore, SourceType,
    VideoAnalysis,
};
use crate::video::extract_video_id;
use tracing::{debug, info};

/// Combined result of one symbol analysis cycle.
///
/// `analysis` and `advice` are always populated together; a failure of
/// either aborts the whole aggregate, so callers never observe a partial
/// required pair.
#[derive(Debug, Clone)]
pub struct SymbolReport {
    pub analysis: SentimentReport,
    pub advice: InvestmentAdvice,
    pub news: Option<NewsResponse>,
    pub blogs: Option<BlogResponse>,
}

/// Orchestrates concurrent fetches against the analysis service
pub struct Orchestrator<C: UpstreamApi> {
    client: C,
}

impl<C: UpstreamApi> Orchestrator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Analyze a ticker symbol across all upstream sources.
    ///
    /// The symbol is trimmed and upper-cased before dispatch; an empty
    /// symbol is rejected without issuing any request. All four calls are
    /// started together so total latency is bounded by the slowest one.
    pub async fn analyze(&self, symbol: &str) -> Result<SymbolReport> {
        let symbol = normalize_symbol(symbol)?;
        info!("Starting multi-source analysis for {}", symbol);

        let (analysis, advice, news, blogs) = tokio::join!(
            self.client.symbol_sentiment(&symbol),
            self.client.investment_advice(&symbol),
            self.client.news_articles(&symbol),
            self.client.blog_posts(&symbol),
        );

        // Sentiment and advice are the primary deliverable; news and blogs
        // are supplementary and degrade to absent on failure.
        let report = SymbolReport {
            analysis: analysis?,
            advice: advice?,
            news: news.ok(),
            blogs: blogs.ok(),
        };

        debug!(
            "Analysis for {} complete (news: {}, blogs: {})",
            symbol,
            report.news.is_some(),
            report.blogs.is_some()
        );
        Ok(report)
    }

    /// Analyze the transcript sentiment of a video given a pasted URL.
    ///
    /// An unparseable reference fails immediately with a validation error;
    /// no network call is made.
    pub async fn analyze_video(&self, reference: &str) -> Result<VideoAnalysis> {
        let video_id = extract_video_id(reference).ok_or_else(|| {
            ApiError::Validation("Please enter a valid YouTube URL".to_string())
        })?;

        info!("Analyzing video {}", video_id);
        self.client
            .video_transcript_sentiment(&video_id, "en")
            .await
    }

    /// Analyze an ad-hoc piece of financial text
    pub async fn analyze_text(&self, text: &str) -> Result<SentimentScore> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ApiError::Validation("Text must not be empty".to_string()));
        }
        self.client.text_sentiment(text, SourceType::News).await
    }
}

fn normalize_symbol(symbol: &str) -> Result<String> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(ApiError::Validation("Symbol must not be empty".to_string()));
    }
    Ok(symbol.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockUpstreamApi;
    use crate::models::{AdviceAction, RiskLevel, SentimentLabel};
    use indexmap::IndexMap;

    fn sample_report(symbol: &str) -> SentimentReport {
        SentimentReport {
            symbol: symbol.to_string(),
            overall_sentiment: SentimentLabel::Positive,
            confidence_score: 0.8,
            source_breakdown: IndexMap::new(),
            recommendation: "Consider buying".to_string(),
            risk_level: RiskLevel::Low,
            key_insights: vec!["momentum".to_string()],
            timestamp: None,
        }
    }

    fn sample_advice(symbol: &str) -> InvestmentAdvice {
        InvestmentAdvice {
            symbol: symbol.to_string(),
            action: AdviceAction::Buy,
            confidence: 0.7,
            reasoning: vec!["strong sentiment".to_string()],
            time_horizon: "6-12 months".to_string(),
            risk_factors: vec![],
        }
    }

    #[tokio::test]
    async fn test_analyze_normalizes_symbol_before_dispatch() {
        let mut client = MockUpstreamApi::new();
        client
            .expect_symbol_sentiment()
            .withf(|symbol| symbol == "AAPL")
            .returning(|s| Ok(sample_report(s)));
        client
            .expect_investment_advice()
            .withf(|symbol| symbol == "AAPL")
            .returning(|s| Ok(sample_advice(s)));
        client.expect_news_articles().returning(|s| {
            Ok(NewsResponse {
                symbol: s.to_string(),
                articles: vec![],
            })
        });
        client.expect_blog_posts().returning(|s| {
            Ok(BlogResponse {
                symbol: s.to_string(),
                posts: vec![],
            })
        });

        let orchestrator = Orchestrator::new(client);
        let report = orchestrator.analyze("  aapl ").await.unwrap();
        assert_eq!(report.analysis.symbol, "AAPL");
        assert!(report.news.is_some());
        assert!(report.blogs.is_some());
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_symbol_without_dispatch() {
        // No expectations set: any upstream call would panic the mock
        let client = MockUpstreamApi::new();
        let orchestrator = Orchestrator::new(client);

        let err = orchestrator.analyze("   ").await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_optional_failures_degrade_gracefully() {
        let mut client = MockUpstreamApi::new();
        client
            .expect_symbol_sentiment()
            .returning(|s| Ok(sample_report(s)));
        client
            .expect_investment_advice()
            .returning(|s| Ok(sample_advice(s)));
        client
            .expect_news_articles()
            .returning(|_| Err(ApiError::Timeout));
        client.expect_blog_posts().returning(|_| {
            Err(ApiError::Upstream {
                status: 500,
                detail: "feed parser crashed".to_string(),
            })
        });

        let orchestrator = Orchestrator::new(client);
        let report = orchestrator.analyze("MSFT").await.unwrap();
        assert!(report.news.is_none());
        assert!(report.blogs.is_none());
    }

    #[tokio::test]
    async fn test_required_failure_aborts_aggregate() {
        let mut client = MockUpstreamApi::new();
        client
            .expect_symbol_sentiment()
            .returning(|s| Ok(sample_report(s)));
        client
            .expect_investment_advice()
            .returning(|_| Err(ApiError::Timeout));
        client.expect_news_articles().returning(|s| {
            Ok(NewsResponse {
                symbol: s.to_string(),
                articles: vec![],
            })
        });
        client.expect_blog_posts().returning(|s| {
            Ok(BlogResponse {
                symbol: s.to_string(),
                posts: vec![],
            })
        });

        let orchestrator = Orchestrator::new(client);
        let err = orchestrator.analyze("TSLA").await.unwrap_err();
        assert!(matches!(err, ApiError::Timeout));
    }

    #[tokio::test]
    async fn test_analyze_video_rejects_bad_reference_without_dispatch() {
        let client = MockUpstreamApi::new();
        let orchestrator = Orchestrator::new(client);

        let err = orchestrator
            .analyze_video("https://example.com/video")
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_analyze_video_dispatches_extracted_id() {
        let mut client = MockUpstreamApi::new();
        client
            .expect_video_transcript_sentiment()
            .withf(|id, language| id.as_str() == "dQw4w9WgXcQ" && language == "en")
            .returning(|id, _| {
                Ok(VideoAnalysis {
                    video_id: id.to_string(),
                    transcript_preview: "hello...".to_string(),
                    sentiment: SentimentScore {
                        sentiment: SentimentLabel::Neutral,
                        confidence: 0.6,
                        raw_scores: crate::models::RawScores {
                            positive: 0.2,
                            negative: 0.2,
                            neutral: 0.6,
                        },
                    },
                })
            });

        let orchestrator = Orchestrator::new(client);
        let analysis = orchestrator
            .analyze_video("https://youtu.be/dQw4w9WgXcQ")
            .await
            .unwrap();
        assert_eq!(analysis.video_id, "dQw4w9WgXcQ");
    }

    #[tokio::test]
    async fn test_analyze_text_rejects_empty_input() {
        let client = MockUpstreamApi::new();
        let orchestrator = Orchestrator::new(client);

        let err = orchestrator.analyze_text("  ").await.unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol(" aapl ").unwrap(), "AAPL");
        assert!(normalize_symbol("").is_err());
    }
}
