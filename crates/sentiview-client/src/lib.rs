//! Multi-source financial sentiment client
//!
//! This crate is the client-side core of sentiview. Given a ticker symbol
//! or a pasted video URL it orchestrates concurrent fetches against the
//! analysis service and assembles one display-ready result:
//!
//! - Typed HTTP boundary to five upstream capabilities (symbol sentiment,
//!   investment advice, news search, blog search, transcript sentiment)
//! - Concurrent fan-out with an asymmetric failure policy: sentiment and
//!   advice are required, news and blogs degrade gracefully
//! - Central classification of transport failures into user-actionable
//!   errors
//! - Video URL parsing into a canonical identifier
//! - Source confidence normalization for display
//!
//! # Example
//!
//! ```rust,ignore
//! use sentiview_client::{ApiClient, ClientConfig, Orchestrator};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ApiClient::new(ClientConfig::default().with_env_base_url());
//!     let orchestrator = Orchestrator::new(client);
//!
//!     let report = orchestrator.analyze("AAPL").await?;
//!     println!("{}: {}", report.analysis.symbol, report.analysis.overall_sentiment);
//!
//!     Ok(())
//! }
//! ```

pub mod breakdown;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod video;

// Re-export main types for convenience
pub use breakdown::{SourceCategory, SourceShare, normalize_breakdown};
pub use client::{ApiClient, UpstreamApi};
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use models::{
    AdviceAction, BlogPost, BlogResponse, InvestmentAdvice, NewsArticle, NewsResponse, RawScores,
    RiskLevel, SentimentLabel, SentimentReport, SentimentScore, SourceType, VideoAnalysis,
};
pub use orchestrator::{Orchestrator, SymbolReport};
pub use video::{VideoId, extract_video_id};
