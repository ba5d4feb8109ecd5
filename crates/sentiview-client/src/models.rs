//! Typed result models for the analysis service boundary
//!
//! All types here are plain immutable value objects. They are what the
//! presentation layer consumes; transport-level objects never cross that
//! boundary.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Overall sentiment classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
        };
        write!(f, "{label}")
    }
}

/// Risk classification; upstream is inconsistent about casing so decoding
/// is case-insensitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        match raw.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(serde::de::Error::custom(format!(
                "unknown risk level: {other}"
            ))),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        };
        write!(f, "{level}")
    }
}

/// Recommended position action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AdviceAction {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for AdviceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
            Self::Hold => "HOLD",
        };
        write!(f, "{action}")
    }
}

/// Comprehensive sentiment analysis for one symbol.
///
/// `source_breakdown` keeps upstream insertion order (the service orders
/// sources by relevance), hence the `IndexMap`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentReport {
    pub symbol: String,
    pub overall_sentiment: SentimentLabel,
    pub confidence_score: f64,
    #[serde(default)]
    pub source_breakdown: IndexMap<String, f64>,
    #[serde(default)]
    pub recommendation: String,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub key_insights: Vec<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Long-horizon investment advice for one symbol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentAdvice {
    pub symbol: String,
    pub action: AdviceAction,
    pub confidence: f64,
    #[serde(default)]
    pub reasoning: Vec<String>,
    pub time_horizon: String,
    #[serde(default)]
    pub risk_factors: Vec<String>,
}

/// One news article returned by the data endpoint.
///
/// `published` is whatever the upstream feed carried (RSS date formats
/// vary) and is passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub url: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub published: String,
}

/// News endpoint response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsResponse {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
}

/// One blog post returned by the data endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub url: String,
    #[serde(default)]
    pub published: String,
}

/// Blog endpoint response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogResponse {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
}

/// Kind of content submitted for ad-hoc text analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    News,
    Youtube,
    Blog,
    Social,
}

/// Per-class sentiment scores, roughly normalized probabilities
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RawScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// Sentiment classification with per-class scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentScore {
    pub sentiment: SentimentLabel,
    pub confidence: f64,
    pub raw_scores: RawScores,
}

/// Transcript sentiment analysis for one video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoAnalysis {
    pub video_id: String,
    pub transcript_preview: String,
    pub sentiment: SentimentScore,
}
