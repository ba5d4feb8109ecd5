//! Plain-text rendering of analysis results
//!
//! Consumes only the typed result models; no transport-level detail
//! reaches this layer.

use sentiview_client::{
    SentimentScore, SourceCategory, SymbolReport, VideoAnalysis, normalize_breakdown,
};

fn category_tag(category: SourceCategory) -> &'static str {
    match category {
        SourceCategory::News => "news",
        SourceCategory::Video => "video",
        SourceCategory::Blog => "blog",
        SourceCategory::Social => "social",
        SourceCategory::Other => "other",
    }
}

fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Render the combined symbol report
pub fn render_symbol_report(report: &SymbolReport) -> String {
    let analysis = &report.analysis;
    let advice = &report.advice;
    let mut out = String::new();

    out.push_str(&format!("Sentiment Analysis for {}\n", analysis.symbol));
    out.push_str(&format!("  Overall sentiment: {}\n", analysis.overall_sentiment));
    out.push_str(&format!("  Confidence:        {}\n", percent(analysis.confidence_score)));
    out.push_str(&format!("  Risk level:        {}\n", analysis.risk_level));
    if !analysis.recommendation.is_empty() {
        out.push_str(&format!("  Recommendation:    {}\n", analysis.recommendation));
    }

    if !analysis.key_insights.is_empty() {
        out.push_str("\nKey insights:\n");
        for insight in &analysis.key_insights {
            out.push_str(&format!("  - {insight}\n"));
        }
    }

    let shares = normalize_breakdown(&analysis.source_breakdown);
    if !shares.is_empty() {
        out.push_str("\nData sources analyzed:\n");
        for share in &shares {
            out.push_str(&format!(
                "  {:<24} [{}] {}%\n",
                share.source,
                category_tag(share.category),
                share.percent
            ));
        }
    }

    out.push_str("\nInvestment Advice\n");
    out.push_str(&format!("  Action:       {}\n", advice.action));
    out.push_str(&format!("  Confidence:   {}\n", percent(advice.confidence)));
    out.push_str(&format!("  Time horizon: {}\n", advice.time_horizon));
    if !advice.reasoning.is_empty() {
        out.push_str("  Reasoning:\n");
        for reason in &advice.reasoning {
            out.push_str(&format!("    - {reason}\n"));
        }
    }
    if !advice.risk_factors.is_empty() {
        out.push_str("  Risk factors:\n");
        for risk in &advice.risk_factors {
            out.push_str(&format!("    - {risk}\n"));
        }
    }

    if let Some(news) = &report.news {
        if !news.articles.is_empty() {
            out.push_str(&format!("\nNews articles ({})\n", news.articles.len()));
            for article in news.articles.iter().take(10) {
                out.push_str(&format!("  {} ({})\n", article.title, article.source));
                out.push_str(&format!("    {}\n", article.url));
            }
        }
    } else {
        out.push_str("\nNews articles unavailable\n");
    }

    if let Some(blogs) = &report.blogs {
        if !blogs.posts.is_empty() {
            out.push_str(&format!("\nBlog posts ({})\n", blogs.posts.len()));
            for post in blogs.posts.iter().take(10) {
                out.push_str(&format!("  {}\n", post.title));
                out.push_str(&format!("    {}\n", post.url));
            }
        }
    } else {
        out.push_str("\nBlog posts unavailable\n");
    }

    if let Some(timestamp) = &analysis.timestamp {
        out.push_str(&format!("\nAnalyzed: {timestamp}\n"));
    }

    out
}

/// Render a video transcript analysis
pub fn render_video_analysis(analysis: &VideoAnalysis) -> String {
    let sentiment = &analysis.sentiment;
    let mut out = String::new();

    out.push_str(&format!("Video {}\n", analysis.video_id));
    out.push_str(&format!("  Transcript preview: {}\n", analysis.transcript_preview));
    out.push('\n');
    out.push_str(&render_sentiment_score(sentiment));
    out
}

/// Render a bare sentiment score with per-class breakdown
pub fn render_sentiment_score(score: &SentimentScore) -> String {
    let mut out = String::new();
    out.push_str(&format!("  Sentiment:  {}\n", score.sentiment));
    out.push_str(&format!("  Confidence: {}\n", percent(score.confidence)));
    out.push_str(&format!("  Positive:   {}\n", percent(score.raw_scores.positive)));
    out.push_str(&format!("  Negative:   {}\n", percent(score.raw_scores.negative)));
    out.push_str(&format!("  Neutral:    {}\n", percent(score.raw_scores.neutral)));
    out
}
