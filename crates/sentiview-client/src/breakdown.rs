//! Source confidence breakdown shaping
//!
//! Turns the raw source-name to confidence mapping from the analysis
//! endpoint into a bounded, display-ready sequence.

use indexmap::IndexMap;

/// Display category for a data source, derived from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceCategory {
    News,
    Video,
    Blog,
    Social,
    Other,
}

impl SourceCategory {
    /// Classify a source name by case-insensitive keyword match.
    ///
    /// First matching keyword wins; anything unrecognized is `Other`.
    pub fn classify(source_name: &str) -> Self {
        let name = source_name.to_lowercase();
        if name.contains("news") {
            Self::News
        } else if name.contains("youtube") || name.contains("video") {
            Self::Video
        } else if name.contains("blog") {
            Self::Blog
        } else if name.contains("social") {
            Self::Social
        } else {
            Self::Other
        }
    }
}

/// One renderable row of the source breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceShare {
    pub source: String,
    /// Confidence as a whole percentage, clamped to 0..=100
    pub percent: u8,
    pub category: SourceCategory,
}

/// Normalize a raw source breakdown into display rows.
///
/// Raw values outside `[0, 1]` are a data-quality defect upstream and are
/// clamped rather than propagated. Iteration order is the insertion order
/// of the input mapping; an empty mapping yields an empty sequence.
pub fn normalize_breakdown(breakdown: &IndexMap<String, f64>) -> Vec<SourceShare> {
    breakdown
        .iter()
        .map(|(source, raw)| {
            let clamped = raw.clamp(0.0, 1.0);
            SourceShare {
                source: source.clone(),
                percent: (clamped * 100.0).round() as u8,
                category: SourceCategory::classify(source),
            }
        })
        .collect()
}
