use serde::{Deserialize, Serialize};

/// A stored customer review.
///
/// Field names follow the seed data's column headers, so they serialize in
/// PascalCase. Seeded rows may not carry an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_id: Option<String>,
    pub location: String,
    /// `YYYY-MM-DD HH:MM:SS`, compared as a plain string when filtering
    pub timestamp: String,
    pub review_body: String,
}

/// Polarity scores for a piece of text.
///
/// `neg`, `neu` and `pos` are proportions in [0, 1]; `compound` is the
/// normalized aggregate in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl Default for SentimentScores {
    fn default() -> Self {
        Self {
            neg: 0.0,
            neu: 1.0,
            pos: 0.0,
            compound: 0.0,
        }
    }
}

/// A review together with the sentiment computed for it at read time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedReview {
    #[serde(flatten)]
    pub review: Review,
    pub sentiment: SentimentScores,
}

/// Query parameters accepted by the listing endpoint.
///
/// Empty values are treated the same as missing ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewQuery {
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
