pub mod full;
pub mod lexicon;
pub mod vader;

use std::sync::Arc;

use reviews_types::SentimentScores;
use serde::Deserialize;

pub use full::FullLexiconAnalyzer;
pub use vader::VaderAnalyzer;

/// Scores the polarity of a piece of text.
///
/// Implementations must be deterministic: the listing endpoint relies on
/// identical text producing identical scores.
pub trait SentimentAnalyzer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> SentimentScores;
}

/// Which analyzer the server scores reviews with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerKind {
    /// Complete VADER lexicon.
    #[default]
    Full,
    /// Bundled word list; smaller and fully under our control.
    Compact,
}

impl AnalyzerKind {
    pub fn build(self) -> Arc<dyn SentimentAnalyzer> {
        match self {
            AnalyzerKind::Full => Arc::new(FullLexiconAnalyzer::new()),
            AnalyzerKind::Compact => Arc::new(VaderAnalyzer::new()),
        }
    }
}
