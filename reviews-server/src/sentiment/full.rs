use reviews_types::SentimentScores;

use super::SentimentAnalyzer;

/// VADER with its complete published lexicon and emoji table.
///
/// The analyzer borrows lexicons that are built once per process, so
/// constructing one per call is cheap.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullLexiconAnalyzer;

impl FullLexiconAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentAnalyzer for FullLexiconAnalyzer {
    fn polarity_scores(&self, text: &str) -> SentimentScores {
        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        let score = |key: &str| scores.get(key).copied().unwrap_or(0.0);

        SentimentScores {
            neg: score("neg"),
            neu: score("neu"),
            pos: score("pos"),
            compound: score("compound").clamp(-1.0, 1.0),
        }
    }
}
