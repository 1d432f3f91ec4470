use once_cell::sync::Lazy;
use regex::Regex;

use reviews_types::SentimentScores;

use super::lexicon::{self, CAPS_INCR, NEGATION_SCALAR};
use super::SentimentAnalyzer;

/// Words, allowing inner apostrophes and hyphens ("didn't", "over-priced").
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}][\p{L}\p{N}'_-]*").expect("Failed to compile token regex")
});

/// Normalization constant for the compound score.
const ALPHA: f64 = 15.0;

const EXCLAIM_INCR: f64 = 0.292;
const QUESTION_INCR_SMALL: f64 = 0.18;
const QUESTION_INCR_LARGE: f64 = 0.96;

/// How much a booster or negation loses per word of distance.
const BOOST_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

/// Lexicon and rule based analyzer in the style of VADER.
///
/// Each word gets a valence from the lexicon, adjusted by nearby intensifiers,
/// negations, capitalization and "but" clauses. Valences are summed, boosted
/// by trailing punctuation and squashed into [-1, 1].
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderAnalyzer;

impl VaderAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn word_sentiments(tokens: &[&str]) -> Vec<f64> {
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let mixed_caps = has_mixed_caps(tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for (i, word) in lowered.iter().enumerate() {
            // Intensifiers only modify their neighbours
            if lexicon::booster(word).is_some() {
                sentiments.push(0.0);
                continue;
            }
            let Some(mut valence) = lexicon::valence(word) else {
                sentiments.push(0.0);
                continue;
            };

            if mixed_caps && is_all_caps(tokens[i]) {
                valence += CAPS_INCR * valence.signum();
            }

            for distance in 1..=3 {
                if i < distance {
                    break;
                }
                let prev = &lowered[i - distance];
                if lexicon::valence(prev).is_some() {
                    continue;
                }
                if let Some(boost) = lexicon::booster(prev) {
                    let mut scalar = boost * valence.signum();
                    if mixed_caps && is_all_caps(tokens[i - distance]) {
                        scalar += CAPS_INCR * valence.signum();
                    }
                    valence += scalar * BOOST_DECAY[distance - 1];
                }
                if lexicon::is_negation(prev) {
                    valence *= NEGATION_SCALAR;
                }
            }

            sentiments.push(valence);
        }

        if let Some(but) = lowered.iter().position(|w| w == "but") {
            for (i, s) in sentiments.iter_mut().enumerate() {
                if i < but {
                    *s *= 0.5;
                } else if i > but {
                    *s *= 1.5;
                }
            }
        }

        sentiments
    }
}

impl SentimentAnalyzer for VaderAnalyzer {
    fn polarity_scores(&self, text: &str) -> SentimentScores {
        let tokens: Vec<&str> = TOKEN_REGEX
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|t| t.chars().count() > 1)
            .collect();

        if tokens.is_empty() {
            return SentimentScores::default();
        }

        let sentiments = Self::word_sentiments(&tokens);
        let punct = punctuation_emphasis(text);

        let mut sum: f64 = sentiments.iter().sum();
        if sum > 0.0 {
            sum += punct;
        } else if sum < 0.0 {
            sum -= punct;
        }
        let compound = normalize(sum);

        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        let mut neu_count = 0.0;
        for &s in &sentiments {
            if s > 0.0 {
                pos_sum += s + 1.0;
            } else if s < 0.0 {
                neg_sum += s - 1.0;
            } else {
                neu_count += 1.0;
            }
        }
        if pos_sum > neg_sum.abs() {
            pos_sum += punct;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= punct;
        }

        let total = pos_sum + neg_sum.abs() + neu_count;
        SentimentScores {
            neg: round_to(neg_sum.abs() / total, 3),
            neu: round_to(neu_count / total, 3),
            pos: round_to(pos_sum / total, 3),
            compound: round_to(compound, 4),
        }
    }
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// Capitalization only counts as emphasis when the text isn't shouted
/// throughout.
fn has_mixed_caps(tokens: &[&str]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclaims = text.matches('!').count().min(4) as f64;
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR_SMALL,
        _ => QUESTION_INCR_LARGE,
    };
    exclaims * EXCLAIM_INCR + question_amp
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
