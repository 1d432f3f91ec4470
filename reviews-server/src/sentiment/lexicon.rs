use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Scalar added to a valence by an intensifier, subtracted by a dampener.
pub const BOOST_INCR: f64 = 0.293;
pub const BOOST_DECR: f64 = -0.293;

/// Extra magnitude for a sentiment word written in ALL CAPS.
pub const CAPS_INCR: f64 = 0.733;

/// Multiplier applied to a valence preceded by a negation.
pub const NEGATION_SCALAR: f64 = -0.74;

/// Word valences on a -4..=4 scale, tuned for short customer reviews.
static VALENCES: &[(&str, f64)] = &[
    ("abysmal", -3.3),
    ("acceptable", 1.3),
    ("adequate", 0.9),
    ("adorable", 2.2),
    ("affordable", 1.3),
    ("amazing", 2.8),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.7),
    ("appalling", -3.0),
    ("appreciate", 1.7),
    ("attentive", 1.6),
    ("avoid", -1.2),
    ("awesome", 3.1),
    ("awful", -2.0),
    ("awkward", -0.6),
    ("bad", -2.5),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("bland", -1.0),
    ("boring", -1.3),
    ("bravo", 2.4),
    ("broken", -1.6),
    ("burnt", -1.3),
    ("careless", -1.5),
    ("charming", 2.3),
    ("cheap", -0.4),
    ("clean", 1.7),
    ("cold", -0.3),
    ("comfortable", 2.0),
    ("complain", -1.5),
    ("complaint", -1.2),
    ("cozy", 1.9),
    ("crap", -1.6),
    ("crowded", -0.8),
    ("cute", 2.0),
    ("delicious", 2.7),
    ("delight", 2.9),
    ("delightful", 2.8),
    ("dirty", -1.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disappointment", -2.3),
    ("disaster", -3.1),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("dreadful", -2.7),
    ("dull", -1.7),
    ("easy", 1.9),
    ("efficient", 1.8),
    ("enjoy", 2.2),
    ("enjoyable", 1.9),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("exceptional", 1.5),
    ("excited", 1.4),
    ("expensive", -0.5),
    ("fabulous", 2.4),
    ("fail", -2.5),
    ("failed", -2.3),
    ("fair", 1.3),
    ("fantastic", 2.6),
    ("fast", 0.6),
    ("favorite", 2.0),
    ("filthy", -2.4),
    ("fine", 0.8),
    ("flawless", 2.3),
    ("fresh", 1.3),
    ("friendly", 2.2),
    ("frustrated", -2.1),
    ("frustrating", -1.9),
    ("fun", 2.3),
    ("generous", 2.3),
    ("gem", 1.8),
    ("glad", 2.0),
    ("gorgeous", 3.0),
    ("good", 1.9),
    ("great", 3.1),
    ("greasy", -1.2),
    ("gross", -2.1),
    ("happy", 2.7),
    ("hate", -2.7),
    ("hated", -3.2),
    ("helpful", 1.8),
    ("horrible", -2.5),
    ("hostile", -2.2),
    ("ignored", -1.3),
    ("impressed", 2.1),
    ("impressive", 2.3),
    ("incompetent", -2.3),
    ("incredible", 2.6),
    ("inedible", -2.2),
    ("insult", -2.3),
    ("joy", 2.8),
    ("kind", 2.4),
    ("lame", -1.8),
    ("lousy", -2.5),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("mediocre", -1.0),
    ("meh", -0.3),
    ("mess", -1.5),
    ("messy", -1.5),
    ("miserable", -2.2),
    ("mistake", -1.4),
    ("nasty", -2.6),
    ("negative", -2.7),
    ("nice", 1.8),
    ("ok", 1.2),
    ("okay", 0.9),
    ("outstanding", 3.0),
    ("overcooked", -1.0),
    ("overpriced", -1.5),
    ("pathetic", -2.7),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("pleasure", 2.7),
    ("polite", 1.9),
    ("poor", -2.1),
    ("positive", 2.6),
    ("pretty", 2.2),
    ("problem", -1.7),
    ("professional", 1.7),
    ("quality", 0.6),
    ("recommend", 1.5),
    ("recommended", 0.8),
    ("refund", -0.5),
    ("regret", -1.8),
    ("relaxing", 2.2),
    ("reliable", 1.9),
    ("rude", -2.0),
    ("sad", -2.1),
    ("satisfied", 1.8),
    ("scam", -2.8),
    ("sick", -2.3),
    ("slow", -1.3),
    ("smile", 1.5),
    ("soggy", -1.1),
    ("sorry", -0.3),
    ("spacious", 1.3),
    ("stale", -1.3),
    ("stunning", 2.6),
    ("stupid", -2.4),
    ("superb", 3.1),
    ("sweet", 2.0),
    ("tasty", 2.0),
    ("terrible", -2.1),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("tidy", 1.5),
    ("tired", -1.9),
    ("top", 0.8),
    ("tragic", -3.4),
    ("trash", -1.8),
    ("ugly", -2.3),
    ("unacceptable", -2.0),
    ("unfriendly", -2.1),
    ("unhappy", -1.8),
    ("unhelpful", -1.8),
    ("unprofessional", -2.0),
    ("upset", -1.6),
    ("useless", -1.8),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("welcoming", 1.9),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wow", 2.8),
    ("wrong", -2.1),
    ("yuck", -1.8),
    ("yum", 2.3),
    ("yummy", 2.4),
];

static INTENSIFIERS: &[&str] = &[
    "absolutely",
    "amazingly",
    "completely",
    "deeply",
    "especially",
    "exceptionally",
    "extremely",
    "highly",
    "incredibly",
    "really",
    "remarkably",
    "so",
    "super",
    "totally",
    "truly",
    "utterly",
    "very",
];

static DAMPENERS: &[&str] = &[
    "almost",
    "barely",
    "hardly",
    "kinda",
    "less",
    "little",
    "marginally",
    "partly",
    "slightly",
    "somewhat",
    "sort",
];

static NEGATIONS: &[&str] = &[
    "ain't", "aint", "aren't", "arent", "can't", "cannot", "cant", "couldn't", "couldnt",
    "didn't", "didnt", "doesn't", "doesnt", "don't", "dont", "hasn't", "hasnt", "haven't",
    "havent", "isn't", "isnt", "neither", "never", "no", "nobody", "none", "nor", "not",
    "nothing", "nowhere", "shouldn't", "shouldnt", "wasn't", "wasnt", "weren't", "werent",
    "without", "won't", "wont", "wouldn't", "wouldnt",
];

static LEXICON: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| VALENCES.iter().copied().collect());

static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    INTENSIFIERS
        .iter()
        .map(|w| (*w, BOOST_INCR))
        .chain(DAMPENERS.iter().map(|w| (*w, BOOST_DECR)))
        .collect()
});

static NEGATION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NEGATIONS.iter().copied().collect());

/// Valence of a lower-cased word, if it carries any.
pub fn valence(word: &str) -> Option<f64> {
    LEXICON.get(word).copied()
}

/// Boost scalar of a lower-cased intensifier or dampener.
pub fn booster(word: &str) -> Option<f64> {
    BOOSTERS.get(word).copied()
}

pub fn is_negation(word: &str) -> bool {
    NEGATION_SET.contains(word) || word.ends_with("n't")
}
