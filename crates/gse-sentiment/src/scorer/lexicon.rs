//! Shared word lexicon used by both scorer generations.
//!
//! Valences are on a `[-4.0, 4.0]` scale. The polarity scorer rescales them
//! into `[-1.0, 1.0]`; the compound scorer sums them before normalising.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Added to (or subtracted from) the valence of the following sentiment word.
pub(crate) const BOOSTER_INCREMENT: f64 = 0.293;

pub(crate) const VALENCES: &[(&str, f64)] = &[
    // Positive
    ("accept", 1.6),
    ("accessible", 1.3),
    ("admire", 2.3),
    ("affordable", 1.5),
    ("agree", 1.5),
    ("amazing", 2.8),
    ("appreciate", 2.0),
    ("approve", 2.0),
    ("approved", 1.8),
    ("awesome", 3.1),
    ("benefit", 2.0),
    ("benefits", 1.6),
    ("best", 3.2),
    ("better", 1.9),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("care", 2.2),
    ("celebrate", 2.7),
    ("clean", 1.7),
    ("comfortable", 1.5),
    ("confident", 2.2),
    ("delight", 2.9),
    ("delighted", 3.1),
    ("easy", 1.9),
    ("effective", 2.1),
    ("efficient", 1.8),
    ("encourage", 2.3),
    ("enjoy", 2.2),
    ("excellent", 2.7),
    ("fair", 1.3),
    ("fantastic", 2.6),
    ("fine", 0.8),
    ("free", 2.3),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("grateful", 2.0),
    ("great", 3.1),
    ("happy", 2.7),
    ("help", 1.7),
    ("helpful", 1.8),
    ("hope", 1.9),
    ("improve", 1.9),
    ("improved", 2.1),
    ("improvement", 2.0),
    ("kind", 2.4),
    ("like", 2.0),
    ("love", 3.2),
    ("lovely", 2.8),
    ("nice", 1.8),
    ("okay", 0.9),
    ("ok", 1.2),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("positive", 2.6),
    ("prosper", 2.1),
    ("protect", 1.6),
    ("protected", 1.9),
    ("quick", 1.0),
    ("recommend", 1.5),
    ("reliable", 1.9),
    ("safe", 1.9),
    ("safety", 1.8),
    ("satisfied", 1.8),
    ("success", 2.7),
    ("successful", 2.8),
    ("support", 1.7),
    ("supported", 1.3),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("useful", 1.9),
    ("valuable", 2.1),
    ("welcome", 2.0),
    ("well", 1.1),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("worth", 0.9),
    // Negative
    ("abuse", -3.2),
    ("afraid", -2.2),
    ("angry", -2.3),
    ("annoying", -1.7),
    ("awful", -2.0),
    ("bad", -2.5),
    ("ban", -2.6),
    ("banned", -2.0),
    ("broken", -2.1),
    ("burden", -1.9),
    ("chaos", -2.7),
    ("concern", -1.2),
    ("concerned", -1.3),
    ("concerns", -1.1),
    ("crisis", -3.1),
    ("cruel", -2.8),
    ("cut", -1.1),
    ("cuts", -1.2),
    ("damage", -2.2),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("death", -2.9),
    ("delay", -1.3),
    ("delayed", -0.9),
    ("difficult", -1.5),
    ("dirty", -1.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disaster", -3.1),
    ("discrimination", -2.2),
    ("expensive", -0.9),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failing", -2.3),
    ("failure", -2.3),
    ("fear", -2.2),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("harm", -2.5),
    ("harmful", -2.6),
    ("hate", -2.7),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("illegal", -2.6),
    ("injustice", -2.7),
    ("kill", -3.7),
    ("killed", -3.5),
    ("lack", -1.3),
    ("lose", -1.7),
    ("loss", -1.3),
    ("lost", -1.3),
    ("mess", -1.5),
    ("negative", -2.7),
    ("neglect", -2.1),
    ("outrage", -2.3),
    ("pain", -2.3),
    ("poor", -2.1),
    ("poverty", -2.3),
    ("problem", -1.7),
    ("problems", -1.7),
    ("risk", -1.1),
    ("rude", -2.0),
    ("sad", -2.1),
    ("scandal", -1.9),
    ("slow", -1.2),
    ("stop", -1.2),
    ("stress", -1.8),
    ("suffer", -2.4),
    ("suffering", -2.1),
    ("terrible", -2.1),
    ("threat", -2.4),
    ("unacceptable", -2.0),
    ("unfair", -2.1),
    ("unhappy", -1.8),
    ("unsafe", -2.5),
    ("upset", -1.6),
    ("useless", -1.8),
    ("victim", -2.4),
    ("violence", -3.1),
    ("waste", -1.8),
    ("worried", -1.2),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

/// Words that scale the following sentiment word up (`+`) or down (`-`).
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOSTER_INCREMENT),
    ("completely", BOOSTER_INCREMENT),
    ("deeply", BOOSTER_INCREMENT),
    ("especially", BOOSTER_INCREMENT),
    ("extremely", BOOSTER_INCREMENT),
    ("highly", BOOSTER_INCREMENT),
    ("hugely", BOOSTER_INCREMENT),
    ("incredibly", BOOSTER_INCREMENT),
    ("most", BOOSTER_INCREMENT),
    ("really", BOOSTER_INCREMENT),
    ("so", BOOSTER_INCREMENT),
    ("totally", BOOSTER_INCREMENT),
    ("truly", BOOSTER_INCREMENT),
    ("utterly", BOOSTER_INCREMENT),
    ("very", BOOSTER_INCREMENT),
    ("almost", -BOOSTER_INCREMENT),
    ("barely", -BOOSTER_INCREMENT),
    ("hardly", -BOOSTER_INCREMENT),
    ("marginally", -BOOSTER_INCREMENT),
    ("partly", -BOOSTER_INCREMENT),
    ("slightly", -BOOSTER_INCREMENT),
    ("somewhat", -BOOSTER_INCREMENT),
];

pub(crate) const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "didnt", "doesnt", "dont", "hadnt", "hasnt",
    "havent", "isnt", "neither", "never", "no", "nobody", "none", "nor", "not", "nothing",
    "nowhere", "shouldnt", "wasnt", "werent", "without", "wont", "wouldnt",
];

static VALENCE_MAP: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| VALENCES.iter().copied().collect());

static BOOSTER_MAP: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| BOOSTERS.iter().copied().collect());

static NEGATION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NEGATIONS.iter().copied().collect());

/// One whitespace-separated word with surrounding punctuation removed.
#[derive(Debug, Clone)]
pub(crate) struct Token<'a> {
    /// As written, minus leading/trailing punctuation.
    pub raw: &'a str,
    /// Lowercased with apostrophes removed (`don't` → `dont`).
    pub norm: String,
}

impl Token<'_> {
    /// `true` for shouted words like `TERRIBLE` (at least two letters, all uppercase).
    pub(crate) fn is_shouted(&self) -> bool {
        let letters = self.raw.chars().filter(|c| c.is_alphabetic()).count();
        letters > 1 && self.raw.chars().all(|c| !c.is_lowercase())
    }
}

/// Split text into lexicon-ready tokens, dropping pure punctuation.
pub(crate) fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .filter_map(|word| {
            let raw = word.trim_matches(|c: char| !c.is_alphanumeric());
            if raw.is_empty() {
                return None;
            }
            let norm = raw
                .chars()
                .filter(|c| *c != '\'' && *c != '\u{2019}')
                .flat_map(char::to_lowercase)
                .collect();
            Some(Token { raw, norm })
        })
        .collect()
}

pub(crate) fn valence(word: &str) -> Option<f64> {
    VALENCE_MAP.get(word).copied()
}

pub(crate) fn booster(word: &str) -> Option<f64> {
    BOOSTER_MAP.get(word).copied()
}

pub(crate) fn is_negation(word: &str) -> bool {
    NEGATION_SET.contains(word)
}
