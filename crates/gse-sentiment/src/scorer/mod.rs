//! Sentiment scorers.
//!
//! Two scorer generations share one lexicon but differ in how they combine
//! word valences and in how scores become labels:
//!
//! | scorer | range | label policy |
//! |--------|-------|--------------|
//! | [`PolarityScorer`] | `[-1, 1]` mean polarity | strict sign |
//! | [`CompoundScorer`] | `[-1, 1]` normalised sum | `±0.05` dead zone |

mod compound;
mod lexicon;
mod polarity;

pub use compound::CompoundScorer;
pub use polarity::PolarityScorer;

use gse_core::ScorerKind;

use crate::label::{label_for, LabelPolicy};
use crate::types::ScoredItem;

/// A deterministic text → score function with its own label policy.
pub trait SentimentScorer: Send + Sync {
    /// Short identifier used in logs and output.
    fn name(&self) -> &'static str;

    /// Score `text`. Always finite and within `[-1.0, 1.0]`; `0.0` for text
    /// with no sentiment-bearing words.
    fn raw_score(&self, text: &str) -> f64;

    fn label_policy(&self) -> LabelPolicy;

    /// Score `text` and attach the label under this scorer's policy.
    fn score(&self, text: &str) -> ScoredItem {
        let score = self.raw_score(text);
        ScoredItem {
            text: text.to_string(),
            score,
            label: label_for(score, self.label_policy()),
        }
    }
}

/// Construct the scorer for a configured generation.
#[must_use]
pub fn build_scorer(kind: ScorerKind) -> Box<dyn SentimentScorer> {
    match kind {
        ScorerKind::Polarity => Box::new(PolarityScorer::new()),
        ScorerKind::Compound => Box::new(CompoundScorer::new()),
    }
}
