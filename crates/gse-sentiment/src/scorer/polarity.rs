//! Earlier-generation scorer: mean word polarity.

use super::lexicon::{booster, is_negation, tokenize, valence};
use super::SentimentScorer;
use crate::label::LabelPolicy;

/// Polarity of a negated word relative to its plain polarity.
const NEGATION_FACTOR: f64 = -0.5;

/// Tokens after a negation word within which it still applies.
const NEGATION_WINDOW: usize = 3;

/// Averages the polarity of every sentiment word in the text.
///
/// Each lexicon valence is rescaled from `[-4, 4]` to `[-1, 1]`. A booster
/// multiplies the next sentiment word by `1 ± 0.293`; a negation within the
/// preceding three tokens multiplies it by `-0.5`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolarityScorer;

impl PolarityScorer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for PolarityScorer {
    fn name(&self) -> &'static str {
        "polarity"
    }

    fn raw_score(&self, text: &str) -> f64 {
        let mut polarities = Vec::new();
        let mut modifier = 1.0_f64;
        let mut since_negation: Option<usize> = None;

        for token in tokenize(text) {
            let word = token.norm.as_str();

            if is_negation(word) {
                since_negation = Some(0);
                continue;
            }
            if let Some(increment) = booster(word) {
                modifier = 1.0 + increment;
                continue;
            }

            if let Some(v) = valence(word) {
                let mut polarity = (v / 4.0) * modifier;
                if since_negation.is_some() {
                    polarity *= NEGATION_FACTOR;
                }
                polarities.push(polarity.clamp(-1.0, 1.0));
                modifier = 1.0;
                since_negation = None;
                continue;
            }

            since_negation = since_negation
                .map(|n| n + 1)
                .filter(|n| *n < NEGATION_WINDOW);
        }

        if polarities.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let denom = polarities.len() as f64;
        (polarities.iter().sum::<f64>() / denom).clamp(-1.0, 1.0)
    }

    fn label_policy(&self) -> LabelPolicy {
        LabelPolicy::StrictSign
    }
}
