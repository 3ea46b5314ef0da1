//! Later-generation scorer: rule-adjusted valence sum, normalised.

use super::lexicon::{booster, is_negation, tokenize, valence, Token};
use super::SentimentScorer;
use crate::label::{LabelPolicy, COMPOUND_THRESHOLD};

/// Emphasis added to a shouted sentiment word in mixed-case text.
const CAPS_INCREMENT: f64 = 0.733;
/// Multiplier for a sentiment word preceded by a negation.
const NEGATION_SCALAR: f64 = -0.74;
/// Per-`!` emphasis, applied to at most [`MAX_EXCLAMATIONS`].
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
/// Normalisation constant approximating the max expected valence sum.
const NORMALIZATION_ALPHA: f64 = 15.0;
/// Damping for boosters one, two, and three tokens before the word.
const BOOSTER_DISTANCE_DAMPING: [f64; 3] = [1.0, 0.95, 0.9];

/// Sums lexicon valences after applying local rules, then squashes the sum
/// into `[-1, 1]` with `s / sqrt(s² + 15)`.
///
/// Rules, in application order:
/// - shouted words gain `0.733` emphasis when the text is mixed-case;
/// - boosters/dampeners up to three tokens back add `±0.293` (damped by distance);
/// - a negation up to three tokens back multiplies the valence by `-0.74`;
/// - the clause before `but` is halved and the clause after it is scaled by 1.5;
/// - up to four `!` add `0.292` each in the direction of the sum.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompoundScorer;

impl CompoundScorer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for CompoundScorer {
    fn name(&self) -> &'static str {
        "compound"
    }

    fn raw_score(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }
        let mixed_case = is_mixed_case(&tokens);

        let mut valences: Vec<f64> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| word_valence(&tokens, i, token, mixed_case))
            .collect();

        if let Some(pivot) = tokens.iter().position(|t| t.norm == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                if i < pivot {
                    *v *= 0.5;
                } else if i > pivot {
                    *v *= 1.5;
                }
            }
        }

        let mut sum: f64 = valences.iter().sum();
        let emphasis = punctuation_emphasis(text);
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }

        normalize(sum)
    }

    fn label_policy(&self) -> LabelPolicy {
        LabelPolicy::DeadZone {
            threshold: COMPOUND_THRESHOLD,
        }
    }
}

fn word_valence(tokens: &[Token<'_>], i: usize, token: &Token<'_>, mixed_case: bool) -> f64 {
    if booster(&token.norm).is_some() {
        return 0.0;
    }
    let Some(mut v) = valence(&token.norm) else {
        return 0.0;
    };

    if mixed_case && token.is_shouted() {
        v += CAPS_INCREMENT.copysign(v);
    }

    for (back, damping) in (1..=3).zip(BOOSTER_DISTANCE_DAMPING) {
        let Some(prev) = i.checked_sub(back).map(|j| &tokens[j]) else {
            break;
        };
        if let Some(increment) = booster(&prev.norm) {
            let mut scalar = if v < 0.0 { -increment } else { increment };
            if mixed_case && prev.is_shouted() {
                scalar += CAPS_INCREMENT.copysign(v);
            }
            v += scalar * damping;
        }
    }

    let negated = (1..=3)
        .filter_map(|back| i.checked_sub(back))
        .any(|j| is_negation(&tokens[j].norm));
    if negated {
        v *= NEGATION_SCALAR;
    }

    v
}

/// `true` if some but not all alphabetic tokens are shouted.
fn is_mixed_case(tokens: &[Token<'_>]) -> bool {
    let wordy: Vec<&Token<'_>> = tokens
        .iter()
        .filter(|t| t.raw.chars().any(char::is_alphabetic))
        .collect();
    let shouted = wordy.iter().filter(|t| t.is_shouted()).count();
    shouted > 0 && shouted < wordy.len()
}

#[allow(clippy::cast_precision_loss)]
fn punctuation_emphasis(text: &str) -> f64 {
    let bangs = text.matches('!').count().min(MAX_EXCLAMATIONS);
    bangs as f64 * EXCLAMATION_INCREMENT
}

fn normalize(sum: f64) -> f64 {
    if sum == 0.0 {
        return 0.0;
    }
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}
