//! Score → label mapping.
//!
//! Each scorer generation carries one [`LabelPolicy`]; the policy expands to
//! a small threshold table and [`label_for`] walks it. Nothing else in the
//! crate compares scores against thresholds.

use crate::types::SentimentLabel;

/// Threshold used by the compound scorer.
pub const COMPOUND_THRESHOLD: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelPolicy {
    /// `> 0` positive, `< 0` negative, exactly `0` neutral.
    StrictSign,
    /// `>= threshold` positive, `<= -threshold` negative, neutral in between.
    DeadZone { threshold: f64 },
}

/// How a score is compared against a table bound.
#[derive(Debug, Clone, Copy)]
enum Bound {
    AtLeast(f64),
    Above(f64),
    AtMost(f64),
    Below(f64),
}

impl Bound {
    fn matches(self, score: f64) -> bool {
        match self {
            Bound::AtLeast(t) => score >= t,
            Bound::Above(t) => score > t,
            Bound::AtMost(t) => score <= t,
            Bound::Below(t) => score < t,
        }
    }
}

impl LabelPolicy {
    /// Ordered rules; the first match wins, anything unmatched is neutral.
    fn table(self) -> [(Bound, SentimentLabel); 2] {
        match self {
            LabelPolicy::StrictSign => [
                (Bound::Above(0.0), SentimentLabel::Positive),
                (Bound::Below(0.0), SentimentLabel::Negative),
            ],
            LabelPolicy::DeadZone { threshold } => [
                (Bound::AtLeast(threshold), SentimentLabel::Positive),
                (Bound::AtMost(-threshold), SentimentLabel::Negative),
            ],
        }
    }
}

/// Map a score to a label under `policy`.
///
/// Non-finite scores are neutral.
#[must_use]
pub fn label_for(score: f64, policy: LabelPolicy) -> SentimentLabel {
    if !score.is_finite() {
        return SentimentLabel::Neutral;
    }
    policy
        .table()
        .into_iter()
        .find(|(bound, _)| bound.matches(score))
        .map_or(SentimentLabel::Neutral, |(_, label)| label)
}
