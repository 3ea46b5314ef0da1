//! Batch aggregation of scored items.

use crate::label::{label_for, LabelPolicy};
use crate::types::{AggregateResult, ScoredItem, SentimentLabel};

/// Mean score across `items`, labelled under `policy`.
///
/// An empty slice is not an error: it yields `average_score == 0.0` and the
/// label `policy` assigns to zero (neutral for every policy).
#[must_use]
pub fn aggregate(items: &[ScoredItem], policy: LabelPolicy) -> AggregateResult {
    let average_score = if items.is_empty() {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let denom = items.len() as f64;
        let sum: f64 = items.iter().map(|i| i.score).sum();
        sum / denom
    };

    let count = |label: SentimentLabel| items.iter().filter(|i| i.label == label).count();

    AggregateResult {
        average_score,
        label: label_for(average_score, policy),
        item_count: items.len(),
        positive_count: count(SentimentLabel::Positive),
        negative_count: count(SentimentLabel::Negative),
        neutral_count: count(SentimentLabel::Neutral),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(score: f64, label: SentimentLabel) -> ScoredItem {
        ScoredItem {
            text: String::new(),
            score,
            label,
        }
    }

    const DEAD_ZONE: LabelPolicy = LabelPolicy::DeadZone { threshold: 0.05 };

    #[test]
    fn empty_input_is_neutral_zero() {
        for policy in [DEAD_ZONE, LabelPolicy::StrictSign] {
            let result = aggregate(&[], policy);
            assert_eq!(result.average_score, 0.0);
            assert_eq!(result.label, SentimentLabel::Neutral);
            assert_eq!(result.item_count, 0);
            assert_eq!(result.positive_count + result.negative_count, 0);
        }
    }

    #[test]
    fn average_is_arithmetic_mean() {
        let items = [
            item(0.6, SentimentLabel::Positive),
            item(-0.3, SentimentLabel::Negative),
            item(0.0, SentimentLabel::Neutral),
            item(0.1, SentimentLabel::Positive),
        ];
        let result = aggregate(&items, DEAD_ZONE);
        assert!((result.average_score - 0.1).abs() < 1e-12);
        assert_eq!(result.item_count, 4);
        assert_eq!(result.positive_count, 2);
        assert_eq!(result.negative_count, 1);
        assert_eq!(result.neutral_count, 1);
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn overall_label_follows_policy() {
        let items = [item(0.02, SentimentLabel::Positive)];
        assert_eq!(aggregate(&items, DEAD_ZONE).label, SentimentLabel::Neutral);
        assert_eq!(
            aggregate(&items, LabelPolicy::StrictSign).label,
            SentimentLabel::Positive
        );
    }

    #[test]
    fn balanced_scores_average_to_neutral() {
        let items = [
            item(0.5, SentimentLabel::Positive),
            item(-0.5, SentimentLabel::Negative),
        ];
        let result = aggregate(&items, LabelPolicy::StrictSign);
        assert_eq!(result.average_score, 0.0);
        assert_eq!(result.label, SentimentLabel::Neutral);
    }
}
