use std::fmt;

use serde::Serialize;

/// One unit of text extracted from a petitions record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackItem {
    /// Petition `action` (its headline).
    pub title: String,
    /// Petition `background`.
    pub summary: String,
    /// `"{title}. {summary}"`, trimmed.
    pub text: String,
}

impl FeedbackItem {
    #[must_use]
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        let title = title.into();
        let summary = summary.into();
        let text = format!("{title}. {summary}").trim().to_string();
        Self {
            title,
            summary,
            text,
        }
    }

    /// `true` if the combined text is empty after trimming.
    ///
    /// A record with neither title nor summary still combines to `"."` and
    /// is kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Coarse sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A text with its score in `[-1.0, 1.0]` and derived label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem {
    pub text: String,
    pub score: f64,
    pub label: SentimentLabel,
}

/// Summary over a batch of scored items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    /// Arithmetic mean of item scores. `0.0` if there are no items.
    pub average_score: f64,
    pub label: SentimentLabel,
    pub item_count: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
}

/// A petition paired with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPetition {
    pub title: String,
    pub summary: String,
    pub score: f64,
    pub label: SentimentLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetitionAnalysis {
    pub scorer: &'static str,
    pub petitions: Vec<ScoredPetition>,
    pub aggregate: AggregateResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnalysis {
    pub scorer: &'static str,
    pub items: Vec<ScoredItem>,
    pub aggregate: AggregateResult,
}
