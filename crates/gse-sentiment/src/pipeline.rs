//! Score → aggregate orchestration.

use crate::aggregate::aggregate;
use crate::error::SentimentError;
use crate::scorer::SentimentScorer;
use crate::sources::{SourceClient, Table, TabularSource};
use crate::types::{FeedbackItem, PetitionAnalysis, ScoredPetition, TextAnalysis};

/// Score every text and aggregate the batch.
///
/// Empty input produces a neutral `0.0` aggregate.
pub fn analyse_texts<I, S>(scorer: &dyn SentimentScorer, texts: I) -> TextAnalysis
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items: Vec<_> = texts
        .into_iter()
        .map(|t| scorer.score(t.as_ref()))
        .collect();
    let aggregate = aggregate(&items, scorer.label_policy());

    TextAnalysis {
        scorer: scorer.name(),
        items,
        aggregate,
    }
}

/// Score petitions, keeping their title and summary alongside the score.
pub fn analyse_petitions(
    scorer: &dyn SentimentScorer,
    petitions: &[FeedbackItem],
) -> PetitionAnalysis {
    let analysis = analyse_texts(scorer, petitions.iter().map(|p| p.text.as_str()));

    let petitions = petitions
        .iter()
        .zip(&analysis.items)
        .map(|(petition, scored)| ScoredPetition {
            title: petition.title.clone(),
            summary: petition.summary.clone(),
            score: scored.score,
            label: scored.label,
        })
        .collect();

    PetitionAnalysis {
        scorer: analysis.scorer,
        petitions,
        aggregate: analysis.aggregate,
    }
}

/// Pull `column` out of an already loaded table and analyse its values.
///
/// # Errors
///
/// Returns [`SentimentError::ColumnNotFound`] if the table has no such column.
pub fn analyse_table(
    scorer: &dyn SentimentScorer,
    table: &Table,
    column: &str,
) -> Result<TextAnalysis, SentimentError> {
    let texts = table.extract_column(column)?;
    let analysis = analyse_texts(scorer, &texts);
    tracing::info!(
        scorer = analysis.scorer,
        column,
        rows = table.row_count(),
        items = analysis.aggregate.item_count,
        average = analysis.aggregate.average_score,
        label = %analysis.aggregate.label,
        "CSV column analysed"
    );
    Ok(analysis)
}

impl SourceClient {
    /// Fetch up to `limit` petitions and analyse them.
    ///
    /// # Errors
    ///
    /// Propagates [`SourceClient::fetch_feed`] errors.
    pub async fn analyse_feed(
        &self,
        scorer: &dyn SentimentScorer,
        limit: usize,
    ) -> Result<PetitionAnalysis, SentimentError> {
        let petitions = self.fetch_feed(limit).await?;
        let analysis = analyse_petitions(scorer, &petitions);
        tracing::info!(
            scorer = analysis.scorer,
            items = analysis.aggregate.item_count,
            average = analysis.aggregate.average_score,
            label = %analysis.aggregate.label,
            "petitions analysed"
        );
        Ok(analysis)
    }

    /// Load a CSV source, pull `column`, and analyse its values.
    ///
    /// # Errors
    ///
    /// Propagates [`SourceClient::load_tabular`] and [`analyse_table`] errors.
    pub async fn analyse_csv(
        &self,
        scorer: &dyn SentimentScorer,
        source: &TabularSource,
        column: &str,
    ) -> Result<TextAnalysis, SentimentError> {
        let table = self.load_tabular(source).await?;
        analyse_table(scorer, &table, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::{CompoundScorer, PolarityScorer};
    use crate::types::SentimentLabel;

    #[test]
    fn empty_texts_produce_neutral_zero() {
        let analysis = analyse_texts(&CompoundScorer::new(), Vec::<String>::new());
        assert!(analysis.items.is_empty());
        assert_eq!(analysis.aggregate.average_score, 0.0);
        assert_eq!(analysis.aggregate.label, SentimentLabel::Neutral);
    }

    #[test]
    fn average_matches_mean_of_item_scores() {
        let texts = ["great service", "terrible wait times", "it was fine"];
        for scorer in [
            &CompoundScorer::new() as &dyn SentimentScorer,
            &PolarityScorer::new(),
        ] {
            let analysis = analyse_texts(scorer, texts);
            assert_eq!(analysis.items.len(), 3);
            let mean = analysis.items.iter().map(|i| i.score).sum::<f64>() / 3.0;
            assert!((analysis.aggregate.average_score - mean).abs() < 1e-12);
            assert_eq!(analysis.items[0].text, "great service");
        }
    }

    #[test]
    fn petitions_keep_title_and_summary() {
        let petitions = vec![
            FeedbackItem::new("Ban bad things", "This is terrible and awful."),
            FeedbackItem::new("Fund parks", "Parks are wonderful and help everyone."),
        ];
        let analysis = analyse_petitions(&PolarityScorer::new(), &petitions);
        assert_eq!(analysis.scorer, "polarity");
        assert_eq!(analysis.petitions.len(), 2);
        assert_eq!(analysis.petitions[0].title, "Ban bad things");
        assert_eq!(analysis.petitions[0].label, SentimentLabel::Negative);
        assert_eq!(analysis.petitions[1].label, SentimentLabel::Positive);
        assert_eq!(analysis.aggregate.item_count, 2);
    }

    #[test]
    fn table_analysis_skips_null_cells() {
        let table = Table::new(
            vec!["id".to_string(), "comment".to_string()],
            vec![
                vec![Some("1".to_string()), Some("great service".to_string())],
                vec![Some("2".to_string()), None],
                vec![Some("3".to_string()), Some("terrible wait".to_string())],
            ],
        );
        let analysis = analyse_table(&CompoundScorer::new(), &table, "comment").unwrap();
        assert_eq!(analysis.aggregate.item_count, 2);
        assert_eq!(analysis.items[1].text, "terrible wait");
    }

    #[test]
    fn table_analysis_reports_missing_column() {
        let table = Table::new(vec!["id".to_string()], vec![]);
        let err = analyse_table(&CompoundScorer::new(), &table, "comment").unwrap_err();
        assert!(
            matches!(err, SentimentError::ColumnNotFound { ref column, .. } if column == "comment"),
            "got {err:?}"
        );
    }
}
