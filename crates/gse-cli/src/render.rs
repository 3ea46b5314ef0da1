//! Plain-text output for analyses.

use gse_sentiment::{AggregateResult, PetitionAnalysis, SentimentLabel, Table, TextAnalysis};

/// Longest text shown per CSV sample row.
const SAMPLE_TEXT_CHARS: usize = 200;
/// Most rows listed in a CSV sample.
const SAMPLE_ROWS: usize = 100;
const TITLE_CHARS: usize = 50;
const SUMMARY_CHARS: usize = 70;
const PREVIEW_CELL_CHARS: usize = 30;

pub(crate) fn print_overview() {
    println!("Government Data Sentiment Explorer");
    println!();
    println!("Analyse sentiment in text from the UK Parliament petitions API or any CSV");
    println!("dataset, such as one published on data.gov.uk. Each item is scored with a");
    println!("lexicon scorer and the report shows the overall sentiment, the average");
    println!("score, and a sample of analysed items.");
    println!();
    println!("  gse petitions --limit 50        analyse the latest petitions");
    println!("  gse csv --url <URL> --column C  analyse a column of a CSV file");
    println!("  gse presets                     list bundled example datasets");
}

/// One-line verdict for an aggregate label.
pub(crate) fn overall_sentence(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "Overall sentiment is slightly positive.",
        SentimentLabel::Negative => "Overall sentiment is slightly negative.",
        SentimentLabel::Neutral => "Overall sentiment is neutral.",
    }
}

/// Three-decimal score, never printed as `-0.000`.
pub(crate) fn format_score(score: f64) -> String {
    let rounded = (score * 1000.0).round() / 1000.0;
    // -0.0 + 0.0 == +0.0
    format!("{:.3}", rounded + 0.0)
}

/// Cut `text` to `max_chars` characters, marking the cut with `…`.
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

/// Collapse newlines and runs of whitespace so a cell fits on one line.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Verdict and average lines, preceded by a warning when nothing was scored.
pub(crate) fn summary_lines(aggregate: &AggregateResult, scorer: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);
    if aggregate.item_count == 0 {
        lines.push("No text found.".to_string());
    }
    lines.push(overall_sentence(aggregate.label).to_string());
    lines.push(format!(
        "Average sentiment score: {} ({} scorer, {} items: {} positive, {} negative, {} neutral)",
        format_score(aggregate.average_score),
        scorer,
        aggregate.item_count,
        aggregate.positive_count,
        aggregate.negative_count,
        aggregate.neutral_count
    ));
    lines
}

fn print_summary(aggregate: &AggregateResult, scorer: &str) {
    for line in summary_lines(aggregate, scorer) {
        println!("{line}");
    }
}

pub(crate) fn print_petitions(analysis: &PetitionAnalysis) {
    print_summary(&analysis.aggregate, analysis.scorer);
    if analysis.petitions.is_empty() {
        return;
    }
    println!();
    println!("{:<52}{:<72}{:<9}LABEL", "TITLE", "SUMMARY", "SCORE");
    for petition in &analysis.petitions {
        println!(
            "{:<52}{:<72}{:<9}{}",
            truncate(&single_line(&petition.title), TITLE_CHARS),
            truncate(&single_line(&petition.summary), SUMMARY_CHARS),
            format_score(petition.score),
            petition.label
        );
    }
}

pub(crate) fn print_text_analysis(analysis: &TextAnalysis) {
    print_summary(&analysis.aggregate, analysis.scorer);
    if analysis.items.is_empty() {
        return;
    }
    println!();
    println!("{:<9}{:<10}TEXT", "SCORE", "LABEL");
    for item in analysis.items.iter().take(SAMPLE_ROWS) {
        println!(
            "{:<9}{:<10}{}",
            format_score(item.score),
            item.label.as_str(),
            truncate(&single_line(&item.text), SAMPLE_TEXT_CHARS)
        );
    }
    if analysis.items.len() > SAMPLE_ROWS {
        println!("… {} more rows not shown", analysis.items.len() - SAMPLE_ROWS);
    }
}

pub(crate) fn print_preview(table: &Table) {
    println!("Preview:");
    let line = |cells: Vec<String>| {
        cells
            .iter()
            .map(|c| format!("{c:<32}"))
            .collect::<String>()
            .trim_end()
            .to_string()
    };
    println!(
        "{}",
        line(
            table
                .headers()
                .iter()
                .map(|h| truncate(h, PREVIEW_CELL_CHARS))
                .collect()
        )
    );
    for row in table.rows() {
        println!(
            "{}",
            line(
                row.iter()
                    .map(|cell| match cell {
                        Some(c) => truncate(&single_line(c), PREVIEW_CELL_CHARS),
                        None => "-".to_string(),
                    })
                    .collect()
            )
        );
    }
    println!();
}
