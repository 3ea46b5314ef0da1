//! `gse petitions`: fetch and analyse the petitions feed.

use anyhow::Context;
use gse_core::AppConfig;
use gse_sentiment::{build_scorer, SourceClient};

use crate::render;
use crate::{OutputArgs, OutputFormat};

/// Fetch petitions, score them, and print the results.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the feed cannot
/// be fetched or parsed.
pub(crate) async fn run_petitions(
    config: &AppConfig,
    limit: Option<usize>,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let limit = limit.unwrap_or(config.default_limit);
    let scorer = build_scorer(output.scorer.unwrap_or(config.scorer));
    let client = SourceClient::from_config(config)?;

    tracing::info!(
        limit,
        scorer = scorer.name(),
        url = %config.petitions_url,
        "fetching petitions"
    );
    let analysis = client
        .analyse_feed(scorer.as_ref(), limit)
        .await
        .context("error fetching or analysing petitions API data")?;

    match output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
        OutputFormat::Table => render::print_petitions(&analysis),
    }
    Ok(())
}
