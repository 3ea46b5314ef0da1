//! `gse csv` and `gse presets`: analyse a column of a CSV dataset.

use anyhow::Context;
use gse_core::AppConfig;
use gse_sentiment::{
    analyse_table, build_scorer, find_preset, presets, SourceClient, TabularSource,
};

use crate::render;
use crate::{OutputArgs, OutputFormat, SourceArgs};

/// Rows shown by `--preview`.
const PREVIEW_ROWS: usize = 5;

/// Resolve the CLI source flags into a [`TabularSource`] and the column to use.
///
/// An explicit `--column` always wins; otherwise a preset supplies its own.
///
/// # Errors
///
/// Returns an error if no column can be determined or the preset is unknown.
pub(crate) fn resolve_source(
    source: &SourceArgs,
    column: Option<&str>,
) -> anyhow::Result<(TabularSource, String)> {
    if let Some(id) = &source.preset {
        let preset = find_preset(id).ok_or_else(|| {
            let known: Vec<&str> = presets().iter().map(|p| p.id).collect();
            anyhow::anyhow!("unknown preset '{id}' (available: {})", known.join(", "))
        })?;
        let column = column.unwrap_or(preset.column).to_string();
        return Ok((TabularSource::Preset(id.clone()), column));
    }

    let column = column
        .map(ToString::to_string)
        .ok_or_else(|| anyhow::anyhow!("--column is required with --url or --file"))?;

    if let Some(url) = &source.url {
        Ok((TabularSource::Url(url.clone()), column))
    } else if let Some(path) = &source.file {
        Ok((TabularSource::Path(path.clone()), column))
    } else {
        anyhow::bail!("one of --url, --file or --preset is required")
    }
}

/// Load a CSV, optionally preview it, then score the chosen column.
///
/// # Errors
///
/// Returns an error if the source cannot be loaded or parsed, or the column
/// does not exist.
pub(crate) async fn run_csv(
    config: &AppConfig,
    source: &SourceArgs,
    column: Option<&str>,
    preview: bool,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let (source, column) = resolve_source(source, column)?;
    let scorer = build_scorer(output.scorer.unwrap_or(config.scorer));
    let client = SourceClient::from_config(config)?;

    let table = client
        .load_tabular(&source)
        .await
        .context("could not load CSV")?;

    if preview && output.format == OutputFormat::Table {
        render::print_preview(&table.head(PREVIEW_ROWS));
    }

    let analysis =
        analyse_table(scorer.as_ref(), &table, &column).context("error analysing CSV text")?;

    match output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
        OutputFormat::Table => render::print_text_analysis(&analysis),
    }
    Ok(())
}

pub(crate) fn print_presets() {
    println!("{:<26}{:<12}DESCRIPTION", "PRESET", "COLUMN");
    for preset in presets() {
        println!("{:<26}{:<12}{}", preset.id, preset.column, preset.description);
    }
}
