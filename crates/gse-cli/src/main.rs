mod dataset;
mod petitions;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use gse_core::ScorerKind;
use tracing_subscriber::EnvFilter;

/// Upper bound for `--limit`, matching the feed's page size.
const MAX_LIMIT: usize = 100;

#[derive(Debug, Parser)]
#[command(name = "gse")]
#[command(about = "Sentiment explorer for UK petitions and CSV datasets")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch petitions from the UK Parliament API and analyse their sentiment
    Petitions {
        /// Number of petitions to analyse (1-100; defaults to `GSE_DEFAULT_LIMIT`)
        #[arg(long, value_parser = parse_limit)]
        limit: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Analyse a text column of a CSV dataset
    Csv {
        #[command(flatten)]
        source: SourceArgs,

        /// Column holding the text to analyse (defaults to the preset's column)
        #[arg(long)]
        column: Option<String>,

        /// Print the first five rows before analysing
        #[arg(long)]
        preview: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the bundled example datasets
    Presets,
}

/// Exactly one CSV source.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// Load the CSV from a URL
    #[arg(long)]
    url: Option<String>,

    /// Load the CSV from a local file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Use a bundled example dataset (see `gse presets`)
    #[arg(long)]
    preset: Option<String>,
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Scorer generation (defaults to `GSE_SCORER`)
    #[arg(long)]
    scorer: Option<ScorerKind>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn parse_limit(raw: &str) -> Result<usize, String> {
    let limit: usize = raw
        .parse()
        .map_err(|e| format!("'{raw}' is not a number: {e}"))?;
    if (1..=MAX_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(format!("limit must be between 1 and {MAX_LIMIT}"))
    }
}

/// Render an error and its causes on one line.
fn error_line(err: &anyhow::Error) -> String {
    format!("error: {err:#}")
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_line(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = gse_core::load_app_config().context("invalid configuration")?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, scorer = %config.scorer, "configuration loaded");

    match cli.command {
        Some(Commands::Petitions { limit, output }) => {
            petitions::run_petitions(&config, limit, &output).await
        }
        Some(Commands::Csv {
            source,
            column,
            preview,
            output,
        }) => dataset::run_csv(&config, &source, column.as_deref(), preview, &output).await,
        Some(Commands::Presets) => {
            dataset::print_presets();
            Ok(())
        }
        None => {
            render::print_overview();
            Ok(())
        }
    }
}
