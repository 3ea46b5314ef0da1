//! Data source adapter: the petitions feed and CSV tables.

mod petitions;
mod presets;
mod tabular;

use std::path::PathBuf;
use std::time::Duration;

use gse_core::AppConfig;
use reqwest::Client;

use crate::error::SentimentError;
use crate::types::FeedbackItem;

pub use presets::{find_preset, presets, Preset};
pub use tabular::{parse_csv, Table};

/// Where a CSV table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabularSource {
    /// Fetched over HTTP(S).
    Url(String),
    /// Bytes the user handed over directly.
    Upload { name: String, bytes: Vec<u8> },
    /// A file on the local filesystem.
    Path(PathBuf),
    /// A bundled example, by [`Preset::id`].
    Preset(String),
}

/// HTTP-backed access to the petitions feed and remote CSV resources.
///
/// One request per call: no caching, retry, or pagination.
pub struct SourceClient {
    client: Client,
    petitions_url: String,
}

impl SourceClient {
    /// Creates a client with the given petitions endpoint, request timeout,
    /// and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        petitions_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SentimentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            petitions_url: petitions_url.to_owned(),
        })
    }

    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, SentimentError> {
        Self::new(
            &config.petitions_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Fetch up to `limit` petitions as [`FeedbackItem`]s.
    ///
    /// The first `limit` records of the feed are considered; any whose
    /// combined text is empty is skipped, so fewer than `limit` items may be
    /// returned.
    ///
    /// # Errors
    ///
    /// - [`SentimentError::InvalidLimit`] if `limit == 0` (no request is made).
    /// - [`SentimentError::Http`] on network failure.
    /// - [`SentimentError::UnexpectedStatus`] on a non-2xx response.
    /// - [`SentimentError::Deserialize`] if the body is not the expected JSON.
    pub async fn fetch_feed(&self, limit: usize) -> Result<Vec<FeedbackItem>, SentimentError> {
        if limit == 0 {
            return Err(SentimentError::InvalidLimit);
        }
        let body = self.get_bytes(&self.petitions_url).await?;
        let items = petitions::parse_feed(&body, &self.petitions_url, limit)?;
        tracing::debug!(
            url = %self.petitions_url,
            limit,
            count = items.len(),
            "fetched petitions feed"
        );
        Ok(items)
    }

    /// Load a CSV table from any [`TabularSource`].
    ///
    /// # Errors
    ///
    /// - Fetch errors ([`SentimentError::Http`], [`SentimentError::UnexpectedStatus`])
    ///   for URL sources.
    /// - [`SentimentError::Io`] if a local file cannot be read.
    /// - [`SentimentError::UnknownPreset`] for an unregistered preset id.
    /// - [`SentimentError::Csv`] / [`SentimentError::MalformedCsv`] if the
    ///   content is not a well-formed table.
    pub async fn load_tabular(&self, source: &TabularSource) -> Result<Table, SentimentError> {
        let table = match source {
            TabularSource::Url(url) => parse_csv(&self.get_bytes(url).await?)?,
            TabularSource::Upload { name, bytes } => {
                tracing::debug!(name = %name, bytes = bytes.len(), "parsing uploaded CSV");
                parse_csv(bytes)?
            }
            TabularSource::Path(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|source| SentimentError::Io {
                        path: path.display().to_string(),
                        source,
                    })?;
                parse_csv(&bytes)?
            }
            TabularSource::Preset(id) => {
                let preset =
                    find_preset(id).ok_or_else(|| SentimentError::UnknownPreset(id.clone()))?;
                parse_csv(preset.csv.as_bytes())?
            }
        };
        tracing::debug!(
            columns = table.headers().len(),
            rows = table.row_count(),
            "loaded CSV table"
        );
        Ok(table)
    }

    /// GET `url`, requiring a 2xx status, and return the body.
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, SentimentError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SentimentError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}
