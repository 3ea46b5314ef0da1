use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The tabular source as a whole is not valid CSV.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// Structurally invalid table (no header, or a row wider than the header).
    #[error("malformed CSV: {0}")]
    MalformedCsv(String),

    #[error("column '{column}' not found (available: {})", available.join(", "))]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("limit must be greater than zero")]
    InvalidLimit,

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SentimentError {
    /// `true` for failures retrieving a remote resource (network, status, or body).
    #[must_use]
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::UnexpectedStatus { .. } | Self::Deserialize { .. }
        )
    }

    /// `true` when a tabular source could be read but not parsed.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Csv(_) | Self::MalformedCsv(_))
    }
}
