use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which sentiment scorer generation to run.
///
/// `Polarity` is the earlier word-polarity scorer (strict sign labels);
/// `Compound` is the later rule-based valence scorer (±0.05 dead zone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorerKind {
    Polarity,
    #[default]
    Compound,
}

impl ScorerKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ScorerKind::Polarity => "polarity",
            ScorerKind::Compound => "compound",
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScorerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "polarity" => Ok(ScorerKind::Polarity),
            "compound" => Ok(ScorerKind::Compound),
            other => Err(format!(
                "unknown scorer '{other}' (expected 'compound' or 'polarity')"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub petitions_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub default_limit: usize,
    pub scorer: ScorerKind,
}
