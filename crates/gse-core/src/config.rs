use crate::app_config::{AppConfig, Environment, ScorerKind};
use crate::ConfigError;

pub(crate) const DEFAULT_PETITIONS_URL: &str = "https://petition.parliament.uk/petitions.json";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup is injected so tests can use a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("GSE_ENV", "development"))?;
    let log_level = or_default("GSE_LOG_LEVEL", "info");

    let petitions_url = or_default("GSE_PETITIONS_URL", DEFAULT_PETITIONS_URL);
    if !(petitions_url.starts_with("http://") || petitions_url.starts_with("https://")) {
        return Err(invalid(
            "GSE_PETITIONS_URL",
            format!("'{petitions_url}' is not an http(s) URL"),
        ));
    }

    let request_timeout_secs = or_default("GSE_REQUEST_TIMEOUT_SECS", "10")
        .parse::<u64>()
        .map_err(|e| invalid("GSE_REQUEST_TIMEOUT_SECS", e.to_string()))?;

    let user_agent = or_default("GSE_USER_AGENT", "gse/0.1 (sentiment-explorer)");

    let default_limit = or_default("GSE_DEFAULT_LIMIT", "50")
        .parse::<usize>()
        .map_err(|e| invalid("GSE_DEFAULT_LIMIT", e.to_string()))?;
    if default_limit == 0 {
        return Err(invalid(
            "GSE_DEFAULT_LIMIT",
            "must be greater than zero".to_string(),
        ));
    }

    let scorer = or_default("GSE_SCORER", "compound")
        .parse::<ScorerKind>()
        .map_err(|reason| invalid("GSE_SCORER", reason))?;

    Ok(AppConfig {
        env,
        log_level,
        petitions_url,
        request_timeout_secs,
        user_agent,
        default_limit,
        scorer,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "GSE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
