use std::time::Duration;

use anyhow::{anyhow, ensure, Context, Result};

use crate::llm_client::DEFAULT_BASE_URL;
use crate::reading::validation::ValidationMode;

/// Application configuration loaded from environment variables.
///
/// Nothing is required: without `OPENAI_API_KEY` the app runs offline and
/// serves fallback readings.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub generation_timeout: Duration,
    pub generation_max_attempts: u32,
    pub reading_validation: ValidationMode,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let timeout_secs = var_or("GENERATION_TIMEOUT_SECS", "30")
            .parse::<u64>()
            .context("GENERATION_TIMEOUT_SECS must be a whole number of seconds")?;
        ensure!(timeout_secs > 0, "GENERATION_TIMEOUT_SECS must be at least 1 second");

        let max_attempts = var_or("GENERATION_MAX_ATTEMPTS", "1")
            .parse::<u32>()
            .context("GENERATION_MAX_ATTEMPTS must be a positive integer")?;
        ensure!(max_attempts > 0, "GENERATION_MAX_ATTEMPTS must be a positive integer");

        Ok(Config {
            openai_api_key: lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()),
            openai_base_url: var_or("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            generation_timeout: Duration::from_secs(timeout_secs),
            generation_max_attempts: max_attempts,
            reading_validation: var_or("READING_VALIDATION", "shallow")
                .parse::<ValidationMode>()
                .map_err(|e| anyhow!(e))
                .context("READING_VALIDATION is invalid")?,
            port: var_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var_or("RUST_LOG", "info"),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = config_from(&[]).unwrap();
        assert!(config.openai_api_key.is_none());
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.generation_timeout, Duration::from_secs(30));
        assert_eq!(config.generation_max_attempts, 1);
        assert_eq!(config.reading_validation, ValidationMode::Shallow);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("GENERATION_TIMEOUT_SECS", "5"),
            ("READING_VALIDATION", "strict"),
            ("PORT", "3000"),
        ])
        .unwrap();
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.generation_timeout, Duration::from_secs(5));
        assert_eq!(config.reading_validation, ValidationMode::Strict);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = config_from(&[("OPENAI_API_KEY", "  ")]).unwrap();
        assert!(config.openai_api_key.is_none());
    }

    #[test]
    fn test_invalid_values_fail_with_context() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT must be a valid port number"));

        let err = config_from(&[("READING_VALIDATION", "lenient")]).unwrap_err();
        assert!(err.to_string().contains("READING_VALIDATION is invalid"));
    }

    #[test]
    fn test_zero_timeout_and_attempts_are_rejected() {
        let err = config_from(&[("GENERATION_TIMEOUT_SECS", "0")]).unwrap_err();
        assert!(err.to_string().contains("GENERATION_TIMEOUT_SECS must be at least 1 second"));

        let err = config_from(&[("GENERATION_MAX_ATTEMPTS", "0")]).unwrap_err();
        assert!(err.to_string().contains("GENERATION_MAX_ATTEMPTS must be a positive integer"));

        let config = config_from(&[("GENERATION_TIMEOUT_SECS", "1")]).unwrap();
        assert_eq!(config.generation_timeout, Duration::from_secs(1));
    }
}
