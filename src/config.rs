//! Process configuration read from the environment

use crate::llm::{OpenRouterConfig, DEFAULT_MODEL, DEFAULT_OPENROUTER_URL};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_REFERER: &str = "https://techno-track-name.vercel.app";
pub const DEFAULT_TITLE: &str = "Techno Track Name Generator";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("OPENROUTER_API_KEY is not set")]
    MissingApiKey,

    #[error("{var} has invalid value {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub openrouter: OpenRouterConfig,
}

impl Config {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("OPENROUTER_API_KEY").ok_or(ConfigError::MissingApiKey)?;

        let port = match get("TRACK_NAMER_PORT") {
            Some(value) => parse_var("TRACK_NAMER_PORT", value)?,
            None => DEFAULT_PORT,
        };

        let timeout_secs: u64 = match get("TRACK_NAMER_TIMEOUT_SECS") {
            Some(value) => parse_var("TRACK_NAMER_TIMEOUT_SECS", value)?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                var: "TRACK_NAMER_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            port,
            openrouter: OpenRouterConfig {
                api_key,
                url: get("OPENROUTER_URL").unwrap_or_else(|| DEFAULT_OPENROUTER_URL.to_string()),
                model: get("TRACK_NAMER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                referer: Some(get("TRACK_NAMER_REFERER").unwrap_or_else(|| DEFAULT_REFERER.to_string())),
                title: Some(get("TRACK_NAMER_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string())),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }

    /// Timeout applied to each generation
    pub fn generation_timeout(&self) -> Duration {
        self.openrouter.timeout
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { var, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("OPENROUTER_API_KEY", "sk-test")])).unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.openrouter.api_key, "sk-test");
        assert_eq!(config.openrouter.url, DEFAULT_OPENROUTER_URL);
        assert_eq!(config.openrouter.model, "google/gemma-3-4b-it:free");
        assert_eq!(config.openrouter.referer.as_deref(), Some(DEFAULT_REFERER));
        assert_eq!(config.openrouter.title.as_deref(), Some(DEFAULT_TITLE));
        assert_eq!(config.generation_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("OPENROUTER_API_KEY", "sk-test"),
            ("OPENROUTER_URL", "http://localhost:9999/v1/chat/completions"),
            ("TRACK_NAMER_MODEL", "mistral/small"),
            ("TRACK_NAMER_PORT", "9090"),
            ("TRACK_NAMER_TIMEOUT_SECS", "5"),
            ("TRACK_NAMER_TITLE", "Namer"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.openrouter.url, "http://localhost:9999/v1/chat/completions");
        assert_eq!(config.openrouter.model, "mistral/small");
        assert_eq!(config.openrouter.title.as_deref(), Some("Namer"));
        assert_eq!(config.generation_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_missing_or_blank_key() {
        assert_eq!(
            Config::from_lookup(lookup_from(&[])).unwrap_err(),
            ConfigError::MissingApiKey
        );
        assert_eq!(
            Config::from_lookup(lookup_from(&[("OPENROUTER_API_KEY", "  ")])).unwrap_err(),
            ConfigError::MissingApiKey
        );
    }

    #[test]
    fn test_invalid_numbers() {
        let err = Config::from_lookup(lookup_from(&[
            ("OPENROUTER_API_KEY", "sk-test"),
            ("TRACK_NAMER_PORT", "eighty"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: "TRACK_NAMER_PORT",
                value: "eighty".to_string()
            }
        );

        let err = Config::from_lookup(lookup_from(&[
            ("OPENROUTER_API_KEY", "sk-test"),
            ("TRACK_NAMER_TIMEOUT_SECS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "TRACK_NAMER_TIMEOUT_SECS", .. }));
    }
}
