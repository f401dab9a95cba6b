//! Engine configuration read from the process environment.
//!
//! Runs after the `.env` step so the file can provide defaults. Nothing here
//! is required: an unset variable falls back to its default.

use anyhow::{Context, Result};
use std::str::FromStr;

use crate::types::EngineError;

/// Selects the log output format (`pretty` or `json`).
pub const LOG_FORMAT_ENV: &str = "STRATEGY_ENGINE_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset. Keeps an unconfigured run quiet.
pub const DEFAULT_LOG_FILTER: &str = "strategy_engine=warn";

/// Output format of the `tracing` subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(EngineError::Config(format!("unknown log format '{other}'"))),
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub log_format: LogFormat,
}

impl EngineConfig {
    /// Build the configuration from the live process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup(LOG_FORMAT_ENV) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .with_context(|| format!("Invalid value for {LOG_FORMAT_ENV}"))?,
            None => LogFormat::default(),
        };

        Ok(EngineConfig { log_format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = EngineConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" JSON ".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("Pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    }

    #[test]
    fn test_json_from_lookup() {
        let cfg = EngineConfig::from_lookup(lookup_from(&[(LOG_FORMAT_ENV, "json")])).unwrap();
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = EngineConfig::from_lookup(lookup_from(&[(LOG_FORMAT_ENV, "xml")])).unwrap_err();
        assert!(format!("{err}").contains(LOG_FORMAT_ENV));

        let root = err.downcast_ref::<EngineError>().expect("EngineError at root");
        assert!(matches!(root, EngineError::Config(msg) if msg.contains("xml")));
    }
}
