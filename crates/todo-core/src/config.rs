//! App Configuration
//!
//! Deserialized from an optional JSON override; every field has a default.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::domain::DomainResult;

pub const DEFAULT_STORAGE_KEY: &str = "todos-leptos";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Key of the JSON document in local storage
    pub storage_key: String,
    /// `log` level name: off, error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(r#"{"logLevel":"debug"}"#).unwrap();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.level_filter(), LevelFilter::Debug);

        let config = AppConfig::from_json(r#"{"storageKey":"todos-work"}"#).unwrap();
        assert_eq!(config.storage_key, "todos-work");
    }

    #[test]
    fn test_bad_level_and_malformed_json() {
        let config = AppConfig::from_json(r#"{"logLevel":"loud"}"#).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Info);

        assert!(AppConfig::from_json("{").is_err());
    }
}
