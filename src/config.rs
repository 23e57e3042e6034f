//! Engine configuration
//!
//! Loaded from an optional `gst-engine.toml` (or an explicit file), overridden
//! by `GST_ENGINE__*` environment variables.

use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::GstResult;

const DEFAULT_CONFIG_FILE: &str = "gst-engine";
const ENV_PREFIX: &str = "GST_ENGINE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Round the grand total to whole rupees and report the difference as round-off
    #[serde(default = "default_round_off")]
    pub round_off: bool,
    /// Log filter used by the CLI when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_round_off() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            round_off: default_round_off(),
            log_level: default_log_level(),
        }
    }
}

impl EngineConfig {
    /// Load from `path` (required when given) or the optional default file,
    /// then apply environment overrides
    pub fn load(path: Option<&Path>) -> GstResult<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parse a TOML document, without environment overrides
    pub fn from_toml_str(toml: &str) -> GstResult<Self> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!(config.round_off);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_toml_fills_missing_fields() {
        let config = EngineConfig::from_toml_str("round_off = false").unwrap();
        assert!(!config.round_off);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_toml_rejects_wrong_types() {
        assert!(EngineConfig::from_toml_str("round_off = [1, 2]").is_err());
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let result = EngineConfig::load(Some(Path::new("/nonexistent/gst-engine.toml")));
        assert!(result.is_err());
    }
}
