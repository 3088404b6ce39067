//! Configuration management for lostfound.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::query::TypeFilter;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "lostfound";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `LOSTFOUND_`)
/// 2. TOML config file at `~/.config/lostfound/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Registry configuration.
    pub registry: RegistryConfig,
    /// Search configuration.
    pub search: SearchConfig,
}

/// How a fresh registry is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Register the built-in sample records at startup.
    pub seed_sample_data: bool,
    /// JSON seed file registered after the samples.
    pub seed_file: Option<PathBuf>,
}

/// Search defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Type filter used when none is given: `all`, `lost` or `found`.
    pub default_type: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            seed_file: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_type: "all".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("LOSTFOUND_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.default_type_filter() == TypeFilter::Unmatched {
            return Err(Error::ConfigValidation {
                message: format!(
                    "search.default_type must be one of all, lost, found (got {:?})",
                    self.search.default_type
                ),
            });
        }
        Ok(())
    }

    /// The configured default type filter.
    #[must_use]
    pub fn default_type_filter(&self) -> TypeFilter {
        TypeFilter::from_param(&self.search.default_type)
    }
}
