//! # hd-config
//!
//! Layered configuration loading for HappyData using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HAPPYDATA_*` prefix, `__` as separator)
//! 2. Project-level `.happydata/config.toml`
//! 3. User-level `~/.config/happydata/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HAPPYDATA_API__BASE_URL` -> `api.base_url`,
//! `HAPPYDATA_GENERAL__DEFAULT_REGION` -> `general.default_region`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use hd_config::HappyConfig;
//!
//! let config = HappyConfig::load_with_dotenv().expect("config");
//! println!("API root: {}", config.api.base_url);
//! ```

mod api;
mod dataset;
mod error;
mod general;

pub use api::ApiConfig;
pub use dataset::DatasetConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "HAPPYDATA_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HappyConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
}

impl HappyConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// [`Self::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_from(Self::global_config_path().as_deref(), Path::new(".happydata/config.toml"))
    }

    fn figment_from(global_path: Option<&Path>, local_path: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("happydata").join("config.toml"))
    }

    /// Reject values the client cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &str, reason: &str| {
            Err(ConfigError::InvalidValue {
                field: field.to_string(),
                reason: reason.to_string(),
            })
        };

        if self.api.base_url.trim().is_empty() {
            return invalid("api.base_url", "must not be empty");
        }
        if self.api.chunk_size == 0 {
            return invalid("api.chunk_size", "must be at least 1");
        }
        for (field, size) in [
            ("api.directory_page_size", self.api.directory_page_size),
            ("api.series_page_size", self.api.series_page_size),
            ("api.snapshot_page_size", self.api.snapshot_page_size),
        ] {
            if size == 0 {
                return invalid(field, "must be at least 1");
            }
        }

        if self.general.series_start > self.general.series_end {
            return invalid("general.series_start", "must not be after general.series_end");
        }
        Ok(())
    }
}
