//! # upsell-config
//!
//! Layered configuration loading for upsell discovery using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`UPSELL_*` prefix, `__` as separator)
//! 2. Project-level `.upsell/config.toml`
//! 3. User-level `~/.config/upsell/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `UPSELL_FINDER__CHUNK_SIZE` -> `finder.chunk_size`,
//! `UPSELL_LOGGING__FILTER` -> `logging.filter`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use upsell_config::UpsellConfig;
//!
//! let config = UpsellConfig::load_with_dotenv().expect("config");
//! println!("chunk size: {}", config.finder.chunk_size);
//! ```

mod error;
mod finder;
mod logging;

pub use error::ConfigError;
pub use finder::FinderConfig;
pub use logging::LoggingConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct UpsellConfig {
    #[serde(default)]
    pub finder: FinderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl UpsellConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.finder.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".upsell/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("UPSELL_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("upsell").join("config.toml"))
    }

    /// Walks up from `CARGO_MANIFEST_DIR` (if set) looking for `.env`, then
    /// falls back to the current directory. Missing files are ignored.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = UpsellConfig::default();
        assert_eq!(config.finder.chunk_size, 100);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn defaults_survive_figment_roundtrip() {
        let figment = Figment::from(Serialized::defaults(UpsellConfig::default()));
        let config = UpsellConfig::from_figment(&figment).expect("should extract defaults");
        assert_eq!(config, UpsellConfig::default());
    }
}
