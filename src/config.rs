//! Configuration System
//!
//! Optional `helmgen.toml` in the scanned root plus `HELMGEN_*` environment
//! overrides, merged through the `config` crate's builder.

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HelmgenConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Loads configuration for a run.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `helmgen.toml` from `root` if present, then apply `HELMGEN_*`
    /// environment overrides (e.g. `HELMGEN_LOGGING__LEVEL=debug`).
    pub fn load(root: &Path) -> Result<HelmgenConfig, ConfigError> {
        let mut builder = config::Config::builder();

        let config_path = root.join("helmgen.toml");
        if config_path.exists() {
            builder = builder.add_source(config::File::from(config_path).required(false));
        }

        builder =
            builder.add_source(config::Environment::with_prefix("HELMGEN").separator("__"));

        let loaded = builder.build()?;
        Ok(loaded.try_deserialize()?)
    }

    /// Load configuration from an explicit file path. Unlike [`Self::load`],
    /// a missing or unreadable file is an error here.
    pub fn load_from_file(path: &Path) -> Result<HelmgenConfig, ConfigError> {
        let loaded = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()))
            .build()?;
        Ok(loaded.try_deserialize()?)
    }
}
