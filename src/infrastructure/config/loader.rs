use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Provider cannot be empty")]
    EmptyProvider,

    #[error("{field} cannot be empty")]
    EmptyPath { field: &'static str },

    #[error("{field} must be a relative path, got {value}")]
    AbsolutePath { field: &'static str, value: String },

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty, compact")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: never, daily")]
    InvalidLogRotation(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Project config, relative to the working directory
    pub const PROJECT_FILE: &'static str = ".devkey/config.yaml";
    /// Untracked local overrides, relative to the working directory
    pub const LOCAL_FILE: &'static str = ".devkey/local.yaml";
    /// Environment variable prefix
    pub const ENV_PREFIX: &'static str = "DEVKEY_";

    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .devkey/config.yaml
    /// 3. .devkey/local.yaml
    /// 4. `extra` file (the `--config` flag)
    /// 5. Environment variables (DEVKEY_* prefix, highest priority)
    ///
    /// Every file is optional.
    pub fn load(extra: Option<&Path>) -> Result<Config> {
        Self::load_from_dir(Path::new("."), extra)
    }

    /// Same as [`ConfigLoader::load`] with config files resolved under `dir`
    pub fn load_from_dir(dir: &Path, extra: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(dir.join(Self::PROJECT_FILE)))
            .merge(Yaml::file(dir.join(Self::LOCAL_FILE)));

        if let Some(path) = extra {
            anyhow::ensure!(
                path.is_file(),
                "Config file {} does not exist",
                path.display()
            );
            figment = figment.merge(Yaml::file(path));
        }

        let config: Config = figment
            .merge(Env::prefixed(Self::ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.provider.trim().is_empty() {
            return Err(ConfigError::EmptyProvider);
        }

        for (field, value) in [
            ("sibling_project", &config.sibling_project),
            ("store_file", &config.store_file),
            ("output_file", &config.output_file),
        ] {
            if value.is_empty() {
                return Err(ConfigError::EmptyPath { field });
            }
            if PathBuf::from(value).is_absolute() {
                return Err(ConfigError::AbsolutePath {
                    field,
                    value: value.clone(),
                });
            }
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty", "compact"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if !["never", "daily"].contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(
                config.logging.rotation.clone(),
            ));
        }

        Ok(())
    }
}
