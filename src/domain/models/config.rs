use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::generated_config::DEFAULT_OUTPUT_FILE;

/// Main configuration structure for `setup-dev-key`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Provider whose key is provisioned
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Plugin project root (defaults to the current directory)
    #[serde(default)]
    pub project_root: Option<PathBuf>,

    /// Sibling project directory name, resolved next to the project root
    #[serde(default = "default_sibling_project")]
    pub sibling_project: String,

    /// Secure config store file, relative to the sibling project
    #[serde(default = "default_store_file")]
    pub store_file: String,

    /// Generated file, relative to the project root
    ///
    /// Only the write target and the success output follow this value; the
    /// header comment inside the generated file always names
    /// `src/default-config.ts`.
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_sibling_project() -> String {
    "deep_research_economy".to_string()
}

fn default_store_file() -> String {
    "config/secure_config.json".to_string()
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            project_root: None,
            sibling_project: default_sibling_project(),
            store_file: default_store_file(),
            output_file: default_output_file(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty, compact)
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for a log file; stderr only when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation (never, daily)
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "never".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}
