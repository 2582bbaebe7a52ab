pub mod config;
pub mod credential;
pub mod generated_config;

pub use config::{Config, LoggingConfig};
pub use credential::Credential;
pub use generated_config::{GeneratedConfig, DEFAULT_OUTPUT_FILE};
