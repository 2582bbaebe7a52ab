//! setup-dev-key - development API key provisioning
//!
//! Reads the Gemini API key from the secure config store of the sibling
//! research project and writes it into the plugin's git-ignored
//! `src/default-config.ts`.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): credential, generated file, errors, store port
//! - **Service Layer** (`services`): the provisioning run
//! - **Infrastructure Layer** (`infrastructure`): config, logging, stores, paths
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use setup_dev_key::{Config, InMemoryStore, KeyProvisioner, ProjectLayout};
//!
//! let config = Config::default();
//! let layout = ProjectLayout::discover(&config)?;
//! let store = InMemoryStore::new().with_key("gemini", "AIzaSyTestKey1234567890ABCDEF");
//! let report = KeyProvisioner::new(store, layout, "gemini").run()?;
//! println!("Key: {}", report.masked_key);
//! # Ok::<(), setup_dev_key::ProvisionError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{Config, Credential, GeneratedConfig, LoggingConfig};
pub use domain::{ErrorKind, ProvisionError, SecureConfigStore, StoreError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::credentials::{InMemoryStore, JsonFileStore};
pub use infrastructure::layout::ProjectLayout;
pub use services::{provision, KeyProvisioner, ProvisionReport};
