//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty, compact or JSON output on stderr
//! - Optional JSON log file
//! - Secret scrubbing

pub mod config;
pub mod logger;
pub mod secret_scrubbing;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::{LoggerImpl, LOG_FILE_NAME};
pub use secret_scrubbing::SecretScrubber;
