//! Infrastructure layer module
//!
//! This module contains the infrastructure adapters:
//! - Configuration management
//! - Logging infrastructure
//! - Credentials (secure config store implementations)
//! - Project filesystem layout
//!
//! Store implementations satisfy the port trait defined in the domain layer.

pub mod config;
pub mod credentials;
pub mod layout;
pub mod logging;
