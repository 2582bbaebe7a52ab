//! Domain layer for development key provisioning
//!
//! This module contains the credential model, the generated file, and the
//! port through which the secure config store is reached.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{ErrorKind, ProvisionError, ProvisionResult};
pub use ports::{SecureConfigStore, StoreError};
