use std::path::PathBuf;

use super::models::Credential;

/// Error type for secure config store access
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Project directory not found: {}", .0.display())]
    ProjectNotFound(PathBuf),

    #[error("Store file not found: {}", .0.display())]
    StoreNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed store {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

/// Read access to the sibling project's secure configuration.
///
/// Implementations are handed to the provisioner explicitly; nothing
/// looks them up through global state.
pub trait SecureConfigStore {
    /// Look up the API key stored for a provider
    ///
    /// # Arguments
    /// * `provider` - Provider identifier, e.g. `"gemini"`
    ///
    /// # Returns
    /// * `Ok(Some(credential))` if a non-empty key is stored
    /// * `Ok(None)` if the key is absent or empty
    /// * `Err(StoreError)` if the store cannot be read
    fn get_api_key(&self, provider: &str) -> Result<Option<Credential>, StoreError>;
}

impl<T: SecureConfigStore + ?Sized> SecureConfigStore for &T {
    fn get_api_key(&self, provider: &str) -> Result<Option<Credential>, StoreError> {
        (**self).get_api_key(provider)
    }
}
