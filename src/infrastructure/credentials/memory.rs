use std::collections::HashMap;

use crate::domain::models::Credential;
use crate::domain::ports::{SecureConfigStore, StoreError};

/// Store holding keys in memory, for embedding and tests
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    api_keys: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_key(mut self, provider: impl Into<String>, value: impl Into<String>) -> Self {
        self.api_keys.insert(provider.into(), value.into());
        self
    }
}

impl SecureConfigStore for InMemoryStore {
    fn get_api_key(&self, provider: &str) -> Result<Option<Credential>, StoreError> {
        Ok(self
            .api_keys
            .get(provider)
            .and_then(|value| Credential::new(provider, value.as_str())))
    }
}
