use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::domain::models::Credential;
use crate::domain::ports::{SecureConfigStore, StoreError};

/// On-disk shape of the sibling project's secure config
///
/// Entries are kept as raw values so an unset (`null`) provider does not
/// make the whole document unreadable.
#[derive(Debug, Default, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    api_keys: Option<HashMap<String, Value>>,
}

impl StoreDocument {
    /// String-valued entries only; `null` and other types count as unset.
    fn into_keys(self) -> HashMap<String, String> {
        self.api_keys
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(provider, value)| match value {
                Value::String(key) => Some((provider, key)),
                Value::Null => None,
                other => {
                    tracing::debug!(
                        provider = %provider,
                        kind = json_kind(&other),
                        "ignoring non-string api key entry"
                    );
                    None
                }
            })
            .collect()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Secure config store backed by a JSON document inside the sibling project
///
/// ```json
/// { "api_keys": { "gemini": "AIza..." } }
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    api_keys: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `project_dir/store_file`, reading it once.
    pub fn open(project_dir: &Path, store_file: &str) -> Result<Self, StoreError> {
        if !project_dir.is_dir() {
            return Err(StoreError::ProjectNotFound(project_dir.to_path_buf()));
        }

        let path = project_dir.join(store_file);
        let contents = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                StoreError::StoreNotFound(path.clone())
            } else {
                StoreError::Read {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        let document: StoreDocument =
            serde_json::from_str(&contents).map_err(|err| StoreError::Malformed {
                path: path.clone(),
                reason: err.to_string(),
            })?;

        let api_keys = document.into_keys();
        tracing::debug!(
            path = %path.display(),
            providers = api_keys.len(),
            "secure config store opened"
        );

        Ok(Self { path, api_keys })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SecureConfigStore for JsonFileStore {
    fn get_api_key(&self, provider: &str) -> Result<Option<Credential>, StoreError> {
        Ok(self
            .api_keys
            .get(provider)
            .and_then(|value| Credential::new(provider, value.as_str())))
    }
}
