//! Development key provisioning.
//!
//! `ResolveCollaborator -> FetchCredential -> RenderAndWrite`, each step
//! terminal on failure. Nothing is written unless a credential was found.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::domain::errors::{ProvisionError, ProvisionResult};
use crate::domain::models::{Config, GeneratedConfig};
use crate::domain::ports::{SecureConfigStore, StoreError};
use crate::infrastructure::credentials::JsonFileStore;
use crate::infrastructure::layout::ProjectLayout;

/// Name of the collaborator capability in diagnostics
pub const SECURE_CONFIG_CAPABILITY: &str = "secure_config";

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub provider: String,
    pub output_file: PathBuf,
    pub output_display: String,
    pub masked_key: String,
    pub bytes_written: usize,
}

/// Copies one provider key from a store into the generated config file
#[derive(Debug)]
pub struct KeyProvisioner<S> {
    store: S,
    layout: ProjectLayout,
    provider: String,
}

impl<S: SecureConfigStore> KeyProvisioner<S> {
    pub fn new(store: S, layout: ProjectLayout, provider: impl Into<String>) -> Self {
        Self {
            store,
            layout,
            provider: provider.into(),
        }
    }

    /// Fetch the key, render the file and overwrite the target.
    #[instrument(skip(self), fields(provider = %self.provider))]
    pub fn run(&self) -> ProvisionResult<ProvisionReport> {
        let credential = self
            .store
            .get_api_key(&self.provider)
            .map_err(|err| dependency_unavailable(&self.layout, &err))?
            .ok_or_else(|| ProvisionError::MissingCredential {
                provider: self.provider.clone(),
                project: self.layout.sibling_name(),
            })?;

        if credential.needs_escaping() {
            warn!("API key contains quote, backslash or newline characters; embedding verbatim");
        }

        let contents = GeneratedConfig::new(&credential).render();
        let path = &self.layout.output_file;
        fs::write(path, &contents).map_err(|source| ProvisionError::WriteFailed {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), bytes = contents.len(), "default config written");

        Ok(ProvisionReport {
            provider: credential.provider().to_string(),
            output_file: path.clone(),
            output_display: self.layout.output_display.clone(),
            masked_key: credential.masked_preview(),
            bytes_written: contents.len(),
        })
    }
}

/// Open the sibling project's store and provision the configured provider.
pub fn provision(layout: &ProjectLayout, config: &Config) -> ProvisionResult<ProvisionReport> {
    debug!(
        sibling = %layout.sibling_dir.display(),
        store_file = %config.store_file,
        "resolving secure config store"
    );

    let store = JsonFileStore::open(&layout.sibling_dir, &config.store_file)
        .map_err(|err| dependency_unavailable(layout, &err))?;
    debug!(store = %store.path().display(), "secure config store ready");

    KeyProvisioner::new(store, layout.clone(), config.provider.as_str()).run()
}

fn dependency_unavailable(layout: &ProjectLayout, err: &StoreError) -> ProvisionError {
    ProvisionError::DependencyUnavailable {
        capability: SECURE_CONFIG_CAPABILITY.to_string(),
        project: layout.sibling_name(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ErrorKind;
    use crate::domain::models::Credential;
    use crate::infrastructure::credentials::InMemoryStore;
    use std::path::Path;
    use tempfile::TempDir;

    const KEY: &str = "AIzaSyTestKey1234567890ABCDEF";

    /// Store that cannot be read at all
    struct BrokenStore;

    impl SecureConfigStore for BrokenStore {
        fn get_api_key(&self, _provider: &str) -> Result<Option<Credential>, StoreError> {
            Err(StoreError::StoreNotFound(PathBuf::from("config/secure_config.json")))
        }
    }

    fn plugin_layout(dir: &Path) -> ProjectLayout {
        let root = dir.join("plugin");
        fs::create_dir_all(root.join("src")).unwrap();
        ProjectLayout::resolve(&root, &Config::default())
    }

    #[test]
    fn test_run_writes_template() {
        let dir = TempDir::new().unwrap();
        let layout = plugin_layout(dir.path());
        let store = InMemoryStore::new().with_key("gemini", KEY);

        let report = KeyProvisioner::new(store, layout.clone(), "gemini").run().unwrap();

        let written = fs::read_to_string(&layout.output_file).unwrap();
        assert!(written.contains(&format!("apiKey: '{KEY}',")));
        assert!(written.contains("validated: true"));
        assert_eq!(report.masked_key, "AIzaSyTest...CDEF");
        assert_eq!(report.bytes_written, written.len());
        assert_eq!(report.output_display, "src/default-config.ts");
    }

    #[test]
    fn test_run_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let layout = plugin_layout(dir.path());
        let provisioner =
            KeyProvisioner::new(InMemoryStore::new().with_key("gemini", KEY), layout.clone(), "gemini");

        provisioner.run().unwrap();
        let first = fs::read(&layout.output_file).unwrap();
        provisioner.run().unwrap();
        let second = fs::read(&layout.output_file).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_run_truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        let layout = plugin_layout(dir.path());
        fs::write(&layout.output_file, "x".repeat(4096)).unwrap();

        KeyProvisioner::new(InMemoryStore::new().with_key("gemini", KEY), layout.clone(), "gemini")
            .run()
            .unwrap();

        let written = fs::read_to_string(&layout.output_file).unwrap();
        assert!(written.starts_with("/**"));
        assert!(written.ends_with("};"));
    }

    #[test]
    fn test_missing_credential_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let layout = plugin_layout(dir.path());
        let store = InMemoryStore::new().with_key("gemini", "").with_key("openai", "sk-x");

        let err = KeyProvisioner::new(store, layout.clone(), "gemini").run().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingCredential);
        assert!(err.to_string().contains("deep_research_economy"));
        assert!(!layout.output_file.exists());
    }

    #[test]
    fn test_unreadable_store_is_dependency_unavailable() {
        let dir = TempDir::new().unwrap();
        let layout = plugin_layout(dir.path());

        let err = KeyProvisioner::new(BrokenStore, layout.clone(), "gemini").run().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DependencyUnavailable);
        assert!(!layout.output_file.exists());
    }

    #[test]
    fn test_write_failure_is_unexpected() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("plugin");
        fs::create_dir_all(&root).unwrap();
        // No src/ directory, so the write cannot succeed
        let layout = ProjectLayout::resolve(&root, &Config::default());

        let err = KeyProvisioner::new(InMemoryStore::new().with_key("gemini", KEY), layout, "gemini")
            .run()
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(matches!(err, ProvisionError::WriteFailed { .. }));
    }

    #[test]
    fn test_store_borrowed_by_reference() {
        let dir = TempDir::new().unwrap();
        let layout = plugin_layout(dir.path());
        let store = InMemoryStore::new().with_key("gemini", KEY);

        let report = KeyProvisioner::new(&store, layout, "gemini").run().unwrap();
        assert_eq!(report.provider, "gemini");
    }

    #[test]
    fn test_provision_without_sibling_project() {
        let dir = TempDir::new().unwrap();
        let layout = plugin_layout(dir.path());

        let err = provision(&layout, &Config::default()).unwrap_err();

        match &err {
            ProvisionError::DependencyUnavailable {
                capability,
                project,
                reason,
            } => {
                assert_eq!(capability, SECURE_CONFIG_CAPABILITY);
                assert_eq!(project, "deep_research_economy");
                assert!(reason.contains("deep_research_economy"));
            }
            other => panic!("Expected DependencyUnavailable, got {other:?}"),
        }
        assert!(!layout.output_file.exists());
    }

    #[test]
    fn test_custom_output_file_keeps_fixed_header() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("plugin");
        fs::create_dir_all(root.join("generated")).unwrap();
        let config = Config {
            output_file: "generated/dev.ts".to_string(),
            ..Config::default()
        };
        let layout = ProjectLayout::resolve(&root, &config);

        let report = KeyProvisioner::new(InMemoryStore::new().with_key("gemini", KEY), layout, "gemini")
            .run()
            .unwrap();

        assert_eq!(report.output_display, "generated/dev.ts");
        let written = fs::read_to_string(root.join("generated/dev.ts")).unwrap();
        assert!(written.contains(" * Add to .gitignore: src/default-config.ts\n"));
    }

    #[test]
    fn test_provision_from_json_store() {
        let dir = TempDir::new().unwrap();
        let layout = plugin_layout(dir.path());
        let store_path = layout.sibling_dir.join("config/secure_config.json");
        fs::create_dir_all(store_path.parent().unwrap()).unwrap();
        fs::write(&store_path, format!(r#"{{"api_keys": {{"gemini": "{KEY}"}}}}"#)).unwrap();

        let report = provision(&layout, &Config::default()).unwrap();

        assert_eq!(report.masked_key, "AIzaSyTest...CDEF");
        let written = fs::read_to_string(&layout.output_file).unwrap();
        assert!(written.contains(&format!("apiKey: '{KEY}'")));
    }
}
