//! Filesystem layout of the plugin project and its sibling research project.

use std::path::{Path, PathBuf};

use crate::domain::errors::{ProvisionError, ProvisionResult};
use crate::domain::models::Config;

/// Resolved paths for one provisioning run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Plugin project root; the generated file lives under it
    pub project_root: PathBuf,
    /// Sibling project holding the secure config store
    pub sibling_dir: PathBuf,
    /// Absolute path of the generated file
    pub output_file: PathBuf,
    /// Output path as configured, used in console messages
    pub output_display: String,
}

impl ProjectLayout {
    /// Resolve paths against an explicit project root.
    ///
    /// The sibling project sits next to the root: `<root>/../<sibling_project>`.
    /// A root without a parent (`/`) uses itself as the base.
    pub fn resolve(project_root: &Path, config: &Config) -> Self {
        let base = project_root.parent().unwrap_or(project_root);
        Self {
            project_root: project_root.to_path_buf(),
            sibling_dir: base.join(&config.sibling_project),
            output_file: project_root.join(&config.output_file),
            output_display: config.output_file.clone(),
        }
    }

    /// Directory name of the sibling project, for diagnostics
    pub fn sibling_name(&self) -> String {
        self.sibling_dir
            .file_name()
            .map_or_else(
                || self.sibling_dir.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
    }

    /// Resolve paths using `config.project_root`, or the current directory.
    pub fn discover(config: &Config) -> ProvisionResult<Self> {
        let cwd = std::env::current_dir().map_err(|err| {
            ProvisionError::Environment(format!("Failed to get current directory: {err}"))
        })?;

        let root = match &config.project_root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => cwd.join(root),
            None => cwd,
        };

        // Canonicalize so that `..` resolves against the real directory
        let root = root.canonicalize().map_err(|err| {
            ProvisionError::Environment(format!(
                "Project root {} is not accessible: {err}",
                root.display()
            ))
        })?;

        Ok(Self::resolve(&root, config))
    }
}
