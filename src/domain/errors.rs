//! Domain errors for development key provisioning.

use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a [`ProvisionError`].
///
/// Every kind is terminal for the invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The secure config store could not be located or loaded.
    DependencyUnavailable,
    /// The store was reached but holds no credential for the provider.
    MissingCredential,
    /// Anything else (configuration, filesystem writes, environment).
    Unexpected,
}

/// Errors that end a provisioning run.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("{capability} from {project} is unavailable: {reason}")]
    DependencyUnavailable {
        capability: String,
        project: String,
        reason: String,
    },

    #[error("No {provider} API key found in secure config of {project}")]
    MissingCredential { provider: String, project: String },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Environment(String),
}

pub type ProvisionResult<T> = Result<T, ProvisionError>;

impl ProvisionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DependencyUnavailable { .. } => ErrorKind::DependencyUnavailable,
            Self::MissingCredential { .. } => ErrorKind::MissingCredential,
            Self::WriteFailed { .. } | Self::Config(_) | Self::Environment(_) => {
                ErrorKind::Unexpected
            }
        }
    }

    /// Process exit code for this error. All failures share code 1.
    pub const fn exit_code(&self) -> i32 {
        1
    }

    /// Wrap any displayable error as a configuration failure, keeping its cause chain.
    pub fn config(err: &anyhow::Error) -> Self {
        Self::Config(format!("{err:#}"))
    }

    /// Wrap a failure of the process environment (cwd, global logger).
    pub fn environment(err: &anyhow::Error) -> Self {
        Self::Environment(format!("{err:#}"))
    }
}
