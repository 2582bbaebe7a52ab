//! Implementation of the `setup-dev-key` command.

use clap::Args;
use std::path::PathBuf;

use crate::cli::log_failure;
use crate::cli::output::{output, CommandOutput};
use crate::domain::errors::{ProvisionError, ProvisionResult};
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::layout::ProjectLayout;
use crate::infrastructure::logging::{LogConfig, LoggerImpl};
use crate::services::{provision, ProvisionReport};

#[derive(Args, Debug, Default)]
pub struct SetupArgs {
    /// Extra YAML config file, merged over .devkey/config.yaml
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug)]
pub struct SetupOutput {
    pub masked_key: String,
    pub output_display: String,
}

impl From<ProvisionReport> for SetupOutput {
    fn from(report: ProvisionReport) -> Self {
        Self {
            masked_key: report.masked_key,
            output_display: report.output_display,
        }
    }
}

impl CommandOutput for SetupOutput {
    fn to_human(&self) -> String {
        [
            "✅ Default API key configured successfully!".to_string(),
            format!("   Key: {}", self.masked_key),
            String::new(),
            "⚠️  Important: This file should not be committed to git".to_string(),
            format!("   Add to .gitignore: {}", self.output_display),
        ]
        .join("\n")
    }
}

pub fn execute(args: SetupArgs) -> ProvisionResult<()> {
    let config =
        ConfigLoader::load(args.config.as_deref()).map_err(|err| ProvisionError::config(&err))?;

    let logger = init_logger(&config)?;
    tracing::debug!(file_output = logger.has_file_output(), "setup-dev-key starting");

    // Log while the file writer guard is still alive
    let result = run(&config);
    if let Err(err) = &result {
        log_failure(err);
    }
    result
}

/// Install the global logger; failures belong to the environment, not the config.
fn init_logger(config: &Config) -> ProvisionResult<LoggerImpl> {
    LoggerImpl::init(&LogConfig::from(&config.logging))
        .map_err(|err| ProvisionError::environment(&err))
}

fn run(config: &Config) -> ProvisionResult<()> {
    let layout = ProjectLayout::discover(config)?;
    tracing::debug!(
        root = %layout.project_root.display(),
        provider = %config.provider,
        "provisioning development key"
    );

    let report = provision(&layout, config)?;
    output(&SetupOutput::from(report));
    Ok(())
}
