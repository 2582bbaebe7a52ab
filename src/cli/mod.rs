//! Command-line interface.

pub mod commands;
pub mod output;

use clap::Parser;
use console::style;

use crate::domain::errors::ProvisionError;
use crate::infrastructure::logging::SecretScrubber;
use output::display_name;

/// Command that seeds the research project's setup in the sibling directory
pub const REMEDIATION_COMMAND: &str = "python3 economy_json_builder.py setup";

#[derive(Parser, Debug)]
#[command(
    name = "setup-dev-key",
    version,
    about = "Write the development API key from the secure config store into src/default-config.ts"
)]
pub struct Cli {
    #[command(flatten)]
    pub args: commands::setup::SetupArgs,
}

/// Lines printed for a failed run.
pub fn error_lines(err: &ProvisionError) -> Vec<String> {
    match err {
        ProvisionError::DependencyUnavailable {
            capability,
            project,
            reason,
        } => vec![
            format!(
                "{} Could not load {capability}: {reason}",
                style("Error:").red().bold()
            ),
            format!("Make sure you have the {project} project set up"),
        ],
        ProvisionError::MissingCredential { provider, project } => vec![
            format!("No {} API key found in secure config", display_name(provider)),
            format!("Run this in {project} first:"),
            format!("  {REMEDIATION_COMMAND}"),
        ],
        other => vec![format!(
            "{} {other}",
            style("Error setting up default key:").red().bold()
        )],
    }
}

/// Record a failure in the structured log, with secrets redacted.
pub fn log_failure(err: &ProvisionError) {
    let scrubber = SecretScrubber::new();
    tracing::error!(
        kind = ?err.kind(),
        error = %scrubber.scrub_message(&err.to_string()),
        "provisioning failed"
    );
}

/// Print the diagnostic and terminate with the error's exit code.
pub fn handle_error(err: ProvisionError) -> ! {
    for line in error_lines(&err) {
        println!("{line}");
    }
    std::process::exit(err.exit_code())
}
