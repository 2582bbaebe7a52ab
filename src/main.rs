//! setup-dev-key CLI entry point.

use clap::Parser;

use setup_dev_key::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli::commands::setup::execute(cli.args) {
        cli::handle_error(err);
    }
}
