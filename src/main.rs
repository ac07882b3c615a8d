//! tfsecrets - detect secret changes without storing secrets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tfsecrets::cli::output;
use tfsecrets::cli::{execute, Cli};
use tfsecrets::core::constants::LOG_ENV;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("tfsecrets=debug")
        } else {
            EnvFilter::new("tfsecrets=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command, cli.state) {
        let suggestion = match &e {
            tfsecrets::error::Error::State(tfsecrets::error::StateError::NotFound(_)) => {
                Some("run: tfsecrets check <FIELD> to create state")
            }
            tfsecrets::error::Error::Validation(tfsecrets::error::ValidationError::MissingSecret) => {
                Some("pass the secret on stdin or with --value-env VAR")
            }
            tfsecrets::error::Error::HashComputation(_) => {
                Some("secrets longer than 72 bytes cannot be memoized")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
