//! Command-line interface.

pub mod check;
pub mod completions;
pub mod forget;
pub mod hash;
pub mod input;
pub mod inspect;
pub mod output;
pub mod verify;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::config::Settings;
use crate::core::constants;
use crate::core::suppress::DiffSuppressor;
use crate::error::Result;

/// tfsecrets - detect secret changes without storing secrets.
#[derive(Parser)]
#[command(
    name = "tfsecrets",
    about = "Detect changes to secret fields using one-way memos",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// State file holding resource attributes and memos
    #[arg(
        long,
        global = true,
        env = "TFSECRETS_STATE",
        default_value = constants::STATE_FILE
    )]
    pub state: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Where a secret value is read from: `--value-env` when given, else stdin.
/// Never from argv.
#[derive(Args, Debug, Clone, Default)]
pub struct SecretSource {
    /// Read the secret from this environment variable instead of stdin
    #[arg(long, value_name = "VAR")]
    pub value_env: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Decide whether a secret field changed, updating its stored memo
    Check {
        /// Secret field key (e.g. personal_access_token)
        field: String,
        /// Resource address within the state file
        #[arg(short, long, default_value = "default")]
        resource: String,
        #[command(flatten)]
        source: SecretSource,
    },

    /// Print a fresh memo for a secret
    Hash {
        #[command(flatten)]
        source: SecretSource,
    },

    /// Check a secret against a memo (exit 1 on mismatch)
    Verify {
        /// Memo to check against
        memo: String,
        #[command(flatten)]
        source: SecretSource,
    },

    /// List stored memos
    Inspect {
        /// Only show this resource
        #[arg(short, long)]
        resource: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove stored memos
    Forget {
        /// Secret field key; omit to drop the whole resource
        field: Option<String>,
        /// Resource address within the state file
        #[arg(short, long, default_value = "default")]
        resource: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}

/// Execute a command.
///
/// # Errors
///
/// Returns error if the command execution fails.
pub fn execute(command: Command, state: PathBuf) -> Result<()> {
    match command {
        Command::Completions { shell } => completions::execute(shell),
        Command::Inspect { resource, json } => {
            inspect::execute(&state, resource.as_deref(), &suffix()?, json)
        }
        Command::Forget { field, resource } => {
            forget::execute(&state, &resource, field.as_deref(), &suppressor()?)
        }
        Command::Check {
            field,
            resource,
            source,
        } => check::execute(&state, &resource, &field, &source, &suppressor()?),
        Command::Hash { source } => hash::execute(&source, &suppressor()?),
        Command::Verify { memo, source } => verify::execute(&memo, &source, &suppressor()?),
    }
}

fn suppressor() -> Result<DiffSuppressor> {
    DiffSuppressor::from_settings(&Settings::load()?)
}

fn suffix() -> Result<String> {
    Ok(Settings::load()?.memo.suffix)
}
