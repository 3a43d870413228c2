//! Command dispatch logic.
//!
//! Responsibilities:
//! - Resolve the configuration described by the global options.
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code mapping (see `error` module).
//!
//! Invariants:
//! - Every command needs a fully resolved configuration; nothing runs on failure.

use anyhow::{Context, Result};

use crate::args::{Cli, Commands};
use crate::commands;

pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let config = cli
        .loader()
        .resolve()
        .context("Failed to resolve AWS configuration")?;
    tracing::debug!(
        region_source = %config.region_source,
        credentials_source = %config.credentials_source,
        "Configuration ready"
    );

    match cli.command {
        Commands::Show { format } => commands::show::run(&config, format),
        Commands::Env { shell } => commands::env::run(&config, shell),
    }
}
