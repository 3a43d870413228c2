//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Turn the global options into a configured `SecretsLoader`.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read AWS environment variables; the loader does that itself.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use awsecrets_config::{LoadOptions, SecretsLoader};

#[derive(Parser)]
#[command(name = "awsecrets")]
#[command(about = "Resolve AWS region and credentials from options, environment, and config files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  awsecrets show\n  awsecrets --profile dev show --format json\n  awsecrets --secrets-path ./secrets.yml env\n  eval \"$(awsecrets --profile production env)\"\n"
)]
pub struct Cli {
    /// Profile to select (overrides AWS_PROFILE and AWS_DEFAULT_PROFILE)
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Region to use (overrides AWS_REGION and AWS_DEFAULT_REGION)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// YAML secrets file with fallback region and credentials.
    ///
    /// The file must exist when this flag is given.
    #[arg(long, global = true, value_name = "FILE")]
    pub secrets_path: Option<PathBuf>,

    /// Shared config file (default: AWS_CONFIG_FILE or ~/.aws/config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Shared credentials file (default: AWS_SHARED_CREDENTIALS_FILE or ~/.aws/credentials)
    #[arg(long, global = true, value_name = "FILE")]
    pub credentials_file: Option<PathBuf>,

    /// Do not fall back to the `default` profile when nothing else resolves
    #[arg(long, global = true)]
    pub no_default_profile: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the resolved region, access key id, and where each came from.
    ///
    /// The secret access key is never printed.
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print shell statements that export the resolved configuration.
    Env {
        /// Shell syntax to emit
        #[arg(long, value_enum, default_value_t = ShellKind::Posix)]
        shell: ShellKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShellKind {
    Posix,
    Fish,
}

/// Treat blank path arguments as absent so the loader falls back to its defaults.
fn non_blank_path(path: &Option<PathBuf>) -> Option<PathBuf> {
    path.as_ref()
        .filter(|p| !p.to_string_lossy().trim().is_empty())
        .cloned()
}

impl Cli {
    /// Build the loader described by the global options.
    pub fn loader(&self) -> SecretsLoader {
        let options = LoadOptions {
            profile: self.profile.clone(),
            region: self.region.clone(),
            secrets_path: non_blank_path(&self.secrets_path),
        };

        let mut loader = SecretsLoader::new().with_options(options);
        if let Some(path) = non_blank_path(&self.config_file) {
            loader = loader.with_config_path(path);
        }
        if let Some(path) = non_blank_path(&self.credentials_file) {
            loader = loader.with_credentials_path(path);
        }
        if self.no_default_profile {
            loader = loader.without_default_profile_fallback();
        }
        loader
    }
}
