//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every load failure (secrets file, shared files,
//!   unresolved settings, `.env` handling).
//! - Aggregate unresolved region and credentials into one error.
//!
//! Does NOT handle:
//! - Deciding whether a missing source is an error (see `resolver.rs`).
//!
//! Invariants:
//! - All error variants include context for debugging (paths, missing pieces).
//! - No variant ever carries a secret value or a raw file line.

use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// A piece of the final configuration that no source supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSetting {
    Region,
    Credentials,
}

impl fmt::Display for MissingSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region => write!(f, "region"),
            Self::Credentials => write!(f, "credentials"),
        }
    }
}

struct MissingList<'a>(&'a [MissingSetting]);

impl fmt::Display for MissingList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, missing) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " and ")?;
            }
            write!(f, "{missing}")?;
        }
        Ok(())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Secrets file not found at {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read secrets file at {path}: {kind}")]
    SecretsFileRead { path: PathBuf, kind: ErrorKind },

    #[error("Malformed secrets document at {path}: {message}")]
    MalformedSecretsDocument { path: PathBuf, message: String },

    #[error("Failed to read shared AWS file at {path}: {kind}")]
    ProfileFileRead { path: PathBuf, kind: ErrorKind },

    #[error("Malformed shared AWS file at {path}: {message}")]
    ProfileFileParse { path: PathBuf, message: String },

    #[error("Unable to determine home directory: {0}")]
    ConfigDirUnavailable(String),

    #[error(
        "Unable to resolve AWS {}. Set options, AWS_* environment variables, a profile, or a secrets file.",
        MissingList(.missing)
    )]
    Unresolved { missing: Vec<MissingSetting> },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: Only the byte index of the failure is kept, never the line content.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Pieces that could not be resolved; empty for every other variant.
    pub fn missing(&self) -> &[MissingSetting] {
        match self {
            Self::Unresolved { missing } => missing,
            _ => &[],
        }
    }

    pub fn is_unresolved_region(&self) -> bool {
        self.missing().contains(&MissingSetting::Region)
    }

    pub fn is_unresolved_credentials(&self) -> bool {
        self.missing().contains(&MissingSetting::Credentials)
    }
}
