//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-4 are reserved for specific error categories.

use awsecrets_config::ConfigError;

/// Structured exit codes for awsecrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// No source supplied the region, the credentials, or both.
    ///
    /// Scripts should set a profile, region, or key pair and retry.
    Unresolved = 2,

    /// The secrets file is missing, unreadable, or not a valid document.
    SecretsFile = 3,

    /// A shared AWS config or credentials file could not be read or parsed.
    SharedConfigFile = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::Unresolved { .. } => ExitCode::Unresolved,

            ConfigError::FileNotFound { .. }
            | ConfigError::SecretsFileRead { .. }
            | ConfigError::MalformedSecretsDocument { .. } => ExitCode::SecretsFile,

            ConfigError::ProfileFileRead { .. }
            | ConfigError::ProfileFileParse { .. }
            | ConfigError::ConfigDirUnavailable(_) => ExitCode::SharedConfigFile,

            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
