//! Centralized constants for the awsecrets workspace.
//!
//! Environment variable names, shared-file keys, and defaults used across
//! the loader, the resolver, and the CLI.

// =============================================================================
// Environment variables read by the resolver
// =============================================================================

/// Explicit profile selection.
pub const ENV_PROFILE: &str = "AWS_PROFILE";

/// Fallback profile selection, consulted after `AWS_PROFILE`.
pub const ENV_DEFAULT_PROFILE: &str = "AWS_DEFAULT_PROFILE";

/// Explicit region selection.
pub const ENV_REGION: &str = "AWS_REGION";

/// Fallback region selection, consulted after `AWS_REGION`.
pub const ENV_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";

pub const ENV_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const ENV_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const ENV_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

// =============================================================================
// Shared config file locations
// =============================================================================

/// Overrides the location of the shared config file (`~/.aws/config`).
pub const ENV_CONFIG_FILE: &str = "AWS_CONFIG_FILE";

/// Overrides the location of the shared credentials file (`~/.aws/credentials`).
pub const ENV_SHARED_CREDENTIALS_FILE: &str = "AWS_SHARED_CREDENTIALS_FILE";

/// Directory under the user's home that holds the shared files.
pub const AWS_DIR: &str = ".aws";
pub const CONFIG_FILE_NAME: &str = "config";
pub const CREDENTIALS_FILE_NAME: &str = "credentials";

// =============================================================================
// Shared config file keys
// =============================================================================

pub const KEY_REGION: &str = "region";
pub const KEY_ACCESS_KEY_ID: &str = "aws_access_key_id";
pub const KEY_SECRET_ACCESS_KEY: &str = "aws_secret_access_key";
pub const KEY_SESSION_TOKEN: &str = "aws_session_token";

/// Name of the implicit profile used when nothing else supplies a value.
pub const DEFAULT_PROFILE_NAME: &str = "default";

/// Provider name attached to credentials installed into the SDK config.
pub const CREDENTIALS_PROVIDER_NAME: &str = "Awsecrets";

/// Gate that disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
