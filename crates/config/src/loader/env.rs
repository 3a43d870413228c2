//! Environment variable capture for configuration.
//!
//! Responsibilities:
//! - Read the AWS region, profile, and credential variables into an
//!   immutable `EnvironmentSnapshot`.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Deciding which variable wins (see `resolver.rs`).
//! - Shared file path overrides (see `path.rs`).
//! - .env file loading (handled by `SecretsLoader::load_dotenv`).
//!
//! Invariants:
//! - Every capture reads the live process environment; nothing is cached.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use crate::constants::{
    ENV_ACCESS_KEY_ID, ENV_DEFAULT_PROFILE, ENV_DEFAULT_REGION, ENV_PROFILE, ENV_REGION,
    ENV_SECRET_ACCESS_KEY, ENV_SESSION_TOKEN,
};
use crate::types::settings::non_blank;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(non_blank)
}

/// The AWS-related environment variables, read once per load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    pub profile: Option<String>,
    pub default_profile: Option<String>,
    pub region: Option<String>,
    pub default_region: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
}

impl EnvironmentSnapshot {
    /// Read the current process environment.
    pub fn capture() -> Self {
        Self::from_lookup(env_var_or_none)
    }

    /// Build a snapshot from an arbitrary lookup, e.g. a map in tests.
    ///
    /// Values returned by `lookup` are normalized the same way as process
    /// environment values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).and_then(non_blank);
        Self {
            profile: get(ENV_PROFILE),
            default_profile: get(ENV_DEFAULT_PROFILE),
            region: get(ENV_REGION),
            default_region: get(ENV_DEFAULT_REGION),
            access_key_id: get(ENV_ACCESS_KEY_ID),
            secret_access_key: get(ENV_SECRET_ACCESS_KEY),
            session_token: get(ENV_SESSION_TOKEN),
        }
    }
}
