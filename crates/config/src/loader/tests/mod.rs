//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test precedence resolution across options, environment, shared files,
//!   and the secrets file.
//! - Test the `SecretsLoader` builder against real files on disk.
//! - Test dotenv loading.
//!
//! Does NOT handle:
//! - Environment variable normalization (tested in env.rs).
//! - INI and YAML parsing details (tested in profile.rs and secrets.rs).
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

use crate::constants::{
    ENV_ACCESS_KEY_ID, ENV_CONFIG_FILE, ENV_DEFAULT_PROFILE, ENV_DEFAULT_REGION, ENV_PROFILE,
    ENV_REGION, ENV_SECRET_ACCESS_KEY, ENV_SESSION_TOKEN, ENV_SHARED_CREDENTIALS_FILE,
};


/// Every variable the loader reads, cleared by `with_aws_env`.
const AWS_VARS: [&str; 9] = [
    ENV_PROFILE,
    ENV_DEFAULT_PROFILE,
    ENV_REGION,
    ENV_DEFAULT_REGION,
    ENV_ACCESS_KEY_ID,
    ENV_SECRET_ACCESS_KEY,
    ENV_SESSION_TOKEN,
    ENV_CONFIG_FILE,
    ENV_SHARED_CREDENTIALS_FILE,
];

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Run `f` with every AWS variable unset except the ones in `vars`.
pub fn with_aws_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let mut all: Vec<(&str, Option<&str>)> = AWS_VARS
        .iter()
        .filter(|key| !vars.iter().any(|(k, _)| k == *key))
        .map(|key| (*key, None))
        .collect();
    all.extend(vars.iter().map(|(k, v)| (*k, Some(*v))));
    temp_env::with_vars(all, f)
}
