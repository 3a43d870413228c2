//! Path helpers for the shared AWS config files.
//!
//! Responsibilities:
//! - Determine the default `~/.aws/config` and `~/.aws/credentials` locations.
//! - Honor `AWS_CONFIG_FILE` / `AWS_SHARED_CREDENTIALS_FILE` overrides.
//!
//! Does NOT handle:
//! - File I/O or parsing (see `profile.rs`).

use std::path::PathBuf;

use anyhow::Context;

use super::env::env_var_or_none;
use crate::constants::{
    AWS_DIR, CONFIG_FILE_NAME, CREDENTIALS_FILE_NAME, ENV_CONFIG_FILE,
    ENV_SHARED_CREDENTIALS_FILE,
};

fn aws_dir() -> Result<PathBuf, anyhow::Error> {
    let base_dirs = directories::BaseDirs::new().context("Failed to determine home directory")?;
    Ok(base_dirs.home_dir().join(AWS_DIR))
}

/// Returns the path of the shared config file.
///
/// - `AWS_CONFIG_FILE` when set
/// - otherwise `~/.aws/config`
pub(crate) fn default_config_file_path() -> Result<PathBuf, anyhow::Error> {
    if let Some(path) = env_var_or_none(ENV_CONFIG_FILE) {
        return Ok(PathBuf::from(path));
    }
    Ok(aws_dir()?.join(CONFIG_FILE_NAME))
}

/// Returns the path of the shared credentials file.
///
/// - `AWS_SHARED_CREDENTIALS_FILE` when set
/// - otherwise `~/.aws/credentials`
pub(crate) fn default_credentials_file_path() -> Result<PathBuf, anyhow::Error> {
    if let Some(path) = env_var_or_none(ENV_SHARED_CREDENTIALS_FILE) {
        return Ok(PathBuf::from(path));
    }
    Ok(aws_dir()?.join(CREDENTIALS_FILE_NAME))
}
