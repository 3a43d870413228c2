//! Loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `SecretsLoader` that gathers every source for one load.
//! - Locate the shared AWS files, read the secrets file, and capture the environment.
//! - Run the resolver and hand the result to a `ConfigSink`.
//!
//! Does NOT handle:
//! - Precedence rules (delegated to resolver.rs).
//! - File parsing (delegated to profile.rs and secrets.rs).
//!
//! Invariants / Assumptions:
//! - Every `resolve`/`load` call re-reads the environment and all files.
//! - Nothing is applied unless resolution fully succeeds.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;

use super::env::EnvironmentSnapshot;
use super::error::ConfigError;
use super::path::{default_config_file_path, default_credentials_file_path};
use super::profile::ProfileStore;
use super::resolver::Resolver;
use super::secrets::SecretsDocument;
use crate::constants::{DEFAULT_PROFILE_NAME, ENV_DOTENV_DISABLED};
use crate::sink::{ConfigSink, GlobalSdkConfig};
use crate::types::{LoadOptions, ResolvedConfig};

/// Loader that resolves AWS region and credentials from every configured source.
#[derive(Debug, Clone)]
pub struct SecretsLoader {
    options: LoadOptions,
    config_path: Option<PathBuf>,
    credentials_path: Option<PathBuf>,
    default_profile_fallback: bool,
}

impl Default for SecretsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretsLoader {
    /// Create a new loader with empty options and default file locations.
    pub fn new() -> Self {
        Self {
            options: LoadOptions::default(),
            config_path: None,
            credentials_path: None,
            default_profile_fallback: true,
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Replace all caller options at once.
    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the profile to select (highest priority profile source).
    pub fn with_profile_name(mut self, name: String) -> Self {
        self.options.profile = Some(name);
        self
    }

    /// Set the region (highest priority region source).
    pub fn with_region(mut self, region: String) -> Self {
        self.options.region = Some(region);
        self
    }

    /// Activate the secrets-file source.
    pub fn with_secrets_path(mut self, path: PathBuf) -> Self {
        self.options.secrets_path = Some(path);
        self
    }

    /// Override the shared config file path (default `~/.aws/config`).
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Override the shared credentials file path (default `~/.aws/credentials`).
    pub fn with_credentials_path(mut self, path: PathBuf) -> Self {
        self.credentials_path = Some(path);
        self
    }

    /// Do not fall back to the `default` profile when nothing else resolves.
    pub fn without_default_profile_fallback(mut self) -> Self {
        self.default_profile_fallback = false;
        self
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    fn config_file_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => default_config_file_path()
                .map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string())),
        }
    }

    fn credentials_file_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.credentials_path {
            Some(path) => Ok(path.clone()),
            None => default_credentials_file_path()
                .map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string())),
        }
    }

    /// Read every source and compute the configuration without applying it.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let env = EnvironmentSnapshot::capture();
        let secrets = SecretsDocument::load(self.options.secrets_path.as_deref())?;

        let config_path = self.config_file_path()?;
        let credentials_path = self.credentials_file_path()?;
        let profiles = ProfileStore::load(Some(&config_path), Some(&credentials_path))?;

        let fallback = self.default_profile_fallback.then_some(DEFAULT_PROFILE_NAME);
        Resolver::new(&self.options, &env, &profiles)
            .with_secrets(secrets.as_ref())
            .with_fallback_profile(fallback)
            .resolve()
    }

    /// Resolve and apply the result to `sink`.
    ///
    /// The sink is untouched when resolution fails.
    pub fn load_into<S>(&self, sink: &S) -> Result<ResolvedConfig, ConfigError>
    where
        S: ConfigSink + ?Sized,
    {
        let config = self.resolve()?;
        sink.apply(&config);
        Ok(config)
    }

    /// Resolve and apply the result to the process-wide SDK configuration.
    pub fn load(&self) -> Result<ResolvedConfig, ConfigError> {
        self.load_into(&GlobalSdkConfig)
    }
}
