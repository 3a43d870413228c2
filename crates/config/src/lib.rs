//! AWS region and credential resolution.
//!
//! This crate merges explicit options, `AWS_*` environment variables, the
//! shared `~/.aws/config` and `~/.aws/credentials` files, and an optional YAML
//! secrets file into one region and one static credential triple, then
//! applies the result to a process-wide AWS SDK configuration.
//!
//! ```no_run
//! use awsecrets_config::{GlobalSdkConfig, LoadOptions};
//!
//! let resolved = awsecrets_config::load(LoadOptions::new().with_profile("dev"))?;
//! assert_eq!(GlobalSdkConfig::region().as_ref().map(|r| r.as_ref()), Some(resolved.region.as_str()));
//! # Ok::<(), awsecrets_config::ConfigError>(())
//! ```

pub mod constants;
mod loader;
pub mod sink;
pub mod types;

pub use loader::{
    ConfigError, EnvironmentSnapshot, MissingSetting, ProfileLookup, ProfileStore, Resolver,
    SecretsDocument, SecretsLoader, env_var_or_none,
};
pub use sink::{ConfigSink, GlobalSdkConfig, MemorySink};
pub use types::{LoadOptions, ProfileSettings, ResolvedConfig, SettingSource, StaticCredentials};

/// Resolve configuration for `options` and apply it to [`GlobalSdkConfig`].
///
/// Nothing is applied when this returns an error.
pub fn load(options: LoadOptions) -> Result<ResolvedConfig, ConfigError> {
    SecretsLoader::new().with_options(options).load()
}
