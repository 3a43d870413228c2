//! Configuration loader for region and credential sources.
//!
//! Responsibilities:
//! - Capture the AWS environment variables, read the shared AWS files, and read
//!   the optional secrets file.
//! - Resolve one region and one credential triple by precedence.
//! - Provide a builder-pattern `SecretsLoader` that ties the sources to a sink.
//!
//! Does NOT handle:
//! - Storing the result (see `sink`).
//!
//! Invariants / Assumptions:
//! - Options take precedence over environment variables for region and profile.
//! - An explicitly selected profile takes precedence over environment credentials.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod path;
mod profile;
mod resolver;
mod secrets;

#[cfg(test)]
mod tests;

pub use builder::SecretsLoader;
pub use env::{EnvironmentSnapshot, env_var_or_none};
pub use error::{ConfigError, MissingSetting};
pub use profile::{ProfileLookup, ProfileStore};
pub use resolver::Resolver;
pub use secrets::SecretsDocument;
