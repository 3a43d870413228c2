//! Configuration type definitions for awsecrets.
//!
//! Responsibilities:
//! - Define the caller-facing `LoadOptions`.
//! - Define `ProfileSettings`, the shape shared by config-file profiles and
//!   secrets-file blocks.
//! - Define the resolver output (`ResolvedConfig`, `StaticCredentials`) and the
//!   record of which source produced each piece (`SettingSource`).
//!
//! Does NOT handle:
//! - Reading any source (see `loader` module).
//! - Applying results to SDK state (see `sink` module).
//!
//! Invariants:
//! - Secret access keys and session tokens are always `secrecy::SecretString`.
//! - Blank strings never survive into these types; readers normalize them to `None`.

mod options;
mod resolved;
pub(crate) mod settings;

pub use options::LoadOptions;
pub use resolved::{ResolvedConfig, SettingSource, StaticCredentials};
pub use settings::ProfileSettings;
