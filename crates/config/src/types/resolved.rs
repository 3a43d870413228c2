//! Resolver output types.
//!
//! Responsibilities:
//! - Define `ResolvedConfig`, the region + credential triple produced by one load.
//! - Define `SettingSource`, recording which source won each piece.
//! - Convert the result into AWS SDK types (`Region`, `Credentials`, `SdkConfig`).
//!
//! Does NOT handle:
//! - Choosing sources (see `loader::resolver`).
//! - Storing results in process-wide state (see `sink`).
//!
//! Invariants:
//! - `region`, `access_key_id` and `secret_access_key` are non-empty once built
//!   by the resolver.
//! - `Debug` output never contains the secret access key or the session token.

use std::fmt;

use aws_credential_types::Credentials;
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_types::SdkConfig;
use aws_types::region::Region;
use secrecy::{ExposeSecret, SecretString};

use crate::constants::{CREDENTIALS_PROVIDER_NAME, DEFAULT_PROFILE_NAME};

/// A static access key pair with an optional session token.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: SecretString,
    pub session_token: Option<SecretString>,
}

impl PartialEq for StaticCredentials {
    fn eq(&self, other: &Self) -> bool {
        self.access_key_id == other.access_key_id
            && self.secret_access_key.expose_secret() == other.secret_access_key.expose_secret()
            && self.session_token.as_ref().map(|t| t.expose_secret())
                == other.session_token.as_ref().map(|t| t.expose_secret())
    }
}

impl Eq for StaticCredentials {}

impl StaticCredentials {
    /// Build the SDK credentials object installed by the sinks.
    pub fn to_sdk_credentials(&self) -> Credentials {
        Credentials::new(
            self.access_key_id.clone(),
            self.secret_access_key.expose_secret().to_string(),
            self.session_token
                .as_ref()
                .map(|token| token.expose_secret().to_string()),
            None,
            CREDENTIALS_PROVIDER_NAME,
        )
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    /// Explicit `LoadOptions` field.
    Options,
    /// A named environment variable (or variable group for credentials).
    Environment(&'static str),
    /// A profile in the shared config/credentials files.
    ConfigProfile(String),
    /// A per-profile block of the secrets file.
    SecretsProfile(String),
    /// The flat default block of the secrets file.
    SecretsDefault,
    /// The implicit `default` profile of the shared config files.
    DefaultProfile,
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Options => write!(f, "options"),
            Self::Environment(var) => write!(f, "env:{var}"),
            Self::ConfigProfile(name) => write!(f, "config-profile:{name}"),
            Self::SecretsProfile(name) => write!(f, "secrets-profile:{name}"),
            Self::SecretsDefault => write!(f, "secrets-default"),
            Self::DefaultProfile => write!(f, "config-profile:{DEFAULT_PROFILE_NAME}"),
        }
    }
}

/// The final region and credentials selected by one load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub region: String,
    pub credentials: StaticCredentials,
    /// Profile chosen from options or environment, if any.
    pub profile: Option<String>,
    pub region_source: SettingSource,
    pub credentials_source: SettingSource,
}

impl ResolvedConfig {
    pub fn sdk_region(&self) -> Region {
        Region::new(self.region.clone())
    }

    /// Build a standalone `SdkConfig` carrying this region and static credentials.
    pub fn to_sdk_config(&self) -> SdkConfig {
        SdkConfig::builder()
            .region(self.sdk_region())
            .credentials_provider(SharedCredentialsProvider::new(
                self.credentials.to_sdk_credentials(),
            ))
            .build()
    }
}
