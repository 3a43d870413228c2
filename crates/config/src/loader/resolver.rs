//! Precedence resolution for region and credentials.
//!
//! Responsibilities:
//! - Pick the effective profile name.
//! - Pick one region and one credential triple from the candidate sources.
//! - Report every unresolved piece in a single error.
//!
//! Does NOT handle:
//! - Reading the environment or any file (inputs arrive already loaded).
//! - Applying the result (see `sink`).
//!
//! Invariants / Assumptions:
//! - Profile: options > AWS_PROFILE > AWS_DEFAULT_PROFILE > none.
//! - Region: options > AWS_REGION > AWS_DEFAULT_REGION > config-file profile >
//!   secrets-file profile > secrets-file default > implicit default profile.
//! - Credentials: config-file profile > environment > secrets-file profile >
//!   secrets-file default > implicit default profile.
//! - A credential triple always comes from exactly one source.
//! - Output depends only on the inputs; nothing is memoized between calls.

use secrecy::SecretString;

use super::env::EnvironmentSnapshot;
use super::error::{ConfigError, MissingSetting};
use super::profile::ProfileLookup;
use super::secrets::SecretsDocument;
use crate::constants::{
    ENV_ACCESS_KEY_ID, ENV_DEFAULT_PROFILE, ENV_DEFAULT_REGION, ENV_PROFILE, ENV_REGION,
};
use crate::types::settings::non_blank;
use crate::types::{
    LoadOptions, ProfileSettings, ResolvedConfig, SettingSource, StaticCredentials,
};

/// Return the first candidate that holds a value, together with its source.
fn first_present<T>(
    candidates: impl IntoIterator<Item = (SettingSource, Option<T>)>,
) -> Option<(SettingSource, T)> {
    candidates
        .into_iter()
        .find_map(|(source, value)| value.map(|value| (source, value)))
}

/// Inputs for one resolution pass.
pub struct Resolver<'a> {
    options: &'a LoadOptions,
    env: &'a EnvironmentSnapshot,
    profiles: &'a dyn ProfileLookup,
    secrets: Option<&'a SecretsDocument>,
    fallback_profile: Option<&'a str>,
}

impl<'a> Resolver<'a> {
    /// A resolver with no secrets document and no implicit default profile.
    pub fn new(
        options: &'a LoadOptions,
        env: &'a EnvironmentSnapshot,
        profiles: &'a dyn ProfileLookup,
    ) -> Self {
        Self {
            options,
            env,
            profiles,
            secrets: None,
            fallback_profile: None,
        }
    }

    pub fn with_secrets(mut self, secrets: Option<&'a SecretsDocument>) -> Self {
        self.secrets = secrets;
        self
    }

    /// Profile consulted last, after every other source came up empty.
    pub fn with_fallback_profile(mut self, name: Option<&'a str>) -> Self {
        self.fallback_profile = name;
        self
    }

    /// Profile selected by options or environment.
    pub fn effective_profile(&self) -> Option<(SettingSource, String)> {
        first_present([
            (
                SettingSource::Options,
                self.options.profile.clone().and_then(non_blank),
            ),
            (
                SettingSource::Environment(ENV_PROFILE),
                self.env.profile.clone(),
            ),
            (
                SettingSource::Environment(ENV_DEFAULT_PROFILE),
                self.env.default_profile.clone(),
            ),
        ])
    }

    fn env_credentials(&self) -> Option<StaticCredentials> {
        match (&self.env.access_key_id, &self.env.secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => Some(StaticCredentials {
                access_key_id: access_key_id.clone(),
                secret_access_key: SecretString::new(secret_access_key.clone().into()),
                session_token: self
                    .env
                    .session_token
                    .clone()
                    .map(|token| SecretString::new(token.into())),
            }),
            _ => None,
        }
    }

    /// Walk the precedence chains and assemble the result.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let profile = self.effective_profile().map(|(_, name)| name);
        let profile_name = profile.as_deref();

        let config_profile: Option<ProfileSettings> =
            profile_name.and_then(|name| self.profiles.lookup(name));
        let secrets_profile: Option<&ProfileSettings> =
            profile_name.and_then(|name| self.secrets.and_then(|doc| doc.profile(name)));
        let secrets_default: Option<&ProfileSettings> =
            self.secrets.map(SecretsDocument::defaults);
        let fallback: Option<ProfileSettings> =
            self.fallback_profile.and_then(|name| self.profiles.lookup(name));

        // Only reported when the matching lookup produced a value, so a profile exists.
        let named = profile_name.unwrap_or_default();
        let config_source = || SettingSource::ConfigProfile(named.to_string());
        let secrets_source = || SettingSource::SecretsProfile(named.to_string());

        let region = first_present([
            (
                SettingSource::Options,
                self.options.region.clone().and_then(non_blank),
            ),
            (SettingSource::Environment(ENV_REGION), self.env.region.clone()),
            (
                SettingSource::Environment(ENV_DEFAULT_REGION),
                self.env.default_region.clone(),
            ),
            (
                config_source(),
                config_profile.as_ref().and_then(|p| p.region.clone()),
            ),
            (
                secrets_source(),
                secrets_profile.and_then(|p| p.region.clone()),
            ),
            (
                SettingSource::SecretsDefault,
                secrets_default.and_then(|p| p.region.clone()),
            ),
            (
                SettingSource::DefaultProfile,
                fallback.as_ref().and_then(|p| p.region.clone()),
            ),
        ]);

        let credentials = first_present([
            (
                config_source(),
                config_profile.as_ref().and_then(ProfileSettings::credentials),
            ),
            (
                SettingSource::Environment(ENV_ACCESS_KEY_ID),
                self.env_credentials(),
            ),
            (
                secrets_source(),
                secrets_profile.and_then(ProfileSettings::credentials),
            ),
            (
                SettingSource::SecretsDefault,
                secrets_default.and_then(ProfileSettings::credentials),
            ),
            (
                SettingSource::DefaultProfile,
                fallback.as_ref().and_then(ProfileSettings::credentials),
            ),
        ]);

        match (region, credentials) {
            (Some((region_source, region)), Some((credentials_source, credentials))) => {
                tracing::debug!(
                    profile = profile_name.unwrap_or("<none>"),
                    region = %region,
                    region_source = %region_source,
                    credentials_source = %credentials_source,
                    "Resolved AWS configuration"
                );
                Ok(ResolvedConfig {
                    region,
                    credentials,
                    profile,
                    region_source,
                    credentials_source,
                })
            }
            (region, credentials) => {
                let mut missing = Vec::new();
                if region.is_none() {
                    missing.push(MissingSetting::Region);
                }
                if credentials.is_none() {
                    missing.push(MissingSetting::Credentials);
                }
                tracing::debug!(
                    profile = profile_name.unwrap_or("<none>"),
                    ?missing,
                    "AWS configuration unresolved"
                );
                Err(ConfigError::Unresolved { missing })
            }
        }
    }
}
