//! Shared AWS config file profiles.
//!
//! Responsibilities:
//! - Read `~/.aws/config` and `~/.aws/credentials` (or overridden paths).
//! - Parse them with the AWS SDK's own profile loader.
//! - Answer `lookup(profile_name)` with the profile's `ProfileSettings`.
//!
//! Does NOT handle:
//! - Choosing between profiles or sources (see `resolver.rs`).
//! - Assume-role chains, SSO sessions, or credential processes.
//!
//! Invariants:
//! - A missing file is an empty store, never an error.
//! - A missing profile is `None`, never an error.
//! - Each file is parsed on its own so the two are never merged key by key.
//! - The credentials file's key pair takes precedence over the config file's.
//!   Keys are never combined across the two files.

use std::collections::{BTreeSet, HashMap};
use std::io::ErrorKind;
use std::path::Path;

use aws_config::profile;
use aws_runtime::env_config::file::{EnvConfigFileKind, EnvConfigFiles};
use aws_runtime::env_config::section::{EnvConfigSections, Profile};
use aws_types::os_shim_internal::{Env, Fs};
use secrecy::SecretString;

use super::error::ConfigError;
use crate::constants::{
    CONFIG_FILE_NAME, CREDENTIALS_FILE_NAME, KEY_ACCESS_KEY_ID, KEY_REGION, KEY_SECRET_ACCESS_KEY,
    KEY_SESSION_TOKEN,
};
use crate::types::ProfileSettings;
use crate::types::settings::non_blank;

/// Source of profile settings by name.
pub trait ProfileLookup {
    fn lookup(&self, profile_name: &str) -> Option<ProfileSettings>;
}

impl ProfileLookup for HashMap<String, ProfileSettings> {
    fn lookup(&self, profile_name: &str) -> Option<ProfileSettings> {
        self.get(profile_name).cloned()
    }
}

/// Profiles parsed from the shared config and credentials files.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    config: Option<EnvConfigSections>,
    credentials: Option<EnvConfigSections>,
}

impl ProfileStore {
    /// A store with no profiles.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read both shared files. Either path may be `None` to skip that file.
    pub fn load(
        config_path: Option<&Path>,
        credentials_path: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let config = match config_path {
            Some(path) => read_shared_file(path)?
                .map(|content| parse_sections(content, EnvConfigFileKind::Config, path))
                .transpose()?,
            None => None,
        };
        let credentials = match credentials_path {
            Some(path) => read_shared_file(path)?
                .map(|content| parse_sections(content, EnvConfigFileKind::Credentials, path))
                .transpose()?,
            None => None,
        };

        let store = Self {
            config,
            credentials,
        };
        tracing::debug!(
            profiles = store.profile_names().len(),
            "Loaded shared AWS config profiles"
        );
        Ok(store)
    }

    /// Parse file contents directly, without touching the filesystem.
    pub fn from_contents(config: &str, credentials: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            config: Some(parse_sections(
                config.to_string(),
                EnvConfigFileKind::Config,
                Path::new(CONFIG_FILE_NAME),
            )?),
            credentials: Some(parse_sections(
                credentials.to_string(),
                EnvConfigFileKind::Credentials,
                Path::new(CREDENTIALS_FILE_NAME),
            )?),
        })
    }

    /// Names of every profile defined in either file.
    pub fn profile_names(&self) -> BTreeSet<&str> {
        self.config
            .iter()
            .chain(self.credentials.iter())
            .flat_map(|sections| sections.profiles())
            .collect()
    }

    pub fn contains(&self, profile_name: &str) -> bool {
        find_profile(&self.config, profile_name).is_some()
            || find_profile(&self.credentials, profile_name).is_some()
    }
}

impl ProfileLookup for ProfileStore {
    fn lookup(&self, profile_name: &str) -> Option<ProfileSettings> {
        let config = find_profile(&self.config, profile_name);
        let credentials = find_profile(&self.credentials, profile_name);
        if config.is_none() && credentials.is_none() {
            return None;
        }

        let region = config
            .and_then(|p| value(p, KEY_REGION))
            .or_else(|| credentials.and_then(|p| value(p, KEY_REGION)));

        // Keys come from one file only.
        let key_profile = credentials
            .filter(|p| has_any_key(p))
            .or(config.filter(|p| has_any_key(p)));

        let mut settings = ProfileSettings {
            region,
            ..Default::default()
        };
        if let Some(profile) = key_profile {
            settings.access_key_id = value(profile, KEY_ACCESS_KEY_ID);
            settings.secret_access_key = secret(profile, KEY_SECRET_ACCESS_KEY);
            settings.session_token = secret(profile, KEY_SESSION_TOKEN);
        }
        Some(settings)
    }
}

fn read_shared_file(path: &Path) -> Result<Option<String>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Shared AWS file not present");
            Ok(None)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to read shared AWS file"
            );
            Err(ConfigError::ProfileFileRead {
                path: path.to_path_buf(),
                kind: e.kind(),
            })
        }
    }
}

/// Parse one shared file's contents with the SDK profile loader.
///
/// The contents are handed over in memory, so the loader never touches the
/// real filesystem or environment and its future completes on first poll.
fn parse_sections(
    content: String,
    kind: EnvConfigFileKind,
    path: &Path,
) -> Result<EnvConfigSections, ConfigError> {
    let files = EnvConfigFiles::builder().with_contents(kind, content).build();
    let fs = Fs::from_slice(&[]);
    let env = Env::from_slice(&[]);

    futures::executor::block_on(profile::load(&fs, &env, &files, None)).map_err(|e| {
        tracing::warn!(
            path = %path.display(),
            error = %e,
            "Failed to parse shared AWS file"
        );
        ConfigError::ProfileFileParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })
}

fn find_profile<'a>(
    sections: &'a Option<EnvConfigSections>,
    profile_name: &str,
) -> Option<&'a Profile> {
    sections.as_ref()?.get_profile(profile_name)
}

fn value(profile: &Profile, key: &str) -> Option<String> {
    profile.get(key).map(str::to_string).and_then(non_blank)
}

fn secret(profile: &Profile, key: &str) -> Option<SecretString> {
    value(profile, key).map(|s| SecretString::new(s.into()))
}

fn has_any_key(profile: &Profile) -> bool {
    value(profile, KEY_ACCESS_KEY_ID).is_some() || value(profile, KEY_SECRET_ACCESS_KEY).is_some()
}
