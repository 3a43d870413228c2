//! Secrets file loading.
//!
//! Responsibilities:
//! - Load an optional YAML secrets file into a `SecretsDocument`.
//! - Expose the flat default block and the per-profile blocks.
//!
//! Does NOT handle:
//! - Deciding when a block applies (see `resolver.rs`).
//!
//! Invariants:
//! - No path means no document; a path that does not exist is `FileNotFound`.
//! - An empty file is an empty document.
//! - Parse errors never echo file content, only serde's location message.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use serde::de;
use serde_yaml::Value;

use super::error::ConfigError;
use crate::types::ProfileSettings;

/// Top-level key holding the per-profile blocks.
const PROFILES_KEY: &str = "profiles";

/// A local secrets file: a default block plus per-profile overrides.
///
/// ```yaml
/// region: us-east-1
/// access_key_id: AKID
/// secret_access_key: SECRET
/// profiles:
///   production:
///     region: eu-west-1
/// ```
#[derive(Debug, Clone, Default)]
pub struct SecretsDocument {
    defaults: ProfileSettings,
    profiles: BTreeMap<String, ProfileSettings>,
}

impl SecretsDocument {
    /// Load the document at `path`, or return `None` when no path is configured.
    pub fn load(path: Option<&Path>) -> Result<Option<Self>, ConfigError> {
        let Some(path) = path else {
            return Ok(None);
        };

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_path_buf(),
            },
            kind => ConfigError::SecretsFileRead {
                path: path.to_path_buf(),
                kind,
            },
        })?;

        let document = Self::parse(&content).map_err(|e| ConfigError::MalformedSecretsDocument {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::debug!(
            path = %path.display(),
            profiles = document.profiles.len(),
            "Loaded secrets document"
        );
        Ok(Some(document))
    }

    /// Parse YAML content. Empty or comment-only input yields an empty document.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        let mut value: Value = serde_yaml::from_str(content)?;
        if value.is_null() {
            return Ok(Self::default());
        }

        let mapping = value
            .as_mapping_mut()
            .ok_or_else(|| {
                <serde_yaml::Error as de::Error>::custom("expected a mapping at the top level")
            })?;

        let profiles = match mapping.remove(PROFILES_KEY) {
            Some(Value::Null) | None => BTreeMap::new(),
            Some(Value::Mapping(blocks)) => {
                if blocks.values().any(|block| !block.is_mapping() && !block.is_null()) {
                    return Err(de::Error::custom("each profile must be a mapping"));
                }
                serde_yaml::from_value(Value::Mapping(blocks))?
            }
            Some(_) => return Err(de::Error::custom("`profiles` must be a mapping")),
        };
        let defaults = serde_yaml::from_value(value)?;

        Ok(Self { defaults, profiles })
    }

    /// The flat, non-profile block.
    pub fn defaults(&self) -> &ProfileSettings {
        &self.defaults
    }

    /// The block for `profile_name`, if the document has one.
    pub fn profile(&self, profile_name: &str) -> Option<&ProfileSettings> {
        self.profiles.get(profile_name)
    }

    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}
