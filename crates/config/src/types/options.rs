//! Caller-supplied load options.

use std::path::PathBuf;

/// Explicit inputs to a single `load` call.
///
/// Every field is optional. Values set here beat the matching environment
/// variables: `profile` beats `AWS_PROFILE`/`AWS_DEFAULT_PROFILE` and `region`
/// beats `AWS_REGION`/`AWS_DEFAULT_REGION`. `secrets_path` is the only way to
/// activate the secrets-file source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Profile to select from the shared config files and the secrets file.
    pub profile: Option<String>,
    /// Region that overrides every other region source.
    pub region: Option<String>,
    /// Path to a YAML secrets file. The file must exist when set.
    pub secrets_path: Option<PathBuf>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a profile by name.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Force the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Activate the secrets-file source.
    pub fn with_secrets_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.secrets_path = Some(path.into());
        self
    }
}
