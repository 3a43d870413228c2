//! Per-source settings block.
//!
//! Responsibilities:
//! - Define `ProfileSettings`, used for config-file profiles and for both the
//!   default block and the per-profile blocks of a secrets document.
//! - Extract a complete credential pair from a block.
//!
//! Does NOT handle:
//! - Choosing between blocks (see `loader::resolver`).
//!
//! Invariants:
//! - All fields are optional; a block may supply only a region or only keys.
//! - Blank values deserialize to `None`.
//! - Numeric and boolean scalars deserialize to their text.
//! - A credential pair is only produced when both keys are present.

use secrecy::SecretString;
use serde::Deserialize;

use super::resolved::StaticCredentials;

/// Deserialization helpers that treat blank strings as absent.
mod blank {
    use std::fmt;

    use secrecy::SecretString;
    use serde::Deserializer;
    use serde::de::{self, Visitor};

    /// Accepts any YAML scalar as text, so unquoted numbers and booleans are
    /// kept as written rather than rejected.
    struct ScalarText;

    impl<'de> Visitor<'de> for ScalarText {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, number, or boolean")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }
    }

    pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = deserializer.deserialize_option(ScalarText)?;
        Ok(value.and_then(super::non_blank))
    }

    pub fn optional_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = optional_string(deserializer)?;
        Ok(value.map(|s| SecretString::new(s.into())))
    }
}

/// Trim a value and drop it when nothing is left.
pub(crate) fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

/// Region and credential settings supplied by one source.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    #[serde(deserialize_with = "blank::optional_string")]
    pub region: Option<String>,
    #[serde(alias = "aws_access_key_id", deserialize_with = "blank::optional_string")]
    pub access_key_id: Option<String>,
    #[serde(
        alias = "aws_secret_access_key",
        deserialize_with = "blank::optional_secret"
    )]
    pub secret_access_key: Option<SecretString>,
    #[serde(alias = "aws_session_token", deserialize_with = "blank::optional_secret")]
    pub session_token: Option<SecretString>,
}

impl ProfileSettings {
    /// The complete credential triple of this block, if it has both keys.
    ///
    /// The session token travels with the pair it was stored next to; it is
    /// never borrowed from another block.
    pub fn credentials(&self) -> Option<StaticCredentials> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => Some(StaticCredentials {
                access_key_id: access_key_id.clone(),
                secret_access_key: secret_access_key.clone(),
                session_token: self.session_token.clone(),
            }),
            _ => None,
        }
    }

    /// Whether the block has both halves of a key pair.
    pub fn has_key_pair(&self) -> bool {
        self.access_key_id.is_some() && self.secret_access_key.is_some()
    }

    /// Whether the block supplies nothing at all.
    pub fn is_empty(&self) -> bool {
        self.region.is_none()
            && self.access_key_id.is_none()
            && self.secret_access_key.is_none()
            && self.session_token.is_none()
    }
}
