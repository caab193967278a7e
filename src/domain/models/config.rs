use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::domain::errors::{ConfigError, ConfigResult};

/// Name of a configuration value, e.g. `PROJECT_NAME`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigKey(Cow<'static, str>);

impl ConfigKey {
    /// Key backed by a string literal, usable in `const` context.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The key name as it is looked up in a source.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ConfigKey {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for ConfigKey {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

/// Recognized configuration keys.
pub mod keys {
    use super::ConfigKey;

    /// Required: project the instance belongs to.
    pub const PROJECT_NAME: ConfigKey = ConfigKey::from_static("PROJECT_NAME");
    /// Required: instance name.
    pub const INSTANCE_NAME: ConfigKey = ConfigKey::from_static("INSTANCE_NAME");
    /// Required: SQL database name.
    pub const SQL_NAME: ConfigKey = ConfigKey::from_static("SQL_NAME");
    /// Optional boolean switch.
    pub const TEST_BOOL: ConfigKey = ConfigKey::from_static("TEST_BOOL");

    /// The required keys, in the order they are checked.
    pub const REQUIRED: [ConfigKey; 3] = [PROJECT_NAME, INSTANCE_NAME, SQL_NAME];
}

/// Required keys resolved to non-empty values.
///
/// Only ever built complete: a `ResolvedConfig` holds every requested key.
/// Entries keep the order in which the keys were requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    entries: Vec<(ConfigKey, String)>,
}

impl ResolvedConfig {
    pub(crate) fn from_entries(entries: Vec<(ConfigKey, String)>) -> Self {
        debug_assert!(entries.iter().all(|(_, value)| !value.is_empty()));
        Self { entries }
    }

    /// Value for `key`, if it was part of the request.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of resolved keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keys were resolved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolved entries in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&ConfigKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Take ownership of the value for `key`.
    pub(crate) fn take(&mut self, key: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(k, _)| k.as_str() == key)?;
        Some(self.entries.remove(idx).1)
    }
}

impl Serialize for ResolvedConfig {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}

/// An optional boolean as found in a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum BoolSetting {
    /// The key is not set at all.
    Unset,
    /// The key holds a recognized boolean literal.
    Value(bool),
    /// The key is set but its value is not a boolean literal.
    ///
    /// Holds the raw value, rendered lossily when it is not valid UTF-8.
    Malformed(String),
}

impl BoolSetting {
    /// Classify a raw lookup result.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Unset,
            Some(value) => parse_bool(value)
                .map_or_else(|| Self::Malformed(value.to_string()), Self::Value),
        }
    }

    /// The boolean, treating unset and malformed values as `false`.
    pub const fn or_false(&self) -> bool {
        matches!(self, Self::Value(true))
    }

    /// The boolean, failing if `key` was unset or malformed.
    pub fn strict(&self, key: &str) -> ConfigResult<bool> {
        match self {
            Self::Value(value) => Ok(*value),
            Self::Unset => Err(ConfigError::NotSet {
                key: key.to_string(),
            }),
            Self::Malformed(value) => Err(ConfigError::NotParseable {
                key: key.to_string(),
                value: value.clone(),
            }),
        }
    }
}

/// Parse a boolean literal.
///
/// Accepted forms, matched exactly (no trimming, no other casings):
///
/// | true   | false   |
/// |--------|---------|
/// | `1`    | `0`     |
/// | `t`    | `f`     |
/// | `T`    | `F`     |
/// | `true` | `false` |
/// | `TRUE` | `FALSE` |
/// | `True` | `False` |
///
/// Everything else, including `yes`, `on` and the empty string, is rejected.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// Typed view over the recognized keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    /// Value of `PROJECT_NAME`
    pub project_name: String,

    /// Value of `INSTANCE_NAME`
    pub instance_name: String,

    /// Value of `SQL_NAME`
    pub sql_name: String,

    /// Value of `TEST_BOOL`, `false` when unset or malformed
    #[serde(default)]
    pub test_bool: bool,
}
