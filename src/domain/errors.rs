//! Domain errors for configuration loading.

use thiserror::Error;

/// Format a key list as `[A B C]`.
fn format_key_list(keys: &[String]) -> String {
    format!("[{}]", keys.join(" "))
}

/// Errors produced while reading configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more required keys were absent or empty.
    #[error("{} required", format_key_list(keys))]
    MissingConfig {
        /// Every missing key, in request order, without duplicates.
        keys: Vec<String>,
    },

    /// An optional key was never provided (strict accessors only).
    #[error("{key} not set")]
    NotSet {
        /// The key that was looked up.
        key: String,
    },

    /// A key was provided but its value could not be read as a boolean.
    #[error("{key} not parseable bool")]
    NotParseable {
        /// The key that was looked up.
        key: String,
        /// The raw value found in the source.
        value: String,
    },

    /// `load_required` was called without any keys.
    #[error("No configuration keys requested")]
    NoKeysRequested,

    /// The backing source could not be constructed.
    #[error("Configuration source error: {0}")]
    Source(String),
}

impl ConfigError {
    /// Keys reported as missing, empty for every other variant.
    pub fn missing_keys(&self) -> &[String] {
        match self {
            Self::MissingConfig { keys } => keys,
            _ => &[],
        }
    }
}

/// Result alias for configuration reads.
pub type ConfigResult<T> = Result<T, ConfigError>;
