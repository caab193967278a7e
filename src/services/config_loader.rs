//! Required-key and boolean accessors over a [`ConfigSource`].

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::config::{keys, AppConfig, BoolSetting, ConfigKey, ResolvedConfig};
use crate::domain::ports::ConfigSource;

/// Reads configuration through an injected source.
///
/// Holds no state beyond the source itself; every call reads the source
/// afresh and returns transient values.
#[derive(Debug, Clone)]
pub struct ConfigLoader<S> {
    source: S,
}

impl<S: ConfigSource> ConfigLoader<S> {
    /// Create a loader reading from `source`.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// The backing source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Resolve every key in `keys` to a non-empty value.
    ///
    /// Empty values count as missing. All misses are collected before
    /// failing, so the error names every key that needs fixing. Repeated
    /// keys are checked once.
    #[instrument(skip_all, fields(source = self.source.name()))]
    pub fn load_required<I, K>(&self, keys: I) -> ConfigResult<ResolvedConfig>
    where
        I: IntoIterator<Item = K>,
        K: Into<ConfigKey>,
    {
        let mut seen = HashSet::new();
        let mut resolved = Vec::new();
        let mut missing = Vec::new();

        for key in keys {
            let key: ConfigKey = key.into();
            if !seen.insert(key.clone()) {
                debug!(key = %key, "skipping duplicate key");
                continue;
            }

            match self.source.get_string(key.as_str()) {
                Some(value) if !value.is_empty() => {
                    debug!(key = %key, "resolved");
                    resolved.push((key, value));
                }
                _ => {
                    debug!(key = %key, "missing or empty");
                    missing.push(key.as_str().to_string());
                }
            }
        }

        if seen.is_empty() {
            return Err(ConfigError::NoKeysRequested);
        }

        if !missing.is_empty() {
            return Err(ConfigError::MissingConfig { keys: missing });
        }

        Ok(ResolvedConfig::from_entries(resolved))
    }

    /// Tri-state read of a boolean key.
    ///
    /// A key set to an empty string is `Malformed`, not `Unset`. Values
    /// without an exact string form are `Malformed` with a lossy rendering.
    pub fn bool_setting(&self, key: &str) -> BoolSetting {
        if !self.source.has(key) {
            return BoolSetting::Unset;
        }
        match self.source.get_string(key) {
            Some(raw) => BoolSetting::from_raw(Some(&raw)),
            None => BoolSetting::Malformed(self.source.get_lossy(key).unwrap_or_default()),
        }
    }

    /// Read a boolean key, treating any problem as `false`.
    ///
    /// This is a fail-safe-to-off policy: unset and malformed values both
    /// yield `false` and no error is reported. Use [`Self::get_bool_strict`]
    /// or [`Self::bool_setting`] to tell the cases apart.
    pub fn get_bool(&self, key: &str) -> bool {
        let setting = self.bool_setting(key);
        if let BoolSetting::Malformed(raw) = &setting {
            debug!(key, value = %raw, "ignoring malformed bool");
        }
        setting.or_false()
    }

    /// Read a boolean key, failing if it is unset or malformed.
    pub fn get_bool_strict(&self, key: &str) -> ConfigResult<bool> {
        self.bool_setting(key).strict(key)
    }

    /// Load the recognized keys into an [`AppConfig`].
    pub fn load_app_config(&self) -> ConfigResult<AppConfig> {
        let mut resolved = self.load_required(keys::REQUIRED)?;
        let mut take = |key: &ConfigKey| resolved.take(key.as_str()).unwrap_or_default();

        Ok(AppConfig {
            project_name: take(&keys::PROJECT_NAME),
            instance_name: take(&keys::INSTANCE_NAME),
            sql_name: take(&keys::SQL_NAME),
            test_bool: self.get_bool(keys::TEST_BOOL.as_str()),
        })
    }
}
