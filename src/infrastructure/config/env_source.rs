//! Direct process-environment source.

use std::env;

use crate::domain::ports::ConfigSource;

/// Reads keys straight from the process environment on every lookup.
///
/// Values that are not valid UTF-8 count as set for [`ConfigSource::has`]
/// but have no string value.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl EnvSource {
    /// Create the source.
    pub const fn new() -> Self {
        Self
    }
}

impl ConfigSource for EnvSource {
    fn name(&self) -> &'static str {
        "env"
    }

    fn get_string(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn has(&self, key: &str) -> bool {
        env::var_os(key).is_some()
    }

    fn get_lossy(&self, key: &str) -> Option<String> {
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}
