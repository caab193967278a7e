//! In-memory configuration source.
//!
//! Used by tests and callers that already hold their values in memory.

use std::collections::HashMap;

use super::ConfigSource;

/// A configuration source backed by a plain map.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    /// Empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, returning the source for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl ConfigSource for MapSource {
    fn name(&self) -> &'static str {
        "map"
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}
