use std::collections::HashMap;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Yaml};
use figment::value::{Dict, Value};
use figment::Figment;
use tracing::debug;

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::ports::ConfigSource;

/// Default project config file, used when present.
pub const DEFAULT_CONFIG_FILE: &str = "cfgload.yaml";

/// Default local override file, used when present.
pub const DEFAULT_LOCAL_FILE: &str = "cfgload.local.yaml";

/// Files merged by [`LayeredSource::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOptions {
    /// Project config file (optional on disk)
    pub config_file: Option<PathBuf>,

    /// Local overrides merged over the project file (optional on disk)
    pub local_file: Option<PathBuf>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            config_file: Some(PathBuf::from(DEFAULT_CONFIG_FILE)),
            local_file: Some(PathBuf::from(DEFAULT_LOCAL_FILE)),
        }
    }
}

impl SourceOptions {
    /// Only the given config file, no local overrides.
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self {
            config_file: Some(path.as_ref().to_path_buf()),
            local_file: None,
        }
    }

    /// No files at all, environment only.
    pub const fn env_only() -> Self {
        Self {
            config_file: None,
            local_file: None,
        }
    }
}

/// Layered configuration source built on figment
///
/// Precedence (lowest to highest):
/// 1. Project config file (YAML)
/// 2. Local override file (YAML)
/// 3. Environment variables (unprefixed)
///
/// Missing files are skipped; malformed files fail construction. Keys are
/// case-insensitive. The layers are read once, when the source is built.
#[derive(Debug, Clone)]
pub struct LayeredSource {
    values: HashMap<String, Value>,
}

impl LayeredSource {
    /// Merge the configured files and the current environment.
    pub fn load(options: &SourceOptions) -> ConfigResult<Self> {
        let mut figment = Figment::new();
        if let Some(path) = &options.config_file {
            figment = figment.merge(Yaml::file(path));
        }
        if let Some(path) = &options.local_file {
            figment = figment.merge(Yaml::file(path));
        }

        let mut source = Self::from_figment(&figment)?;

        // Raw strings keep values like `007` intact; figment's own Env
        // provider would parse them into numbers.
        let mut overlaid = 0usize;
        for (key, value) in Env::raw().iter() {
            source
                .values
                .insert(key.as_str().to_ascii_lowercase(), Value::from(value));
            overlaid += 1;
        }

        debug!(
            config_file = ?options.config_file,
            local_file = ?options.local_file,
            env_vars = overlaid,
            keys = source.values.len(),
            "layered config source loaded"
        );

        Ok(source)
    }

    /// Snapshot the top-level values of an existing figment.
    pub fn from_figment(figment: &Figment) -> ConfigResult<Self> {
        let dict: Dict = figment
            .extract()
            .map_err(|e| ConfigError::Source(e.to_string()))?;

        let values = dict
            .into_iter()
            .map(|(key, value)| (key.to_ascii_lowercase(), value))
            .collect();

        Ok(Self { values })
    }

    fn find(&self, key: &str) -> Option<&Value> {
        self.values.get(&key.to_ascii_lowercase())
    }
}

/// Render a scalar figment value as a string.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(_, s) => Some(s.clone()),
        Value::Char(_, c) => Some(c.to_string()),
        Value::Bool(_, b) => Some(b.to_string()),
        Value::Num(..) => match serde_json::to_value(value).ok()? {
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        },
        Value::Empty(..) | Value::Dict(..) | Value::Array(..) => None,
    }
}

impl ConfigSource for LayeredSource {
    fn name(&self) -> &'static str {
        "layered"
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.find(key).and_then(scalar_to_string)
    }

    fn has(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    fn get_lossy(&self, key: &str) -> Option<String> {
        let value = self.find(key)?;
        scalar_to_string(value).or_else(|| serde_json::to_string(value).ok())
    }
}
