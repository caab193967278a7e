use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{EnvSource, LayeredSource, SourceOptions};
use crate::domain::errors::ConfigResult;
use crate::domain::ports::ConfigSource;

/// Which backing source to read configuration from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Process environment, read on every lookup
    #[default]
    Env,
    /// YAML files overlaid with the environment
    Layered,
}

impl Backend {
    /// Construct the selected source.
    ///
    /// `options` only applies to [`Backend::Layered`].
    pub fn build(self, options: &SourceOptions) -> ConfigResult<Box<dyn ConfigSource>> {
        debug!(backend = ?self, "building config source");
        match self {
            Self::Env => Ok(Box::new(EnvSource::new())),
            Self::Layered => Ok(Box::new(LayeredSource::load(options)?)),
        }
    }
}
