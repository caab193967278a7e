//! Domain models for configuration loading.

pub mod config;

pub use config::{keys, parse_bool, AppConfig, BoolSetting, ConfigKey, ResolvedConfig};
