//! cfgload - required-key configuration loading
//!
//! Reads a set of required string keys and optional boolean switches from a
//! backing source, reporting every missing or malformed key in one error.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): keys, resolved values, errors and the `ConfigSource` port
//! - **Service Layer** (`services`): the `ConfigLoader` accessors
//! - **Infrastructure Layer** (`infrastructure`): environment and figment sources, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use cfgload::domain::models::keys;
//! use cfgload::infrastructure::config::EnvSource;
//! use cfgload::ConfigLoader;
//!
//! fn main() -> anyhow::Result<()> {
//!     let loader = ConfigLoader::new(EnvSource::new());
//!     let resolved = loader.load_required(keys::REQUIRED)?;
//!     let debug = loader.get_bool("TEST_BOOL");
//!     println!("{:?} debug={debug}", resolved.get("PROJECT_NAME"));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{AppConfig, BoolSetting, ConfigKey, ResolvedConfig};
pub use domain::ports::{ConfigSource, MapSource};
pub use domain::{ConfigError, ConfigResult};
pub use infrastructure::config::{Backend, EnvSource, LayeredSource, SourceOptions};
pub use services::ConfigLoader;
