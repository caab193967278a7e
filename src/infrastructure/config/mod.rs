//! Configuration source infrastructure
//!
//! Implementations of the `ConfigSource` port:
//! - Direct process environment
//! - Layered YAML files + environment using figment
//! - Backend selection at construction time

pub mod backend;
pub mod env_source;
pub mod layered_source;

pub use backend::Backend;
pub use env_source::EnvSource;
pub use layered_source::{LayeredSource, SourceOptions, DEFAULT_CONFIG_FILE, DEFAULT_LOCAL_FILE};
