//! Domain layer for configuration loading
//!
//! Keys, resolved values and the errors that describe what is missing.
//! Nothing here touches the process environment directly; sources are
//! reached through the `ConfigSource` port.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ConfigError, ConfigResult};
