//! Infrastructure layer module
//!
//! Adapters for the outside world:
//! - Configuration sources (process environment, figment layers)
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
