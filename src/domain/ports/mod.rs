//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interface configuration backends must implement:
//! - ConfigSource: key lookup and presence checks
//!
//! `MapSource` is an in-memory implementation for tests and fixed values.

pub mod config_source;
pub mod map_source;

pub use config_source::ConfigSource;
pub use map_source::MapSource;
