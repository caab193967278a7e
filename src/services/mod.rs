//! Service layer: configuration accessors built on the domain ports.

pub mod config_loader;

pub use config_loader::ConfigLoader;
