//! Logging infrastructure
//!
//! Structured logging to stderr using tracing and tracing-subscriber.

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::LoggerImpl;
