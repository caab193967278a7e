//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::{check::CheckArgs, flag::FlagArgs};
use crate::infrastructure::config::Backend;
use crate::infrastructure::logging::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "cfgload")]
#[command(about = "cfgload - check required configuration keys", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Where configuration values are read from
    #[arg(long, value_enum, global = true, env = "CFGLOAD_BACKEND", default_value_t = Backend::Env)]
    pub backend: Backend,

    /// YAML config file for the layered backend
    #[arg(long, short, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Log output format
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify that required keys are set and non-empty
    Check(CheckArgs),

    /// Read a boolean key
    Flag(FlagArgs),

    /// Load and print the full application configuration
    Show,
}
