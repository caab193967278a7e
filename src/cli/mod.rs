//! Command-line interface for checking configuration.

pub mod commands;
pub mod output;
pub mod types;

use anyhow::{Context, Result};

use crate::domain::ports::ConfigSource;
use crate::infrastructure::config::SourceOptions;
use crate::infrastructure::logging::LogConfig;
use crate::services::ConfigLoader;

pub use output::handle_error;
pub use types::{Cli, Commands};

impl Cli {
    /// Logging settings selected by the global flags.
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            format: self.log_format,
        }
    }

    /// Layered-source files selected by the global flags.
    pub fn source_options(&self) -> SourceOptions {
        self.config
            .as_ref()
            .map_or_else(SourceOptions::default, SourceOptions::file)
    }

    /// Build a loader over the selected backend.
    pub fn loader(&self) -> Result<ConfigLoader<Box<dyn ConfigSource>>> {
        let source = self
            .backend
            .build(&self.source_options())
            .context("Failed to initialize configuration source")?;
        Ok(ConfigLoader::new(source))
    }
}

/// Run the parsed command.
pub fn run(cli: Cli) -> Result<()> {
    let loader = cli.loader()?;

    match cli.command {
        Commands::Check(args) => commands::check::execute(args, &loader, cli.json),
        Commands::Flag(args) => commands::flag::execute(args, &loader, cli.json),
        Commands::Show => commands::show::execute(&loader, cli.json),
    }
}
