//! Implementation of the `cfgload show` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::AppConfig;
use crate::domain::ports::ConfigSource;
use crate::services::ConfigLoader;

#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub source: &'static str,
    #[serde(flatten)]
    pub config: AppConfig,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        [
            format!("Configuration ({} source)", self.source),
            format!("  project_name:  {}", self.config.project_name),
            format!("  instance_name: {}", self.config.instance_name),
            format!("  sql_name:      {}", self.config.sql_name),
            format!("  test_bool:     {}", self.config.test_bool),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute<S: ConfigSource>(loader: &ConfigLoader<S>, json_mode: bool) -> Result<()> {
    let config = loader.load_app_config()?;
    output(
        &ShowOutput {
            source: loader.source().name(),
            config,
        },
        json_mode,
    );
    Ok(())
}
