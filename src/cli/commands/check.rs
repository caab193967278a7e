//! Implementation of the `cfgload check` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{keys, ConfigKey, ResolvedConfig};
use crate::domain::ports::ConfigSource;
use crate::services::ConfigLoader;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Keys that must be set (defaults to PROJECT_NAME INSTANCE_NAME SQL_NAME)
    pub keys: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub source: &'static str,
    pub values: ResolvedConfig,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "All {} required key(s) set ({} source)",
            self.values.len(),
            self.source
        )];
        for (key, value) in self.values.iter() {
            lines.push(format!("  {key}={value}"));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute<S: ConfigSource>(
    args: CheckArgs,
    loader: &ConfigLoader<S>,
    json_mode: bool,
) -> Result<()> {
    let requested: Vec<ConfigKey> = if args.keys.is_empty() {
        keys::REQUIRED.to_vec()
    } else {
        args.keys.into_iter().map(ConfigKey::from).collect()
    };

    let values = loader.load_required(requested)?;
    output(
        &CheckOutput {
            source: loader.source().name(),
            values,
        },
        json_mode,
    );
    Ok(())
}
