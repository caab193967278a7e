//! Output formatting utilities for the CLI.

use serde::Serialize;

use crate::domain::errors::ConfigError;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Render a command failure for stderr.
pub fn format_error(err: &anyhow::Error, json_mode: bool) -> String {
    if !json_mode {
        return format!("Error: {err:#}");
    }

    let mut body = serde_json::json!({ "error": format!("{err:#}") });
    if let Some(config_err) = err.downcast_ref::<ConfigError>() {
        let missing = config_err.missing_keys();
        if !missing.is_empty() {
            body["missing"] = serde_json::json!(missing);
        }
    }
    serde_json::to_string_pretty(&body).unwrap_or_default()
}

/// Print a command failure and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    eprintln!("{}", format_error(&err, json_mode));
    std::process::exit(1)
}
