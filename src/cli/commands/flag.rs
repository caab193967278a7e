//! Implementation of the `cfgload flag` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::BoolSetting;
use crate::domain::ports::ConfigSource;
use crate::services::ConfigLoader;

#[derive(Args, Debug)]
pub struct FlagArgs {
    /// Boolean key to read
    #[arg(default_value = "TEST_BOOL")]
    pub key: String,

    /// Fail when the key is unset or not a boolean instead of reporting false
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
pub struct FlagOutput {
    pub key: String,
    pub value: bool,
    pub setting: BoolSetting,
}

impl CommandOutput for FlagOutput {
    fn to_human(&self) -> String {
        match &self.setting {
            BoolSetting::Value(_) => format!("{}={}", self.key, self.value),
            BoolSetting::Unset => format!("{}={} (unset)", self.key, self.value),
            BoolSetting::Malformed(raw) => {
                format!("{}={} (ignored malformed value {raw:?})", self.key, self.value)
            }
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Read the key once and derive both the reported value and its state.
pub fn evaluate<S: ConfigSource>(
    args: &FlagArgs,
    loader: &ConfigLoader<S>,
) -> Result<FlagOutput> {
    let setting = loader.bool_setting(&args.key);
    let value = if args.strict {
        setting.strict(&args.key)?
    } else {
        setting.or_false()
    };

    Ok(FlagOutput {
        key: args.key.clone(),
        value,
        setting,
    })
}

pub fn execute<S: ConfigSource>(
    args: FlagArgs,
    loader: &ConfigLoader<S>,
    json_mode: bool,
) -> Result<()> {
    output(&evaluate(&args, loader)?, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ConfigError;
    use crate::domain::ports::MapSource;

    fn args(key: &str, strict: bool) -> FlagArgs {
        FlagArgs {
            key: key.to_string(),
            strict,
        }
    }

    #[test]
    fn test_permissive_malformed_reports_false() {
        let loader = ConfigLoader::new(MapSource::new().with("TEST_BOOL", "notabool"));

        let out = evaluate(&args("TEST_BOOL", false), &loader).unwrap();
        assert!(!out.value);
        assert_eq!(out.setting, BoolSetting::Malformed("notabool".to_string()));
        assert!(out.to_human().contains("ignored malformed value"));
    }

    #[test]
    fn test_strict_unset_fails() {
        let loader = ConfigLoader::new(MapSource::new());

        let err = evaluate(&args("TEST_BOOL", true), &loader).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::NotSet {
                key: "TEST_BOOL".to_string()
            })
        );
    }

    #[test]
    fn test_value_and_setting_agree() {
        let loader = ConfigLoader::new(MapSource::new().with("DEBUG", "T"));

        let out = evaluate(&args("DEBUG", true), &loader).unwrap();
        assert!(out.value);
        assert_eq!(out.setting, BoolSetting::Value(true));
        assert_eq!(out.to_json()["setting"]["state"], "value");
        assert_eq!(out.to_human(), "DEBUG=true");
    }
}
