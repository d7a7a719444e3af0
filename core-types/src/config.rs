// Copyright (c) James Kassemi, SC, US. All rights reserved.

use std::path::PathBuf;

use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "probe-locator.toml";
pub const ENV_PREFIX: &str = "PROBE_LOCATOR";

/// Operator knobs for a probe-locator run. Every field may also come from the
/// command line, which takes precedence.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// NewScale `log.csv` to scan.
    #[serde(default)]
    pub log_path: Option<PathBuf>,
    /// Explicit reference instant; parsed from `log_path` when absent.
    #[serde(default)]
    pub reference_time: Option<String>,
    /// Where to write the resolved table as CSV, if anywhere.
    #[serde(default)]
    pub output_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;
        settings.try_deserialize()
    }

    /// Overlay command-line values on top of file/environment settings.
    pub fn with_overrides(
        mut self,
        log_path: Option<PathBuf>,
        reference_time: Option<String>,
    ) -> Self {
        if log_path.is_some() {
            self.log_path = log_path;
        }
        if reference_time.is_some() {
            self.reference_time = reference_time;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_only_replace_given_values() {
        let base = AppConfig {
            log_path: Some(PathBuf::from("/data/a/log.csv")),
            reference_time: Some("2023-10-23 14:11:05".to_string()),
            output_path: Some(PathBuf::from("out.csv")),
        };
        let merged = base.with_overrides(Some(PathBuf::from("/data/b/log.csv")), None);
        assert_eq!(merged.log_path, Some(PathBuf::from("/data/b/log.csv")));
        assert_eq!(merged.reference_time.as_deref(), Some("2023-10-23 14:11:05"));
        assert_eq!(merged.output_path, Some(PathBuf::from("out.csv")));
    }
}
