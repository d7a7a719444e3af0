// Copyright (c) James Kassemi, SC, US. All rights reserved.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use core_types::config::AppConfig;
use log::warn;
use movement_log::{ReferenceTimeError, parse_reference_time, reference_time_from_path};
use thiserror::Error;

/// Settings for one run, after command-line arguments are applied over
/// `probe-locator.toml` and `PROBE_LOCATOR_*` environment variables.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub log_path: PathBuf,
    pub reference_time: Option<NaiveDateTime>,
    pub output_path: Option<PathBuf>,
}

impl RunConfig {
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        Self::resolve(AppConfig::load()?, args)
    }

    fn resolve<I>(base: AppConfig, args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let log_path = args.next().map(PathBuf::from);
        let reference = args.next();
        if args.next().is_some() {
            return Err(ConfigError::Usage);
        }
        let settings = base.with_overrides(log_path, reference);
        let log_path = settings.log_path.ok_or(ConfigError::Usage)?;
        let reference_time = match settings.reference_time.as_deref() {
            Some(explicit) => Some(parse_reference_time(explicit)?),
            None => match reference_time_from_path(&log_path) {
                Ok(reference) => Some(reference),
                Err(err) => {
                    warn!("{err}; pass a reference time explicitly");
                    None
                }
            },
        };
        Ok(Self {
            log_path,
            reference_time,
            output_path: settings.output_path,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("usage: probe-locator <log.csv> [reference-time]")]
    Usage,
    #[error("failed to load settings: {0}")]
    Settings(#[from] ::config::ConfigError),
    #[error(transparent)]
    ReferenceTime(#[from] ReferenceTimeError),
}
