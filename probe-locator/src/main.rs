// Copyright (c) James Kassemi, SC, US. All rights reserved.

mod config;
mod output;

use std::{env, process};

use arrow::error::ArrowError;
use coordinate_resolver::{ResolveError, registry, resolve_from};
use core_types::schema::resolved_positions_batch;
use log::{debug, info};
use movement_log::{MovementLogError, load_movement_log};
use thiserror::Error;

use crate::{
    config::{ConfigError, RunConfig},
    output::{OutputError, render_table, write_csv},
};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("probe-locator failed: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = RunConfig::from_args(env::args().skip(1))?;
    match config.reference_time {
        Some(reference) => info!(
            "resolving {} at {}",
            config.log_path.display(),
            reference
        ),
        None => info!(
            "resolving {} without a reference time",
            config.log_path.display()
        ),
    }

    debug!(
        "device registry knows {} manipulators",
        registry::known_devices().count()
    );

    let log = load_movement_log(&config.log_path)?;
    let positions = resolve_from(&log, config.reference_time)?;
    let batch = resolved_positions_batch(&positions)?;
    println!("{}", render_table(&batch)?);

    if let Some(path) = &config.output_path {
        write_csv(path, &batch)?;
        info!("wrote {} probe positions to {}", positions.len(), path.display());
    }
    Ok(())
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    MovementLog(#[from] MovementLogError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),
    #[error(transparent)]
    Output(#[from] OutputError),
}
