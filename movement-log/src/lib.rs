// Copyright (c) James Kassemi, SC, US. All rights reserved.

//! Loader for the NewScale manipulator `log.csv` and the reference-time
//! parsers that accompany it.

mod error;
mod reference;
mod timestamp;

pub use error::{MovementLogError, ReferenceTimeError};
pub use reference::{parse_reference_time, reference_time_from_path};
pub use timestamp::parse_log_timestamp;

use std::{fs::File, io::Read, path::Path};

use core_types::MovementEvent;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};

/// Column order of the log. The file's own header row is ignored.
pub const MOVEMENT_LOG_COLUMNS: [&str; 8] = [
    "last_movement_dt",
    "device_name",
    "x",
    "y",
    "z",
    "x_virtual",
    "y_virtual",
    "z_virtual",
];

/// Read a movement log from disk. An empty file is an empty log, not an error.
pub fn load_movement_log(path: &Path) -> Result<Vec<MovementEvent>, MovementLogError> {
    let file = File::open(path).map_err(|source| MovementLogError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let events = read_movement_log(file)?;
    info!(
        "[movement-log] loaded {} rows from {}",
        events.len(),
        path.display()
    );
    Ok(events)
}

pub fn read_movement_log<R: Read>(reader: R) -> Result<Vec<MovementEvent>, MovementLogError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(reader);
    let header_width = csv_reader.headers()?.len();
    if header_width > 0 && header_width != MOVEMENT_LOG_COLUMNS.len() {
        warn!(
            "[movement-log] header has {} columns, expected {} ({}); reading by position",
            header_width,
            MOVEMENT_LOG_COLUMNS.len(),
            MOVEMENT_LOG_COLUMNS.join(", ")
        );
    }
    let mut events = Vec::new();
    let mut null_timestamps = 0usize;
    for record in csv_reader.records() {
        let event = event_from_record(&record?);
        if event.last_movement_dt.is_none() {
            null_timestamps += 1;
        }
        events.push(event);
    }
    if null_timestamps > 0 {
        debug!(
            "[movement-log] {} of {} rows have no usable timestamp",
            null_timestamps,
            events.len()
        );
    }
    Ok(events)
}

fn event_from_record(record: &StringRecord) -> MovementEvent {
    let cell = |column: &str| {
        column_index(column)
            .and_then(|idx| record.get(idx))
            .unwrap_or_default()
            .to_string()
    };
    MovementEvent {
        last_movement_dt: parse_log_timestamp(&cell("last_movement_dt")),
        device_name: cell("device_name"),
        x: cell("x"),
        y: cell("y"),
        z: cell("z"),
        x_virtual: cell("x_virtual"),
        y_virtual: cell("y_virtual"),
        z_virtual: cell("z_virtual"),
    }
}

fn column_index(column: &str) -> Option<usize> {
    MOVEMENT_LOG_COLUMNS.iter().position(|name| *name == column)
}
