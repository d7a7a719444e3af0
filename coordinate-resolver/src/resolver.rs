// Copyright (c) James Kassemi, SC, US. All rights reserved.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use core_types::{MovementEvent, ResolvedPosition};
use log::{debug, info, warn};

use crate::{
    error::{ParseCoordinateError, ResolveError, Result},
    inversion::detect_inversion,
    numeric::{parse_coordinate, parse_optional_coordinate},
    registry,
};

/// A rig never carries more manipulators than this at once.
pub const MAX_MANIPULATORS: usize = 6;
/// How far before the reference date the polarity sample reaches.
pub const RECENT_WINDOW_HOURS: i64 = 24;

/// Resolve positions when the reference instant may not have been found.
pub fn resolve_from(
    log: &[MovementEvent],
    reference_time: Option<NaiveDateTime>,
) -> Result<Vec<ResolvedPosition>> {
    let reference_time = reference_time.ok_or(ResolveError::MissingReferenceTime)?;
    resolve(log, reference_time)
}

/// Position of every manipulator at `reference_time`, taken from its most
/// recent movement strictly before that instant.
///
/// Rows come back sorted by probe label. Manipulators that never moved before
/// the reference instant are left out.
pub fn resolve(
    log: &[MovementEvent],
    reference_time: NaiveDateTime,
) -> Result<Vec<ResolvedPosition>> {
    let reference_date = reference_time.date();
    ensure_coverage(log, reference_date)?;

    let verdict = detect_inversion(recent_z_values(log, reference_date)?);
    let z_inverted = verdict.inverted();
    info!(
        "z-axis inverted={} for {} (zero={}, limit {}={})",
        z_inverted,
        reference_date,
        verdict.zero_count,
        verdict.travel_range.limit(),
        verdict.limit_count
    );

    let latest = latest_before(log, reference_time);
    debug!(
        "{} manipulators moved before {}",
        latest.len(),
        reference_time
    );
    let selected = cap_to_rig(latest);

    let mut rows = selected
        .into_iter()
        .map(|last| position_at(last, reference_time, z_inverted))
        .collect::<Result<Vec<_>>>()?;
    rows.sort_by(|a, b| {
        a.label
            .cmp(&b.label)
            .then_with(|| a.device_name.cmp(&b.device_name))
    });
    Ok(rows)
}

fn ensure_coverage(log: &[MovementEvent], date: NaiveDate) -> Result<()> {
    let covered = log
        .iter()
        .filter_map(|event| event.last_movement_dt)
        .any(|dt| dt.date() == date);
    if covered {
        Ok(())
    } else {
        Err(ResolveError::NoCoverage { date })
    }
}

fn recent_z_values(log: &[MovementEvent], reference_date: NaiveDate) -> Result<Vec<f64>> {
    let window_start = reference_date
        .checked_sub_signed(TimeDelta::hours(RECENT_WINDOW_HOURS))
        .unwrap_or(NaiveDate::MIN);
    log.iter()
        .filter(|event| {
            event
                .last_movement_dt
                .map(|dt| (window_start..=reference_date).contains(&dt.date()))
                .unwrap_or(false)
        })
        // blank z cells carry no vote; garbage is still an error
        .filter_map(|event| {
            parse_optional_coordinate(&event.z)
                .map_err(|source| malformed("z", event, source))
                .transpose()
        })
        .collect()
}

struct LastMovement<'a> {
    event: &'a MovementEvent,
    at: NaiveDateTime,
    first_seen: usize,
}

fn latest_before(
    log: &[MovementEvent],
    reference_time: NaiveDateTime,
) -> HashMap<&str, LastMovement<'_>> {
    let mut latest: HashMap<&str, LastMovement<'_>> = HashMap::new();
    for event in log {
        let Some(at) = event.last_movement_dt else {
            continue;
        };
        if at >= reference_time {
            continue;
        }
        let first_seen = latest.len();
        latest
            .entry(event.device_id())
            .and_modify(|last| {
                // equal timestamps: the later row wins
                if at >= last.at {
                    last.event = event;
                    last.at = at;
                }
            })
            .or_insert(LastMovement {
                event,
                at,
                first_seen,
            });
    }
    latest
}

fn cap_to_rig<'a>(latest: HashMap<&str, LastMovement<'a>>) -> Vec<LastMovement<'a>> {
    let mut selected: Vec<_> = latest.into_values().collect();
    selected.sort_by(|a, b| b.at.cmp(&a.at).then(a.first_seen.cmp(&b.first_seen)));
    if selected.len() > MAX_MANIPULATORS {
        warn!(
            "{} devices moved before the reference time; keeping the {} most recently moved",
            selected.len(),
            MAX_MANIPULATORS
        );
        selected.truncate(MAX_MANIPULATORS);
    }
    selected
}

fn position_at(
    last: LastMovement<'_>,
    reference_time: NaiveDateTime,
    z_inverted: bool,
) -> Result<ResolvedPosition> {
    let event = last.event;
    let required =
        |column, raw: &str| parse_coordinate(raw).map_err(|source| malformed(column, event, source));
    let optional = |column, raw: &str| {
        parse_optional_coordinate(raw).map_err(|source| malformed(column, event, source))
    };
    let x = required("x", &event.x)?;
    let y = required("y", &event.y)?;
    let mut z = required("z", &event.z)?;
    let x_virtual = optional("x_virtual", &event.x_virtual)?;
    let y_virtual = optional("y_virtual", &event.y_virtual)?;
    let z_virtual = optional("z_virtual", &event.z_virtual)?;

    let device = event.device_id();
    if z_inverted {
        z = f64::from(registry::travel_range_for(device)?.limit()) - z;
    }
    let label = registry::label_for(device)?;

    Ok(ResolvedPosition {
        label,
        device_name: device.to_string(),
        x,
        y,
        z,
        x_virtual,
        y_virtual,
        z_virtual,
        last_movement_dt: last.at,
        last_movement_time: seconds(last.at - reference_time),
    })
}

fn malformed(
    column: &'static str,
    event: &MovementEvent,
    source: ParseCoordinateError,
) -> ResolveError {
    ResolveError::MalformedLog {
        column,
        device: event.device_id().to_string(),
        source,
    }
}

fn seconds(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1_000_000_000.0
}
