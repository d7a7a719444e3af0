// Copyright (c) James Kassemi, SC, US. All rights reserved.

use chrono::{NaiveDate, NaiveDateTime};
use core_types::MovementEvent;

pub fn at(day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 10, day)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .expect("valid fixture timestamp")
}

pub fn row(dt: NaiveDateTime, device: &str, x: f64, y: f64, z: f64) -> MovementEvent {
    MovementEvent {
        last_movement_dt: Some(dt),
        device_name: format!(" {device}"),
        x: format!(" {x}"),
        y: format!(" {y}"),
        z: format!(" {z}"),
        x_virtual: format!(" {x}"),
        y_virtual: format!(" {y}"),
        z_virtual: format!(" {z}"),
    }
}

/// Recording start for the session captured below.
pub fn session_start() -> NaiveDateTime {
    at(23, 14, 11, 5)
}

/// NP.1 rig, logged with the z-axis inverted: every probe is parked at 15000
/// in the morning, then driven in shortly before the recording starts. F is
/// listed first so the input is not already in label order.
pub fn inverted_np1_session() -> Vec<MovementEvent> {
    let devices = [
        ("SN40910", 5570.0, 2100.0, 5875.0),
        ("SN40911", 6278.0, 2500.0, 3920.0),
        ("SN40900", 6943.5, 2400.0, 6427.0),
        ("SN40912", 7451.0, 2300.0, 8500.0),
        ("SN40913", 4709.0, 2200.0, 6893.0),
        ("SN40914", 4657.0, 2000.0, 6962.0),
    ];
    let mut log = Vec::new();
    log.push(MovementEvent {
        device_name: " SN40910".to_string(),
        ..MovementEvent::default()
    });
    for (minute, (device, x, y, _)) in devices.iter().enumerate() {
        log.push(row(at(23, 9, minute as u32, 0), device, *x, *y, 15000.0));
    }
    for (minute, (device, x, y, z)) in devices.iter().enumerate() {
        log.push(row(at(23, 13, 30 + minute as u32, 0), device, *x, *y, *z));
    }
    // after the recording started: must not leak into the result
    for (device, x, y, _) in devices.iter() {
        log.push(row(at(23, 15, 0, 0), device, *x, *y, 15000.0));
    }
    log
}
