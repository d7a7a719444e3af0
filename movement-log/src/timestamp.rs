// Copyright (c) James Kassemi, SC, US. All rights reserved.

use chrono::NaiveDateTime;

// `%.f` also matches an absent fractional part.
const LOG_TIMESTAMP_FORMATS: &[&str] = &[
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S%.f",
];

/// Parse a `last_movement_dt` cell. Blank or unrecognised cells give `None`;
/// the manipulator software writes a few of those at the top of a log.
pub fn parse_log_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    LOG_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}
