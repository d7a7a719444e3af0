// Copyright (c) James Kassemi, SC, US. All rights reserved.

//! Validated parsing of the log's text-encoded coordinates.

use crate::error::ParseCoordinateError;

/// Parse a padded numeric cell. Empty, non-numeric, or non-finite text
/// (`NaN`, `inf`) is an error, never zero.
pub fn parse_coordinate(raw: &str) -> Result<f64, ParseCoordinateError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseCoordinateError {
            value: raw.to_string(),
        })
}

/// Like [`parse_coordinate`], but a blank cell is an absent value.
pub fn parse_optional_coordinate(raw: &str) -> Result<Option<f64>, ParseCoordinateError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_coordinate(raw).map(Some)
}
