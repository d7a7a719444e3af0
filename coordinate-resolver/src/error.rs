// Copyright (c) James Kassemi, SC, US. All rights reserved.

use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

/// A serial number missing from the registry. The table in `registry.rs` must
/// be updated before this log can be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{device:?} is not a known manipulator serial number; the device registry needs updating")]
pub struct UnknownDeviceError {
    pub device: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{value:?} is not a number")]
pub struct ParseCoordinateError {
    pub value: String,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no movement data found for experiment date {date}")]
    NoCoverage { date: NaiveDate },
    #[error(transparent)]
    UnknownDevice(#[from] UnknownDeviceError),
    #[error("malformed {column} value for device {device:?}: {source}")]
    MalformedLog {
        column: &'static str,
        device: String,
        #[source]
        source: ParseCoordinateError,
    },
    #[error("a reference time is required: none was supplied and none could be derived")]
    MissingReferenceTime,
}
