// Copyright (c) James Kassemi, SC, US. All rights reserved.

//! Probe coordinates at a reference instant, reconstructed from a NewScale
//! manipulator movement log.
//!
//! - [`registry`]: serial number to probe slot and z travel range.
//! - [`inversion`]: per-file z-axis polarity vote.
//! - [`resolve`]: last movement before the reference instant for each
//!   manipulator, corrected and labelled.

pub mod error;
pub mod inversion;
pub mod numeric;
pub mod registry;
mod resolver;

pub use error::{ParseCoordinateError, ResolveError, Result, UnknownDeviceError};
pub use inversion::{InversionVerdict, detect_inversion, is_z_inverted};
pub use registry::{DeviceSpec, label_for, travel_range_for};
pub use resolver::{MAX_MANIPULATORS, RECENT_WINDOW_HOURS, resolve, resolve_from};
