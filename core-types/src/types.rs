// Copyright (c) James Kassemi, SC, US. All rights reserved.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format used when a movement timestamp is handed downstream as text.
pub const MOVEMENT_DT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Logical mounting slot of a probe, independent of the manipulator serial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProbeLabel {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl ProbeLabel {
    pub fn letter(self) -> char {
        match self {
            ProbeLabel::A => 'A',
            ProbeLabel::B => 'B',
            ProbeLabel::C => 'C',
            ProbeLabel::D => 'D',
            ProbeLabel::E => 'E',
            ProbeLabel::F => 'F',
        }
    }

    /// Name used for the electrode group in downstream tables, e.g. `probeA`.
    pub fn electrode_group_name(self) -> String {
        format!("probe{}", self.letter())
    }
}

impl fmt::Display for ProbeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Z-axis travel class of a manipulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelRange {
    Short,
    Long,
}

impl TravelRange {
    pub const SHORT_LIMIT: u32 = 6_000;
    pub const LONG_LIMIT: u32 = 15_000;

    pub fn limit(self) -> u32 {
        match self {
            TravelRange::Short => Self::SHORT_LIMIT,
            TravelRange::Long => Self::LONG_LIMIT,
        }
    }
}

/// One row of the manipulator movement log, exactly as it was read.
///
/// Coordinates stay textual here; the log pads them with whitespace and the
/// resolver owns the decision of what counts as a valid number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementEvent {
    pub last_movement_dt: Option<NaiveDateTime>,
    pub device_name: String,
    pub x: String,
    pub y: String,
    pub z: String,
    pub x_virtual: String,
    pub y_virtual: String,
    pub z_virtual: String,
}

impl MovementEvent {
    /// Device identifier with the log's incidental padding removed.
    pub fn device_id(&self) -> &str {
        self.device_name.trim()
    }
}

/// Position of one probe at the reference instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPosition {
    pub label: ProbeLabel,
    pub device_name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub x_virtual: Option<f64>,
    pub y_virtual: Option<f64>,
    pub z_virtual: Option<f64>,
    pub last_movement_dt: NaiveDateTime,
    /// Seconds from the reference instant back to the movement; never positive.
    pub last_movement_time: f64,
}

impl ResolvedPosition {
    pub fn electrode_group_name(&self) -> String {
        self.label.electrode_group_name()
    }

    pub fn last_movement_dt_text(&self) -> String {
        self.last_movement_dt.format(MOVEMENT_DT_FORMAT).to_string()
    }
}
