// Copyright (c) James Kassemi, SC, US. All rights reserved.

//! Static table of known manipulator serial numbers.
//!
//! Four rig generations (NP.0 through NP.3) are listed. Each maps its
//! manipulators onto probe slots A-F; NP.0 has two serials that were both
//! mounted in slot D. Only the NP.0 manipulators have the short z-axis.

use std::collections::HashMap;

use core_types::{ProbeLabel, TravelRange};
use once_cell::sync::Lazy;

use crate::error::UnknownDeviceError;
use ProbeLabel::{A, B, C, D, E, F};
use TravelRange::{Long, Short};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceSpec {
    pub label: ProbeLabel,
    pub travel_range: TravelRange,
}

const KNOWN_DEVICES: &[(&str, ProbeLabel, TravelRange)] = &[
    // NP.0
    ("SN32148", A, Short),
    ("SN32142", B, Short),
    ("SN32144", C, Short),
    ("SN32149", D, Short),
    ("SN24272", D, Long),
    ("SN32135", E, Short),
    ("SN24273", F, Short),
    // NP.1
    ("SN40911", A, Long),
    ("SN40900", B, Long),
    ("SN40912", C, Long),
    ("SN40913", D, Long),
    ("SN40914", E, Long),
    ("SN40910", F, Long),
    // NP.2
    ("SN45356", A, Long),
    ("SN45484", B, Long),
    ("SN45485", C, Long),
    ("SN45359", D, Long),
    ("SN45482", E, Long),
    ("SN45361", F, Long),
    // NP.3
    ("SN40906", A, Long),
    ("SN40908", B, Long),
    ("SN40907", C, Long),
    ("SN41084", D, Long),
    ("SN40903", E, Long),
    ("SN40902", F, Long),
];

static REGISTRY: Lazy<HashMap<&'static str, DeviceSpec>> = Lazy::new(|| {
    KNOWN_DEVICES
        .iter()
        .map(|&(serial, label, travel_range)| {
            (
                serial,
                DeviceSpec {
                    label,
                    travel_range,
                },
            )
        })
        .collect()
});

pub fn spec_for(device_id: &str) -> Result<DeviceSpec, UnknownDeviceError> {
    REGISTRY
        .get(device_id)
        .copied()
        .ok_or_else(|| UnknownDeviceError {
            device: device_id.to_string(),
        })
}

pub fn label_for(device_id: &str) -> Result<ProbeLabel, UnknownDeviceError> {
    spec_for(device_id).map(|spec| spec.label)
}

pub fn travel_range_for(device_id: &str) -> Result<TravelRange, UnknownDeviceError> {
    spec_for(device_id).map(|spec| spec.travel_range)
}

/// Every registered serial with its spec, in table order.
pub fn known_devices() -> impl Iterator<Item = (&'static str, DeviceSpec)> {
    KNOWN_DEVICES.iter().map(|&(serial, label, travel_range)| {
        (
            serial,
            DeviceSpec {
                label,
                travel_range,
            },
        )
    })
}
