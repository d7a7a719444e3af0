// Copyright (c) James Kassemi, SC, US. All rights reserved.

//! Shared row types, output schema, and configuration for the probe locator.

pub mod config;
pub mod schema;
pub mod types;

pub use types::{MovementEvent, ProbeLabel, ResolvedPosition, TravelRange};
