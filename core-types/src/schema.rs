// Copyright (c) James Kassemi, SC, US. All rights reserved.

//! Arrow schema and batch builder for the resolved probe position table.

use std::sync::Arc;

use arrow::{
    array::{ArrayRef, Float64Array, StringArray},
    datatypes::{DataType, Field, Schema, SchemaRef},
    error::ArrowError,
    record_batch::RecordBatch,
};

use crate::types::ResolvedPosition;

pub fn resolved_position_schema() -> Schema {
    Schema::new(vec![
        Field::new("electrode_group_name", DataType::Utf8, false),
        Field::new("last_movement_dt", DataType::Utf8, false),
        Field::new("device_name", DataType::Utf8, false),
        Field::new("x", DataType::Float64, false),
        Field::new("y", DataType::Float64, false),
        Field::new("z", DataType::Float64, false),
        Field::new("x_virtual", DataType::Float64, true),
        Field::new("y_virtual", DataType::Float64, true),
        Field::new("z_virtual", DataType::Float64, true),
        Field::new("last_movement_time", DataType::Float64, false),
    ])
}

pub fn resolved_positions_batch(rows: &[ResolvedPosition]) -> Result<RecordBatch, ArrowError> {
    let schema: SchemaRef = Arc::new(resolved_position_schema());
    let group = Arc::new(StringArray::from(
        rows.iter()
            .map(|r| r.electrode_group_name())
            .collect::<Vec<_>>(),
    )) as ArrayRef;
    let movement_dt = Arc::new(StringArray::from(
        rows.iter()
            .map(|r| r.last_movement_dt_text())
            .collect::<Vec<_>>(),
    )) as ArrayRef;
    let device = Arc::new(StringArray::from(
        rows.iter()
            .map(|r| r.device_name.clone())
            .collect::<Vec<_>>(),
    )) as ArrayRef;
    let x = Arc::new(Float64Array::from(
        rows.iter().map(|r| r.x).collect::<Vec<_>>(),
    )) as ArrayRef;
    let y = Arc::new(Float64Array::from(
        rows.iter().map(|r| r.y).collect::<Vec<_>>(),
    )) as ArrayRef;
    let z = Arc::new(Float64Array::from(
        rows.iter().map(|r| r.z).collect::<Vec<_>>(),
    )) as ArrayRef;
    let x_virtual = Arc::new(Float64Array::from(
        rows.iter().map(|r| r.x_virtual).collect::<Vec<_>>(),
    )) as ArrayRef;
    let y_virtual = Arc::new(Float64Array::from(
        rows.iter().map(|r| r.y_virtual).collect::<Vec<_>>(),
    )) as ArrayRef;
    let z_virtual = Arc::new(Float64Array::from(
        rows.iter().map(|r| r.z_virtual).collect::<Vec<_>>(),
    )) as ArrayRef;
    let movement_time = Arc::new(Float64Array::from(
        rows.iter()
            .map(|r| r.last_movement_time)
            .collect::<Vec<_>>(),
    )) as ArrayRef;
    let arrays = vec![
        group,
        movement_dt,
        device,
        x,
        y,
        z,
        x_virtual,
        y_virtual,
        z_virtual,
        movement_time,
    ];
    RecordBatch::try_new(schema, arrays)
}
