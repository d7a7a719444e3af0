// Copyright (c) James Kassemi, SC, US. All rights reserved.

use std::{fs::File, path::Path};

use arrow::{
    csv::WriterBuilder, error::ArrowError, record_batch::RecordBatch,
    util::pretty::pretty_format_batches,
};

pub fn render_table(batch: &RecordBatch) -> Result<String, ArrowError> {
    pretty_format_batches(std::slice::from_ref(batch)).map(|table| table.to_string())
}

pub fn write_csv(path: &Path, batch: &RecordBatch) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().with_header(true).build(file);
    writer.write(batch)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),
}
