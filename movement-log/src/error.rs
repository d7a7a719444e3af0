// Copyright (c) James Kassemi, SC, US. All rights reserved.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovementLogError {
    #[error("failed to open movement log {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceTimeError {
    #[error("could not parse {value:?} as a reference time")]
    Unparseable { value: String },
    #[error("no reference time could be parsed from {path}")]
    NotInPath { path: String },
}
