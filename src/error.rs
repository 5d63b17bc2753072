//! Error and warning types for loading and filtering trip data.

use std::path::PathBuf;

use crate::selection::City;

/// Fatal failures while turning a city's storage file into a [`TripDataset`].
///
/// A load either yields every row or fails; rows are never silently dropped.
///
/// [`TripDataset`]: crate::dataset::TripDataset
#[derive(thiserror::Error, Debug)]
pub enum TripDataError {
    #[error("No trip data for {city} at '{path}': {source}")]
    SourceNotFound {
        city: City,
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed trip record at '{path}' line {line}: {message}")]
    DataFormat {
        path: PathBuf,
        line: u64,
        message: String,
    },
}

/// Non-fatal conditions a dataset carries into the statistics engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TripDataWarning {
    #[error("No trips match the requested filters")]
    EmptyResult,
    #[error("Gender and birth year are not recorded for {0}")]
    OptionalColumnAbsent(City),
}

/// Rejected boundary input for a city, month or day selector.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown city '{0}', expected one of: chicago, new york city, washington")]
    UnknownCity(String),
    #[error("Unknown month '{0}', expected january through june or all")]
    UnknownMonth(String),
    #[error("Unknown day '{0}', expected monday through sunday or all")]
    UnknownDay(String),
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Error reading from '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid source overrides in '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid source overrides in '{path}': {source}")]
    UnknownCity {
        path: PathBuf,
        source: SelectionError,
    },
}
