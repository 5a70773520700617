//! Catalog loading error types.

use std::path::PathBuf;

use crate::domain::{InvalidLastTrainTime, InvalidLine, InvalidStationCode};

/// Errors that make a timing data file unusable.
///
/// Any of these aborts loading; a partially valid file never produces a
/// catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The data file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON or a required field is missing
    #[error("malformed timing data: {0}")]
    Json(#[from] serde_json::Error),

    /// The file contains no stations
    #[error("timing data contains no stations")]
    Empty,

    /// Two records share a station name
    #[error("duplicate station name: {0:?}")]
    DuplicateStation(String),

    /// A station record has no codes
    #[error("station {0:?} has no station codes")]
    NoCodes(String),

    /// A station record has no line timings
    #[error("station {0:?} has no line timings")]
    NoLines(String),

    /// A line appears twice in one station record
    #[error("station {station:?} lists line {line} more than once")]
    DuplicateLine { station: String, line: String },

    /// A line record has no destinations
    #[error("station {station:?} has no timings for line {line}")]
    NoTimings { station: String, line: String },

    /// A station code could not be parsed
    #[error("station {station:?}: {source}")]
    StationCode {
        station: String,
        #[source]
        source: InvalidStationCode,
    },

    /// A line key is not a known line
    #[error("station {station:?}: {source}")]
    Line {
        station: String,
        #[source]
        source: InvalidLine,
    },

    /// A last-train time could not be parsed
    #[error("station {station:?}: {source}")]
    Time {
        station: String,
        #[source]
        source: InvalidLastTrainTime,
    },
}
