//! Raw data-file records.

use serde::Deserialize;

/// One station record as stored in the timing data file.
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    pub name: String,
    pub code: Vec<String>,
    pub lines: Vec<LineRecord>,
}

/// Last-train timings for one line at a station.
#[derive(Debug, Clone, Deserialize)]
pub struct LineRecord {
    pub line: String,
    pub timings: Vec<TimingRecord>,
}

/// A single destination and its last departure time.
#[derive(Debug, Clone, Deserialize)]
pub struct TimingRecord {
    pub dest: String,
    pub last: String,
}
