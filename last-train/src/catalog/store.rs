//! The loaded station catalog.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{LastTrain, LastTrainTime, Line, LineTimings, Station, StationCode};

use super::dto::{LineRecord, StationRecord};
use super::error::CatalogError;

/// Immutable station lookup, built once at startup.
///
/// Stations keep the order of the data file; ranking relies on it to break
/// ties deterministically.
#[derive(Debug)]
pub struct StationCatalog {
    stations: Vec<Arc<Station>>,
    by_name: HashMap<String, usize>,
}

impl StationCatalog {
    /// Load a catalog from a JSON data file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            stations = catalog.len(),
            "loaded station catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from the JSON text of a data file.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<StationRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Build a catalog from already-deserialized records.
    pub fn from_records(records: Vec<StationRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut stations = Vec::with_capacity(records.len());
        let mut by_name = HashMap::with_capacity(records.len());

        for record in records {
            let station = build_station(record)?;
            if by_name.contains_key(station.name()) {
                return Err(CatalogError::DuplicateStation(station.name().to_string()));
            }
            by_name.insert(station.name().to_string(), stations.len());
            stations.push(Arc::new(station));
        }

        debug!(stations = stations.len(), "built station catalog");
        Ok(Self { stations, by_name })
    }

    /// Look up a station by its exact name.
    ///
    /// No normalization is applied: case and whitespace must match.
    pub fn lookup(&self, name: &str) -> Option<&Arc<Station>> {
        self.by_name.get(name).map(|&idx| &self.stations[idx])
    }

    /// All stations, in data-file order.
    pub fn stations(&self) -> &[Arc<Station>] {
        &self.stations
    }

    /// Station names, in data-file order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.stations.iter().map(|s| s.name())
    }

    /// Number of stations. Never zero.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false: an empty data file is rejected at load time.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Validate one record and convert it into a domain station.
fn build_station(record: StationRecord) -> Result<Station, CatalogError> {
    let StationRecord { name, code, lines } = record;

    if code.is_empty() {
        return Err(CatalogError::NoCodes(name));
    }
    if lines.is_empty() {
        return Err(CatalogError::NoLines(name));
    }

    let codes = code
        .iter()
        .map(|c| StationCode::parse(c))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| CatalogError::StationCode {
            station: name.clone(),
            source,
        })?;

    let mut timings: Vec<LineTimings> = Vec::with_capacity(lines.len());
    for line_record in lines {
        let line_timings = build_line_timings(&name, line_record)?;
        if timings.iter().any(|t| t.line == line_timings.line) {
            return Err(CatalogError::DuplicateLine {
                station: name,
                line: line_timings.line.code().to_string(),
            });
        }
        timings.push(line_timings);
    }

    Ok(Station::new(name, codes, timings))
}

fn build_line_timings(station: &str, record: LineRecord) -> Result<LineTimings, CatalogError> {
    let line = Line::parse(&record.line).map_err(|source| CatalogError::Line {
        station: station.to_string(),
        source,
    })?;

    if record.timings.is_empty() {
        return Err(CatalogError::NoTimings {
            station: station.to_string(),
            line: record.line,
        });
    }

    let departures = record
        .timings
        .into_iter()
        .map(|t| {
            let time = LastTrainTime::parse(&t.last).map_err(|source| CatalogError::Time {
                station: station.to_string(),
                source,
            })?;
            Ok(LastTrain {
                destination: t.dest,
                time,
            })
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;

    Ok(LineTimings { line, departures })
}
