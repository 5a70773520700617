//! Station types.

use std::fmt;

use super::{LastTrainTime, Line};

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code {code:?}: {reason}")]
pub struct InvalidStationCode {
    code: String,
    reason: &'static str,
}

/// A station code as printed on the network map, e.g. `NS24` or `EW24`.
///
/// The first two characters name the line. Two-character codes are the
/// exception: they belong to the Sentosa monorail, whose line code is a
/// single character.
///
/// # Examples
///
/// ```
/// use last_train::domain::{Line, StationCode};
///
/// let code = StationCode::parse("EW24").unwrap();
/// assert_eq!(code.as_str(), "EW24");
/// assert_eq!(code.line(), Line::EastWest);
///
/// let monorail = StationCode::parse("SW").unwrap();
/// assert_eq!(monorail.line(), Line::Sentosa);
///
/// assert!(StationCode::parse("XX9").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationCode {
    raw: String,
    line: Line,
}

impl StationCode {
    /// Parse a station code, resolving its line.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let invalid = |reason| InvalidStationCode {
            code: s.to_string(),
            reason,
        };

        let line = match s.chars().count() {
            0 | 1 => return Err(invalid("must be at least 2 characters")),
            2 => Line::Sentosa,
            _ => {
                let prefix = s
                    .get(..2)
                    .ok_or_else(|| invalid("line prefix must be ASCII"))?;
                Line::parse(prefix).map_err(|_| invalid("unknown line prefix"))?
            }
        };

        Ok(Self {
            raw: s.to_string(),
            line,
        })
    }

    /// Returns the code exactly as it appeared in the data file.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The line this code belongs to.
    pub fn line(&self) -> Line {
        self.line
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.raw)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// The last departure towards one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastTrain {
    pub destination: String,
    pub time: LastTrainTime,
}

/// All last departures for one line at a station, in data-file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTimings {
    pub line: Line,
    pub departures: Vec<LastTrain>,
}

/// A station with its codes and last-train timings.
///
/// Stations are only built by the catalog loader, which guarantees that
/// `codes` and `timings` are non-empty and that each line appears at most
/// once in `timings`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    name: String,
    codes: Vec<StationCode>,
    timings: Vec<LineTimings>,
}

impl Station {
    pub(crate) fn new(name: String, codes: Vec<StationCode>, timings: Vec<LineTimings>) -> Self {
        Self {
            name,
            codes,
            timings,
        }
    }

    /// The station's display name, which is also its catalog key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Station codes, in data-file order.
    pub fn codes(&self) -> &[StationCode] {
        &self.codes
    }

    /// Timings per line, in data-file order.
    pub fn timings(&self) -> &[LineTimings] {
        &self.timings
    }

    /// Timings for a single line, if the station has any.
    pub fn timings_for(&self, line: Line) -> Option<&LineTimings> {
        self.timings.iter().find(|t| t.line == line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_standard_codes() {
        assert_eq!(StationCode::parse("NS1").unwrap().line(), Line::NorthSouth);
        assert_eq!(StationCode::parse("EW24").unwrap().line(), Line::EastWest);
        assert_eq!(StationCode::parse("CG1").unwrap().line(), Line::Changi);
        assert_eq!(StationCode::parse("TE22A").unwrap().line(), Line::ThomsonEastCoast);
        assert_eq!(StationCode::parse("BP6").unwrap().line(), Line::BukitPanjang);
    }

    #[test]
    fn two_character_codes_are_monorail() {
        assert_eq!(StationCode::parse("SW").unwrap().line(), Line::Sentosa);
        assert_eq!(StationCode::parse("NS").unwrap().line(), Line::Sentosa);
    }

    #[test]
    fn reject_short_codes() {
        assert!(StationCode::parse("").is_err());
        assert!(StationCode::parse("N").is_err());
    }

    #[test]
    fn reject_unknown_prefix() {
        assert!(StationCode::parse("XX1").is_err());
        assert!(StationCode::parse("ns1").is_err());
    }

    #[test]
    fn reject_non_ascii_prefix() {
        assert!(StationCode::parse("É12").is_err());
        assert!(StationCode::parse("NÉ1").is_err());
    }

    #[test]
    fn raw_code_preserved() {
        let code = StationCode::parse("TE22A").unwrap();
        assert_eq!(code.as_str(), "TE22A");
        assert_eq!(code.to_string(), "TE22A");
        assert_eq!(format!("{:?}", code), "StationCode(TE22A)");
    }

    #[test]
    fn error_display() {
        let err = StationCode::parse("XX1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid station code \"XX1\": unknown line prefix"
        );
    }

    #[test]
    fn timings_for_line() {
        let station = Station::new(
            "Jurong East".to_string(),
            vec![
                StationCode::parse("NS1").unwrap(),
                StationCode::parse("EW24").unwrap(),
            ],
            vec![LineTimings {
                line: Line::NorthSouth,
                departures: vec![LastTrain {
                    destination: "Marina South Pier".to_string(),
                    time: LastTrainTime::parse("23:18").unwrap(),
                }],
            }],
        );

        assert!(station.timings_for(Line::NorthSouth).is_some());
        assert!(station.timings_for(Line::EastWest).is_none());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Codes built from a known prefix always resolve to that line
        #[test]
        fn known_prefix_resolves(idx in 0usize..15, number in 1u32..40) {
            let line = Line::ALL[idx];
            let raw = format!("{}{}", line.code(), number);
            let code = StationCode::parse(&raw).unwrap();
            prop_assert_eq!(code.line(), line);
            prop_assert_eq!(code.as_str(), raw.as_str());
        }

        /// Parsing never panics on arbitrary input
        #[test]
        fn parse_is_total(s in "\\PC{0,8}") {
            let _ = StationCode::parse(&s);
        }
    }
}
