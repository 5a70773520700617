//! Last-train time handling.
//!
//! The data file gives times as "HH:MM" strings. Times after midnight
//! (e.g. "00:12") belong to the same service day as the evening before, so
//! no ordering is defined on them here; they are displayed as given.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time {value:?}: {reason}")]
pub struct InvalidLastTrainTime {
    value: String,
    reason: &'static str,
}

/// Time of day of a last departure.
///
/// # Examples
///
/// ```
/// use last_train::domain::LastTrainTime;
///
/// let t = LastTrainTime::parse("23:48").unwrap();
/// assert_eq!(t.to_string(), "23:48");
///
/// assert!(LastTrainTime::parse("2348").is_err());
/// assert!(LastTrainTime::parse("24:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastTrainTime(NaiveTime);

impl LastTrainTime {
    /// Parse a time in strict "HH:MM" format.
    pub fn parse(s: &str) -> Result<Self, InvalidLastTrainTime> {
        let invalid = |reason| InvalidLastTrainTime {
            value: s.to_string(),
            reason,
        };

        let bytes = s.as_bytes();
        if bytes.len() != 5 {
            return Err(invalid("expected HH:MM format"));
        }
        if bytes[2] != b':' {
            return Err(invalid("expected colon at position 2"));
        }

        let hour = parse_two_digits(&bytes[0..2]).ok_or_else(|| invalid("invalid hour digits"))?;
        let minute =
            parse_two_digits(&bytes[3..5]).ok_or_else(|| invalid("invalid minute digits"))?;

        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| invalid("hour must be 0-23 and minute 0-59"))
    }

    /// Returns the underlying time of day.
    pub fn time(&self) -> NaiveTime {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    match bytes {
        [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => {
            Some(u32::from(a - b'0') * 10 + u32::from(b - b'0'))
        }
        _ => None,
    }
}

impl fmt::Debug for LastTrainTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LastTrainTime({})", self)
    }
}

impl fmt::Display for LastTrainTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        let t = LastTrainTime::parse("23:18").unwrap();
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 18);

        let t = LastTrainTime::parse("00:05").unwrap();
        assert_eq!(t.hour(), 0);
        assert_eq!(t.minute(), 5);
    }

    #[test]
    fn reject_bad_format() {
        assert!(LastTrainTime::parse("").is_err());
        assert!(LastTrainTime::parse("9:05").is_err());
        assert!(LastTrainTime::parse("23-18").is_err());
        assert!(LastTrainTime::parse("2318").is_err());
        assert!(LastTrainTime::parse("23:1a").is_err());
        assert!(LastTrainTime::parse("+3:18").is_err());
    }

    #[test]
    fn reject_out_of_range() {
        assert!(LastTrainTime::parse("24:00").is_err());
        assert!(LastTrainTime::parse("23:60").is_err());
    }

    #[test]
    fn display_keeps_leading_zeros() {
        assert_eq!(LastTrainTime::parse("00:05").unwrap().to_string(), "00:05");
        assert_eq!(
            format!("{:?}", LastTrainTime::parse("07:30").unwrap()),
            "LastTrainTime(07:30)"
        );
    }

    #[test]
    fn error_display() {
        let err = LastTrainTime::parse("2318").unwrap_err();
        assert_eq!(err.to_string(), "invalid time \"2318\": expected HH:MM format");
    }
}
