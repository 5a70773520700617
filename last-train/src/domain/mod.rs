//! Domain types for the last-train bot.
//!
//! This module contains the validated model of the catalog: lines, station
//! codes, stations and their last-train times. All types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod line;
mod station;
mod time;

pub use line::{InvalidLine, Line};
pub use station::{InvalidStationCode, LastTrain, LineTimings, Station, StationCode};
pub use time::{InvalidLastTrainTime, LastTrainTime};
