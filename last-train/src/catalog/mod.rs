//! Station catalog loaded from the timing data file.
//!
//! The data file is a JSON array of station records. It is read once at
//! startup; every line code and time is validated, so the rest of the bot
//! never sees malformed data.

mod dto;
mod error;
mod store;

pub use dto::{LineRecord, StationRecord, TimingRecord};
pub use error::CatalogError;
pub use store::StationCatalog;
