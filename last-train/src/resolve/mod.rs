//! Station resolution.
//!
//! Turns whatever the user typed into a station: an exact name resolves
//! immediately; otherwise every station is scored by gestalt similarity and
//! the best score decides between accepting it, asking the user to confirm
//! it, or listing suggestions.

mod config;
mod policy;
mod similarity;


pub use config::{InvalidResolverConfig, ResolverConfig};
pub use policy::{Outcome, Query, Resolver};
pub use similarity::{RankedCandidate, rank, ratio};
