//! Last-train lookup bot.
//!
//! Answers "when is the last train from this station?" from a free-text
//! station name, tolerating typos: close matches are accepted, plausible
//! ones are offered for confirmation, and anything else gets a list of
//! suggestions.

pub mod catalog;
pub mod config;
pub mod confirm;
pub mod domain;
pub mod format;
pub mod reply;
pub mod resolve;
pub mod web;
