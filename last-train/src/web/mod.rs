//! Web layer for the last-train bot.
//!
//! A thin JSON adapter for chat transports: the transport forwards commands
//! and button presses here and delivers the returned messages.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
