//! MarkdownV2 rendering of resolution results.
//!
//! Pure functions from domain data to chat text, with no I/O.

mod escape;
mod messages;

pub use escape::{escape, similarity_percent};
pub use messages::{
    DECLINED, INVALID_TOKEN, MORE_SUGGESTIONS, NEEDS_QUERY, StationMessages, confirm_prompt,
    format_line_timings, format_resolved, format_suggestion_list, not_found_prompt,
};
