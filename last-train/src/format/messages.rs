//! Chat message rendering.
//!
//! Every function here returns MarkdownV2 text. Raw catalog and user text
//! is escaped exactly once, inside these functions; callers pass raw data
//! and must not escape the result again.

use crate::domain::{Line, LineTimings, Station};
use crate::resolve::RankedCandidate;

use super::escape::{escape, similarity_percent};

/// Prompt for a command sent without a station name.
pub const NEEDS_QUERY: &str = "Please give me a station name\\!";

/// Sent before the alternates accompanying a confirmation prompt.
pub const MORE_SUGGESTIONS: &str = "Here's a few more suggestions:";

/// Sent when the user turns down the suggested station.
pub const DECLINED: &str = "No problem\\. Send me another station name to try again\\.";

/// Sent when a confirmation button no longer refers to a pending offer.
pub const INVALID_TOKEN: &str =
    "That suggestion has expired\\. Please send the station name again\\.";

/// Messages describing a resolved station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationMessages {
    /// Station name and its line codes.
    pub header: String,
    /// One block per line, in data-file order.
    pub timings: Vec<String>,
}

impl StationMessages {
    /// All messages in sending order.
    pub fn into_messages(self) -> Vec<String> {
        let mut messages = Vec::with_capacity(1 + self.timings.len());
        messages.push(self.header);
        messages.extend(self.timings);
        messages
    }
}

/// Render a station's header and per-line timing blocks.
pub fn format_resolved(station: &Station) -> StationMessages {
    let header = format!(
        "*{} Station*\n_{}_",
        escape(station.name()),
        line_information(station)
    );
    let timings = station.timings().iter().map(format_line_timings).collect();

    StationMessages { header, timings }
}

/// One `<glyph> <code>` row per station code, in order.
fn line_information(station: &Station) -> String {
    station
        .codes()
        .iter()
        .map(|code| format!("{} {}", code.line().glyph(), escape(code.as_str())))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one line's last trains.
pub fn format_line_timings(timings: &LineTimings) -> String {
    let mut block = format!(
        "*{} {}*\n",
        timings.line.glyph(),
        line_display_name(timings.line)
    );
    for departure in &timings.departures {
        block.push_str(&format!(
            "\nTowards {}: *{}*",
            escape(&departure.destination),
            departure.time
        ));
    }
    block
}

/// Escaped line name, with any branch in italics.
fn line_display_name(line: Line) -> String {
    match line.branch() {
        Some(branch) => format!(
            "{} _{}_",
            escape(line.name()),
            escape(&format!("({branch})"))
        ),
        None => escape(line.name()),
    }
}

/// Station name in bold followed by the glyph of each of its codes.
fn glyph_name(station: &Station) -> String {
    let glyphs: String = station
        .codes()
        .iter()
        .map(|code| code.line().glyph())
        .collect();
    format!("*{}* {}", escape(station.name()), glyphs)
}

/// Render ranked candidates, one per line, with their similarity.
pub fn format_suggestion_list(candidates: &[RankedCandidate]) -> String {
    candidates
        .iter()
        .map(|c| {
            format!(
                "{} _\\({}% similar\\)_",
                glyph_name(&c.station),
                escape(&similarity_percent(c.score))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header for a query with no close match.
pub fn not_found_prompt(query: &str) -> String {
    format!("*Couldn't find {}\\!* Here's some suggestions:", escape(query))
}

/// Question asking the user to confirm the best candidate.
pub fn confirm_prompt(query: &str, candidate: &Station) -> String {
    format!(
        "*Couldn't find {}\\!* Did you mean *_{}_*?",
        escape(query),
        escape(candidate.name())
    )
}
