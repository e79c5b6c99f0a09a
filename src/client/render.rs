//! Text rendering of transcript entries.

use std::fmt::Write as _;

use super::transcript::Entry;
use crate::protocol::ResponsePayload;

pub const USER_PREFIX: &str = "You";
pub const AGENT_HEADER: &str = "System Agent";
pub const ERROR_HEADER: &str = "System Error";
pub const ERROR_BODY: &str = "Error processing request.";

pub const TOP_WORDS_LABEL: &str = "Top Words";
pub const SUGGESTIONS_LABEL: &str = "Suggestions";
pub const PREDICTION_LABEL: &str = "Prediction";
pub const RELATED_LABEL: &str = "Related";

/// The labeled grid of a bot card, in display order: `(icon, label, value)`.
pub fn slots(payload: &ResponsePayload) -> [(&'static str, &'static str, &str); 4] {
    [
        ("📈", TOP_WORDS_LABEL, payload.top_words.as_str()),
        ("🔍", SUGGESTIONS_LABEL, payload.suggestions.as_str()),
        ("📝", PREDICTION_LABEL, payload.next_word.as_str()),
        ("🔗", RELATED_LABEL, payload.related_words.as_str()),
    ]
}

/// Render one entry as a block of text, without a trailing newline.
pub fn entry(entry: &Entry) -> String {
    match entry {
        Entry::User { text } => format!("{USER_PREFIX}: {text}"),
        Entry::Bot { payload } => bot_card(payload),
        Entry::Error => format!("{ERROR_HEADER}\n{ERROR_BODY}"),
    }
}

fn bot_card(payload: &ResponsePayload) -> String {
    let grid = slots(payload);
    let width = grid
        .iter()
        .map(|(_, label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!("{AGENT_HEADER}\nAnalysis for: \"{}\"", payload.last_word);
    for (icon, label, value) in grid {
        let _ = write!(out, "\n  {icon} {label:<width$}  {value}");
    }
    out
}
