//! Roster ingestion: delimited text -> typed participant records.
//!
//! The parser is tolerant at the row level (bad rows are recorded and
//! skipped) and strict at the file level (a missing required column or a
//! file without data rows aborts with a single descriptive error).

mod model;
mod parse;
#[cfg(test)]
mod tests;

pub use model::{DurationCommitment, Participant, AI_LEAD_THRESHOLD};
pub use parse::{normalize_header, parse_roster, tokenize_row};

/// Outcome of parsing one roster file.
#[derive(Debug, Clone, Default)]
pub struct RosterParseResult {
    /// Successfully parsed participants, in file order.
    pub participants: Vec<Participant>,
    /// Fatal or row-level errors, renderable directly to a user.
    pub errors: Vec<String>,
    /// Header fields exactly as they appeared in the file.
    pub raw_headers: Vec<String>,
    /// Number of non-blank data rows (header excluded).
    pub row_count: usize,
}
