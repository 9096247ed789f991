/// How long a participant commits to staying for the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DurationCommitment {
    /// Present for the whole event.
    Full,
    /// Present for most of the event.
    Most,
    /// Present for about half the event.
    Half,
    /// Only briefly present.
    Short,
    /// Commitment unknown (also the fallback for unrecognized input).
    #[default]
    Unsure,
}

impl DurationCommitment {
    /// Parse a duration commitment from roster input.
    ///
    /// Matching is case-insensitive; anything outside the closed set falls
    /// back to `Unsure` rather than failing the row.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "FULL" => Self::Full,
            "MOST" => Self::Most,
            "HALF" => Self::Half,
            "SHORT" => Self::Short,
            _ => Self::Unsure,
        }
    }

    /// Canonical string representation (as it appears in roster files).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "FULL",
            Self::Most => "MOST",
            Self::Half => "HALF",
            Self::Short => "SHORT",
            Self::Unsure => "UNSURE",
        }
    }

    /// Continuity weight used by feasibility and scoring.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Full => 1.0,
            Self::Most => 0.8,
            Self::Half => 0.5,
            Self::Short => 0.25,
            Self::Unsure => 0.4,
        }
    }
}

/// Minimum AI-capability score that qualifies a participant as an AI lead.
pub const AI_LEAD_THRESHOLD: u8 = 3;

/// One event attendee, as parsed from a roster row.
///
/// Created once during ingestion and never mutated afterward; all downstream
/// stages compute over shared references.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    /// Display name.
    pub name: String,
    /// Identity key: lower-cased and trimmed at ingestion, unique per roster.
    pub email: String,
    /// Free-text project idea, empty if the column is absent.
    pub idea_blurb: String,
    /// Self-reported AI capability, clamped to 0..=5.
    pub ai_capability_score: u8,
    /// Whether the participant can act as an editor.
    pub is_editor: bool,
    /// Free-text skill tags (not deduplicated at ingestion).
    pub traditional_skills: Vec<String>,
    /// Availability commitment.
    pub duration_commitment: DurationCommitment,
}

impl Participant {
    /// Whether this participant can lead the AI side of a team.
    pub fn is_ai_lead(&self) -> bool {
        self.ai_capability_score >= AI_LEAD_THRESHOLD
    }

    /// Whether this participant anchors a team (FULL or MOST commitment).
    pub fn is_anchor(&self) -> bool {
        self.duration_commitment.weight() >= 0.8
    }

    /// Continuity weight of this participant's commitment.
    pub fn duration_weight(&self) -> f64 {
        self.duration_commitment.weight()
    }
}
