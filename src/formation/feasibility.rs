use crate::roster::{DurationCommitment, Participant};

use super::TeamConfig;

/// Roster counts backing a feasibility verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterStats {
    /// Total participants in the roster.
    pub total_participants: usize,
    /// Participants with the editor flag.
    pub editor_count: usize,
    /// Participants with AI capability score >= 3.
    pub ai_lead_count: usize,
    /// Participants with FULL or MOST commitment.
    pub anchor_count: usize,
    /// Teams the roster would partition into.
    pub expected_team_count: usize,
}

/// Verdict of the pre-generation feasibility analysis.
///
/// `errors` block generation; `warnings` are informational only. Both are
/// ready to render to a user as-is.
#[derive(Debug, Clone)]
pub struct FeasibilityResult {
    /// True when no hard constraint is violated.
    pub feasible: bool,
    /// Blocking problems.
    pub errors: Vec<String>,
    /// Non-blocking observations.
    pub warnings: Vec<String>,
    /// Counts the verdict was computed from.
    pub stats: RosterStats,
}

/// Check whether teams can be formed at all for this roster and config.
///
/// Pure function; a `feasible` result does not guarantee generation will
/// succeed (seeding needs are simultaneous, these counts are not), but an
/// infeasible one guarantees it cannot.
pub fn feasibility_check(participants: &[Participant], config: &TeamConfig) -> FeasibilityResult {
    let n = participants.len();
    let t = config.team_count(n);
    let editors = participants.iter().filter(|p| p.is_editor).count();
    let ai_leads = participants.iter().filter(|p| p.is_ai_lead()).count();
    let anchors = participants.iter().filter(|p| p.is_anchor()).count();

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if n < config.team_size {
        errors.push(format!(
            "Not enough participants ({}) to form even one team of {}",
            n, config.team_size
        ));
    }

    if config.require_editor && editors < t {
        errors.push(format!(
            "Not enough editors: need {} (one per team) but only have {}",
            t, editors
        ));
    }

    if config.require_ai_lead && ai_leads < t {
        errors.push(format!(
            "Not enough AI leads (score >= 3): need {} but only have {}",
            t, ai_leads
        ));
    }

    if config.require_anchors && anchors < t * config.anchors_per_team {
        errors.push(format!(
            "Not enough full-duration anchors: need {} but only have {}",
            t * config.anchors_per_team,
            anchors
        ));
    }

    if editors > 0 && editors < t && !config.require_editor {
        warnings.push(format!(
            "Only {} editors for {} teams - some teams won't have one",
            editors, t
        ));
    }

    if ai_leads > 0 && ai_leads < t && !config.require_ai_lead {
        warnings.push(format!(
            "Only {} AI leads for {} teams - some teams won't have one",
            ai_leads, t
        ));
    }

    let low_availability = participants
        .iter()
        .filter(|p| {
            matches!(
                p.duration_commitment,
                DurationCommitment::Short | DurationCommitment::Unsure
            )
        })
        .count();
    if low_availability as f64 > n as f64 * 0.4 {
        warnings.push(format!(
            "{} of {} participants have limited availability (SHORT/UNSURE)",
            low_availability, n
        ));
    }

    FeasibilityResult {
        feasible: errors.is_empty(),
        errors,
        warnings,
        stats: RosterStats {
            total_participants: n,
            editor_count: editors,
            ai_lead_count: ai_leads,
            anchor_count: anchors,
            expected_team_count: t,
        },
    }
}
