use std::collections::HashSet;

use crate::roster::Participant;

/// Composition summary for one team, derived from its final member list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamDiagnostics {
    /// Any member carries the editor flag.
    pub has_editor: bool,
    /// Any member qualifies as an AI lead.
    pub has_ai_lead: bool,
    /// Mean AI capability score, rounded to one decimal.
    pub avg_ai_score: f64,
    /// Mean duration weight as a percentage, rounded to an integer.
    pub stability_score: u32,
    /// Distinct skills across all members (order not significant).
    pub skill_coverage: Vec<String>,
}

/// Compute diagnostics for a team's member list.
///
/// Pure and recomputed on demand; never cached against membership changes.
pub fn compute_diagnostics(members: &[Participant]) -> TeamDiagnostics {
    if members.is_empty() {
        return TeamDiagnostics::default();
    }

    let has_editor = members.iter().any(|m| m.is_editor);
    let has_ai_lead = members.iter().any(|m| m.is_ai_lead());

    let avg_ai_score = members
        .iter()
        .map(|m| m.ai_capability_score as f64)
        .sum::<f64>()
        / members.len() as f64;

    let total_weight: f64 = members.iter().map(|m| m.duration_weight()).sum();
    let stability_score = (total_weight / members.len() as f64 * 100.0).round() as u32;

    let mut seen = HashSet::new();
    let mut skill_coverage = Vec::new();
    for member in members {
        for skill in &member.traditional_skills {
            if seen.insert(skill.as_str()) {
                skill_coverage.push(skill.clone());
            }
        }
    }

    TeamDiagnostics {
        has_editor,
        has_ai_lead,
        avg_ai_score: (avg_ai_score * 10.0).round() / 10.0,
        stability_score,
        skill_coverage,
    }
}
