use std::collections::HashSet;

use crate::roster::Participant;

use super::TeamConfig;

/// Distinct-skill count at which the coverage component saturates.
const SKILL_COVERAGE_CAP: f64 = 6.0;

/// Midpoint of the 0-5 AI capability scale.
const AI_SCORE_MIDPOINT: f64 = 2.5;

/// Penalty per duplicate editor beyond the first.
const REDUNDANCY_STEP: f64 = 0.3;

/// Marginal affinity of `candidate` joining `members`.
///
/// Evaluates the team as if the candidate were already in it and combines
/// the four weighted components. Used only to rank candidate placements
/// during the fill phase; never stored.
pub fn score_team_for_person(
    members: &[Participant],
    candidate: &Participant,
    config: &TeamConfig,
) -> f64 {
    let all: Vec<&Participant> = members.iter().chain(std::iter::once(candidate)).collect();

    config.weight_ai_balance * ai_balance(&all)
        + config.weight_duration_balance * duration_mean(&all)
        + config.weight_skill_coverage * skill_coverage(&all)
        - config.weight_redundancy_penalty * redundancy_penalty(&all)
}

/// Aggregate score of a finished partition: mean of per-team scores,
/// rounded to two decimals.
///
/// Per team the components match the marginal score except that the
/// duration term is the raw mean commitment (higher is better) rather than
/// a balance toward a midpoint. That asymmetry is inherited product
/// behavior and kept as-is. Empty teams contribute nothing to the sum but
/// still count in the divisor.
pub fn score_option(teams: &[Vec<Participant>], config: &TeamConfig) -> f64 {
    let mut total = 0.0;
    for team in teams {
        if team.is_empty() {
            continue;
        }
        let refs: Vec<&Participant> = team.iter().collect();
        total += config.weight_ai_balance * ai_balance(&refs)
            + config.weight_duration_balance * duration_mean(&refs)
            + config.weight_skill_coverage * skill_coverage(&refs)
            - config.weight_redundancy_penalty * redundancy_penalty(&refs);
    }
    round2(total / teams.len() as f64)
}

/// How close the team's mean AI score sits to the scale midpoint; 1.0 at
/// exactly 2.5, falling off linearly to 0.0 at either extreme.
fn ai_balance(members: &[&Participant]) -> f64 {
    let mean = members
        .iter()
        .map(|p| p.ai_capability_score as f64)
        .sum::<f64>()
        / members.len() as f64;
    1.0 - (AI_SCORE_MIDPOINT - mean).abs() / AI_SCORE_MIDPOINT
}

/// Mean duration-commitment weight across members.
fn duration_mean(members: &[&Participant]) -> f64 {
    members.iter().map(|p| p.duration_weight()).sum::<f64>() / members.len() as f64
}

/// Distinct skills across members, normalized and capped at 1.0.
fn skill_coverage(members: &[&Participant]) -> f64 {
    let skills: HashSet<&str> = members
        .iter()
        .flat_map(|p| p.traditional_skills.iter().map(String::as_str))
        .collect();
    (skills.len() as f64 / SKILL_COVERAGE_CAP).min(1.0)
}

/// Penalty for stacking more than one editor on a team.
fn redundancy_penalty(members: &[&Participant]) -> f64 {
    let editors = members.iter().filter(|p| p.is_editor).count();
    if editors > 1 {
        (editors - 1) as f64 * REDUNDANCY_STEP
    } else {
        0.0
    }
}

pub(super) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
