use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::roster::Participant;

use super::score::{score_option, score_team_for_person};
use super::{compute_diagnostics, Team, TeamConfig, TeamOption, RESTARTS, TOP_OPTIONS};

/// Generate ranked team options using the thread-local random source.
///
/// Runs [`RESTARTS`] independent constructive attempts, discards the ones
/// whose seeding phase cannot satisfy an enforced constraint, and returns
/// at most [`TOP_OPTIONS`] partitions ordered best-first. An empty result
/// means no valid partition was found; that is an outcome, not an error.
pub fn generate_teams(participants: &[Participant], config: &TeamConfig) -> Vec<TeamOption> {
    generate_teams_with(&mut rand::thread_rng(), participants, config)
}

/// Same as [`generate_teams`] but with a caller-supplied random source,
/// so a seeded RNG yields reproducible partitions.
pub fn generate_teams_with<R: Rng>(
    rng: &mut R,
    participants: &[Participant],
    config: &TeamConfig,
) -> Vec<TeamOption> {
    let mut candidates: Vec<(Vec<Vec<Participant>>, f64)> = Vec::new();

    for _ in 0..RESTARTS {
        if let Some(candidate) = generate_once(rng, participants, config) {
            candidates.push(candidate);
        }
    }

    // Best first; scores are finite so the comparison cannot fail.
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates.truncate(TOP_OPTIONS);

    candidates
        .into_iter()
        .enumerate()
        .map(|(idx, (teams, score))| TeamOption {
            id: idx + 1,
            teams: teams
                .into_iter()
                .enumerate()
                .map(|(team_idx, members)| {
                    let diagnostics = compute_diagnostics(&members);
                    Team {
                        id: team_idx + 1,
                        members,
                        diagnostics,
                    }
                })
                .collect(),
            overall_score: score,
        })
        .collect()
}

/// One restart: shuffle, seed enforced constraints, greedy fill, score.
///
/// Returns `None` when this particular ordering cannot satisfy a hard
/// constraint; the caller simply moves on to the next restart.
fn generate_once<R: Rng>(
    rng: &mut R,
    participants: &[Participant],
    config: &TeamConfig,
) -> Option<(Vec<Vec<Participant>>, f64)> {
    let mut shuffled: Vec<Participant> = participants.to_vec();
    shuffled.shuffle(rng);

    let t = config.team_count(shuffled.len());
    if t == 0 {
        return None;
    }
    let mut teams: Vec<Vec<Participant>> = vec![Vec::new(); t];
    let mut used: HashSet<String> = HashSet::new();

    // Seeding order is fixed (editors, AI leads, anchors) so each later
    // step sees what earlier steps already placed and skips covered teams.
    if config.require_editor {
        let mut editors: Vec<Participant> = shuffled.iter().filter(|p| p.is_editor).cloned().collect();
        editors.shuffle(rng);
        for team in teams.iter_mut() {
            let editor = editors.pop()?;
            used.insert(editor.email.clone());
            team.push(editor);
        }
    }

    if config.require_ai_lead {
        let mut leads: Vec<Participant> = shuffled
            .iter()
            .filter(|p| p.is_ai_lead() && !used.contains(&p.email))
            .cloned()
            .collect();
        leads.shuffle(rng);
        for team in teams.iter_mut() {
            // A seeded editor may already double as the AI lead.
            if team.iter().any(|m| m.is_ai_lead()) {
                continue;
            }
            let lead = leads.pop()?;
            used.insert(lead.email.clone());
            team.push(lead);
        }
    }

    if config.require_anchors {
        let mut anchors: Vec<Participant> = shuffled
            .iter()
            .filter(|p| p.is_anchor() && !used.contains(&p.email))
            .cloned()
            .collect();
        anchors.shuffle(rng);
        for team in teams.iter_mut() {
            let already = team.iter().filter(|m| m.is_anchor()).count();
            let needed = config.anchors_per_team.saturating_sub(already);
            for _ in 0..needed {
                let anchor = anchors.pop()?;
                used.insert(anchor.email.clone());
                team.push(anchor);
            }
        }
    }

    // Fill phase: place the rest one at a time into the non-full team with
    // the best marginal score (ties to the lowest index); if everything is
    // at capacity, overflow into the currently smallest team.
    let mut remaining: Vec<Participant> = shuffled
        .iter()
        .filter(|p| !used.contains(&p.email))
        .cloned()
        .collect();
    remaining.shuffle(rng);

    for person in remaining {
        let target = teams
            .iter()
            .enumerate()
            .filter(|(_, team)| team.len() < config.team_size)
            .map(|(idx, team)| (idx, score_team_for_person(team, &person, config)))
            .fold(None::<(usize, f64)>, |best, (idx, score)| match best {
                Some((_, best_score)) if score <= best_score => best,
                _ => Some((idx, score)),
            });

        let idx = match target {
            Some((idx, _)) => idx,
            // All teams full: smallest team, first such index.
            None => teams
                .iter()
                .enumerate()
                .min_by_key(|(_, team)| team.len())
                .map(|(idx, _)| idx)
                .unwrap_or(0),
        };
        teams[idx].push(person);
    }

    let score = score_option(&teams, config);
    Some((teams, score))
}
