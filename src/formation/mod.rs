//! Team formation: feasibility analysis, randomized multi-restart
//! generation, scoring, and per-team diagnostics.
//!
//! Everything in this module is a pure function of participants plus a
//! [`TeamConfig`]; nothing here touches I/O or mutates its inputs. The only
//! nondeterminism is the random source, which [`generate_teams_with`] takes
//! as a parameter so tests can seed it.

mod diagnostics;
mod feasibility;
mod generate;
mod score;

pub use diagnostics::{compute_diagnostics, TeamDiagnostics};
pub use feasibility::{feasibility_check, FeasibilityResult, RosterStats};
pub use generate::{generate_teams, generate_teams_with};
pub use score::{score_option, score_team_for_person};

use crate::roster::Participant;

/// Number of independent randomized restarts per generation call.
pub const RESTARTS: usize = 50;

/// Maximum number of ranked options returned to the caller.
pub const TOP_OPTIONS: usize = 5;

/// Team-formation configuration supplied by the caller.
///
/// Immutable for the duration of a pipeline run. Hard-constraint toggles
/// gate both feasibility and the generator's seeding phase; the weights only
/// steer scoring and never block generation.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamConfig {
    /// Target members per team (valid range 4..=8).
    pub team_size: usize,
    /// Require one editor per team.
    pub require_editor: bool,
    /// Require one AI lead (score >= 3) per team.
    pub require_ai_lead: bool,
    /// Require `anchors_per_team` anchors per team.
    pub require_anchors: bool,
    /// Anchors (FULL/MOST commitment) required per team when enforced.
    pub anchors_per_team: usize,
    /// Weight of the AI-balance component, 0..=1.
    pub weight_ai_balance: f64,
    /// Weight of the duration component, 0..=1.
    pub weight_duration_balance: f64,
    /// Weight of the skill-coverage component, 0..=1.
    pub weight_skill_coverage: f64,
    /// Weight of the duplicate-editor penalty, 0..=1.
    pub weight_redundancy_penalty: f64,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            team_size: 6,
            require_editor: true,
            require_ai_lead: true,
            require_anchors: true,
            anchors_per_team: 2,
            weight_ai_balance: 0.7,
            weight_duration_balance: 0.6,
            weight_skill_coverage: 0.5,
            weight_redundancy_penalty: 0.4,
        }
    }
}

impl TeamConfig {
    /// Validate ranges, returning human-readable problems as data.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();
        if !(4..=8).contains(&self.team_size) {
            problems.push(format!(
                "team size must be between 4 and 8, got {}",
                self.team_size
            ));
        }
        for (name, w) in [
            ("ai_balance", self.weight_ai_balance),
            ("duration_balance", self.weight_duration_balance),
            ("skill_coverage", self.weight_skill_coverage),
            ("redundancy_penalty", self.weight_redundancy_penalty),
        ] {
            if !(0.0..=1.0).contains(&w) {
                problems.push(format!("weight {} must be in [0, 1], got {}", name, w));
            }
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }

    /// Number of teams a roster of `n` participants partitions into.
    pub fn team_count(&self, n: usize) -> usize {
        n.div_ceil(self.team_size)
    }
}

/// One team within an option.
#[derive(Debug, Clone)]
pub struct Team {
    /// 1-based position within the option.
    pub id: usize,
    /// Members, shared from the input roster (never copied per stage).
    pub members: Vec<Participant>,
    /// Composition summary derived from the final member list.
    pub diagnostics: TeamDiagnostics,
}

/// One complete partition of the roster into teams, plus its rank score.
#[derive(Debug, Clone)]
pub struct TeamOption {
    /// 1-based rank among the returned options (1 = best).
    pub id: usize,
    /// The teams; together they cover every participant exactly once.
    pub teams: Vec<Team>,
    /// Mean per-team score, rounded to two decimals. Sole ranking key.
    pub overall_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TeamConfig::default();
        assert_eq!(config.team_size, 6);
        assert!(config.require_editor);
        assert!(config.require_ai_lead);
        assert!(config.require_anchors);
        assert_eq!(config.anchors_per_team, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_team_size_range() {
        let mut config = TeamConfig {
            team_size: 3,
            ..TeamConfig::default()
        };
        assert!(config.validate().is_err());
        config.team_size = 9;
        assert!(config.validate().is_err());
        config.team_size = 4;
        assert!(config.validate().is_ok());
        config.team_size = 8;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_weight_range() {
        let config = TeamConfig {
            weight_skill_coverage: 1.5,
            ..TeamConfig::default()
        };
        let problems = config.validate().unwrap_err();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("skill_coverage"));
    }

    #[test]
    fn test_team_count_rounds_up() {
        let config = TeamConfig {
            team_size: 6,
            ..TeamConfig::default()
        };
        assert_eq!(config.team_count(6), 1);
        assert_eq!(config.team_count(7), 2);
        assert_eq!(config.team_count(12), 2);
        assert_eq!(config.team_count(13), 3);
        assert_eq!(config.team_count(0), 0);
    }
}
