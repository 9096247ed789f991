use std::path::Path;

use crate::formation::TeamConfig;

use super::cli::CliArgs;
use super::{env, toml};

/// Default directory for snapshots and run logs.
pub const DEFAULT_DATA_DIR: &str = ".teamforge";

/// Teamforge configuration.
///
/// Wraps the engine-facing [`TeamConfig`] plus the file locations the CLI
/// needs. The engine itself only ever sees the [`TeamConfig`] value.
#[derive(Debug, Clone)]
pub struct Config {
    /// Target members per team (4..=8).
    pub team_size: usize,
    /// Require one editor per team.
    pub require_editor: bool,
    /// Require one AI lead per team.
    pub require_ai_lead: bool,
    /// Require anchors per team.
    pub require_anchors: bool,
    /// Anchors required per team when enforced.
    pub anchors_per_team: usize,
    /// Weight of the AI-balance scoring component.
    pub weight_ai_balance: f64,
    /// Weight of the duration scoring component.
    pub weight_duration_balance: f64,
    /// Weight of the skill-coverage scoring component.
    pub weight_skill_coverage: f64,
    /// Weight of the duplicate-editor penalty.
    pub weight_redundancy_penalty: f64,
    /// Directory holding the published snapshot.
    pub files_snapshot_dir: String,
    /// Directory holding run logs.
    pub files_log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        let team = TeamConfig::default();
        Self {
            team_size: team.team_size,
            require_editor: team.require_editor,
            require_ai_lead: team.require_ai_lead,
            require_anchors: team.require_anchors,
            anchors_per_team: team.anchors_per_team,
            weight_ai_balance: team.weight_ai_balance,
            weight_duration_balance: team.weight_duration_balance,
            weight_skill_coverage: team.weight_skill_coverage,
            weight_redundancy_penalty: team.weight_redundancy_penalty,
            files_snapshot_dir: DEFAULT_DATA_DIR.to_string(),
            files_log_dir: DEFAULT_DATA_DIR.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Precedence: CLI args > env vars > config file > defaults.
    pub fn load(cli_args: &CliArgs) -> Self {
        let mut config = Self::default();

        if let Some(ref path) = cli_args.config {
            if let Ok(file_config) = Self::load_from_file(path) {
                config = file_config;
            }
        } else if Path::new("teamforge.toml").exists() {
            if let Ok(file_config) = Self::load_from_file("teamforge.toml") {
                config = file_config;
            }
        }

        config.apply_env();
        config.apply_cli(cli_args);
        config
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        toml::load_from_file(path)
    }

    /// Parse TOML content into configuration.
    pub(super) fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        toml::parse_toml(content)
    }

    /// Apply environment variables.
    fn apply_env(&mut self) {
        env::apply_env(self);
    }

    /// Apply CLI arguments.
    pub(super) fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(n) = args.team_size {
            self.team_size = n;
        }
        if let Some(n) = args.anchors_per_team {
            self.anchors_per_team = n;
        }
        if args.no_editor_constraint {
            self.require_editor = false;
        }
        if args.no_ai_lead_constraint {
            self.require_ai_lead = false;
        }
        if args.no_anchor_constraint {
            self.require_anchors = false;
        }
        if let Some(ref dir) = args.snapshot_dir {
            self.files_snapshot_dir = dir.clone();
        }
        if let Some(ref dir) = args.log_dir {
            self.files_log_dir = dir.clone();
        }
    }

    /// The engine-facing configuration value.
    pub fn team_config(&self) -> TeamConfig {
        TeamConfig {
            team_size: self.team_size,
            require_editor: self.require_editor,
            require_ai_lead: self.require_ai_lead,
            require_anchors: self.require_anchors,
            anchors_per_team: self.anchors_per_team,
            weight_ai_balance: self.weight_ai_balance,
            weight_duration_balance: self.weight_duration_balance,
            weight_skill_coverage: self.weight_skill_coverage,
            weight_redundancy_penalty: self.weight_redundancy_penalty,
        }
    }

    /// Generate default teamforge.toml content.
    pub fn default_toml() -> String {
        r#"# Teamforge configuration

[teams]
size = 6
anchors_per_team = 2

[constraints]
require_editor = true
require_ai_lead = true
require_anchors = true

[weights]
ai_balance = 0.7
duration_balance = 0.6
skill_coverage = 0.5
redundancy_penalty = 0.4

[files]
snapshot_dir = ".teamforge"
log_dir = ".teamforge"
"#
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading config file.
    Io(String),
    /// Parse error in config file.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config I/O error: {}", msg),
            Self::Parse(msg) => write!(f, "config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
