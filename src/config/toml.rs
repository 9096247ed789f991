use std::fs;
use std::path::Path;

use super::types::{Config, ConfigError};

pub(super) fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(&path).map_err(|e| ConfigError::Io(e.to_string()))?;
    Config::parse_toml(&content)
}

pub(super) fn parse_toml(content: &str) -> Result<Config, ConfigError> {
    let mut config = Config::default();
    let mut current_section = String::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            current_section = line[1..line.len() - 1].to_string();
            continue;
        }

        if let Some((key, value)) = parse_toml_line(line) {
            let full_key = if current_section.is_empty() {
                key.to_string()
            } else {
                format!("{}.{}", current_section, key)
            };

            match full_key.as_str() {
                "teams.size" => {
                    config.team_size = parse_usize(&full_key, value)?;
                }
                "teams.anchors_per_team" => {
                    config.anchors_per_team = parse_usize(&full_key, value)?;
                }
                "constraints.require_editor" => {
                    config.require_editor = parse_bool(&full_key, value)?;
                }
                "constraints.require_ai_lead" => {
                    config.require_ai_lead = parse_bool(&full_key, value)?;
                }
                "constraints.require_anchors" => {
                    config.require_anchors = parse_bool(&full_key, value)?;
                }
                "weights.ai_balance" => {
                    config.weight_ai_balance = parse_weight(&full_key, value)?;
                }
                "weights.duration_balance" => {
                    config.weight_duration_balance = parse_weight(&full_key, value)?;
                }
                "weights.skill_coverage" => {
                    config.weight_skill_coverage = parse_weight(&full_key, value)?;
                }
                "weights.redundancy_penalty" => {
                    config.weight_redundancy_penalty = parse_weight(&full_key, value)?;
                }
                "files.snapshot_dir" => {
                    config.files_snapshot_dir = value.trim_matches('"').to_string();
                }
                "files.log_dir" => {
                    config.files_log_dir = value.trim_matches('"').to_string();
                }
                _ => {} // Ignore unknown keys
            }
        }
    }

    Ok(config)
}

fn parse_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Parse(format!("invalid {}: {}", key, value)))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::Parse(format!("invalid {}: {}", key, value))),
    }
}

fn parse_weight(key: &str, value: &str) -> Result<f64, ConfigError> {
    let weight: f64 = value
        .parse()
        .map_err(|_| ConfigError::Parse(format!("invalid {}: {}", key, value)))?;
    if !(0.0..=1.0).contains(&weight) {
        return Err(ConfigError::Parse(format!(
            "{} must be between 0 and 1: {}",
            key, value
        )));
    }
    Ok(weight)
}

/// Parse a TOML line into a key-value pair.
fn parse_toml_line(line: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = line.splitn(2, '=').collect();
    if parts.len() != 2 {
        return None;
    }
    Some((parts[0].trim(), parts[1].trim()))
}
