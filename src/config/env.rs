use std::env;

use super::types::Config;

pub(super) fn apply_env(config: &mut Config) {
    if let Ok(val) = env::var("TEAMFORGE_TEAM_SIZE") {
        if let Ok(n) = val.parse() {
            config.team_size = n;
        }
    }
    if let Ok(val) = env::var("TEAMFORGE_ANCHORS_PER_TEAM") {
        if let Ok(n) = val.parse() {
            config.anchors_per_team = n;
        }
    }
    if let Ok(val) = env::var("TEAMFORGE_REQUIRE_EDITOR") {
        config.require_editor = val == "true" || val == "1";
    }
    if let Ok(val) = env::var("TEAMFORGE_REQUIRE_AI_LEAD") {
        config.require_ai_lead = val == "true" || val == "1";
    }
    if let Ok(val) = env::var("TEAMFORGE_REQUIRE_ANCHORS") {
        config.require_anchors = val == "true" || val == "1";
    }
    if let Ok(val) = env::var("TEAMFORGE_SNAPSHOT_DIR") {
        config.files_snapshot_dir = val;
    }
    if let Ok(val) = env::var("TEAMFORGE_LOG_DIR") {
        config.files_log_dir = val;
    }
}
