//! Flat-file serialization of a chosen team option.

use crate::formation::TeamOption;

/// Header row of the exported file.
pub const EXPORT_HEADER: &str =
    "team_number,name,email,ai_capability_score,is_editor,traditional_skills,duration_commitment";

/// Serialize a team option to downloadable CSV text.
///
/// One row per member, ordered by team id then member order within the
/// team. Name, email, and the `;`-joined skills are quoted; score, editor
/// flag, and duration are unquoted literals.
pub fn export_teams_to_csv(option: &TeamOption) -> String {
    let mut rows = vec![EXPORT_HEADER.to_string()];

    for team in &option.teams {
        for member in &team.members {
            rows.push(format!(
                "{},{},{},{},{},{},{}",
                team.id,
                quote(&member.name),
                quote(&member.email),
                member.ai_capability_score,
                member.is_editor,
                quote(&member.traditional_skills.join(";")),
                member.duration_commitment.as_str(),
            ));
        }
    }

    rows.join("\n")
}

/// Wrap a field in double quotes, escaping embedded quotes by doubling.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
