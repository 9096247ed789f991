use teamforge::color;
use teamforge::formation::{FeasibilityResult, TeamOption};
use teamforge::roster::RosterParseResult;

/// Print a summary of roster ingestion: counts plus any row-level errors.
pub(crate) fn print_parse_report(result: &RosterParseResult) {
    println!(
        "Parsed {} of {} data rows",
        color::number(result.participants.len()),
        color::number(result.row_count)
    );
    for error in &result.errors {
        println!("  {}", color::warning(error));
    }
}

/// Print the feasibility verdict with stats, errors, and warnings.
pub(crate) fn print_feasibility(result: &FeasibilityResult) {
    println!();
    if result.feasible {
        println!("{}", color::success("Roster is feasible"));
    } else {
        println!("{}", color::failed("Roster is NOT feasible"));
    }

    let stats = &result.stats;
    println!(
        "  participants: {}  editors: {}  AI leads: {}  anchors: {}  teams: {}",
        color::number(stats.total_participants),
        color::number(stats.editor_count),
        color::number(stats.ai_lead_count),
        color::number(stats.anchor_count),
        color::number(stats.expected_team_count)
    );

    for error in &result.errors {
        println!("  {}", color::failed(error));
    }
    for warning in &result.warnings {
        println!("  {}", color::warning(warning));
    }
}

/// Print the ranked options with per-team composition summaries.
pub(crate) fn print_options(options: &[TeamOption]) {
    for option in options {
        println!();
        println!(
            "=== {} {} (score {}) ===",
            color::label("Option"),
            color::number(option.id),
            color::number(option.overall_score)
        );
        for team in &option.teams {
            let d = &team.diagnostics;
            println!(
                "  Team {}: {} members | editor: {} | AI lead: {} | avg AI {} | stability {}%",
                color::number(team.id),
                color::number(team.members.len()),
                mark(d.has_editor),
                mark(d.has_ai_lead),
                color::number(d.avg_ai_score),
                color::number(d.stability_score)
            );
            for member in &team.members {
                println!(
                    "    {} <{}>",
                    member.name,
                    color::dim(&member.email)
                );
            }
            if !d.skill_coverage.is_empty() {
                println!("    skills: {}", color::info(&d.skill_coverage.join(", ")));
            }
        }
    }
}

fn mark(flag: bool) -> String {
    if flag {
        color::success("yes")
    } else {
        color::failed("no")
    }
}

pub(crate) fn print_help() {
    println!(
        r#"teamforge - team-formation engine for event rosters

USAGE:
    teamforge [OPTIONS] <COMMAND>

COMMANDS:
    check <roster.csv>     Parse the roster and report feasibility
    generate <roster.csv>  Generate ranked team options
    lookup <email>         Find the published team for an email address

OPTIONS:
    -h, --help                 Show this help message
    -V, --version              Show version
    -c, --config <PATH>        Path to config file [default: teamforge.toml]
    --team-size <N>            Target members per team (4-8) [default: 6]
    --anchors-per-team <N>     Anchors required per team [default: 2]
    --no-editor-constraint     Don't require an editor on every team
    --no-ai-lead-constraint    Don't require an AI lead on every team
    --no-anchor-constraint     Don't require anchors on every team
    --snapshot-dir <PATH>      Directory for the published snapshot [default: .teamforge]
    --log-dir <PATH>           Directory for run logs [default: .teamforge]
    --pick <N>                 Option number to export/publish [default: 1]
    --out <PATH>               Write the picked option as CSV
    --publish                  Publish the picked option for lookup

EXAMPLES:
    teamforge check roster.csv
    teamforge generate roster.csv
    teamforge generate roster.csv --pick 2 --out teams.csv --publish
    teamforge lookup ada@example.com"#
    );
}
