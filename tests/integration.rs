//! End-to-end pipeline tests: roster text in, published snapshot out.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use teamforge::export::export_teams_to_csv;
use teamforge::formation::{
    feasibility_check, generate_teams, generate_teams_with, TeamConfig,
};
use teamforge::publish::{
    find_team_for_email, FileSnapshotStore, PublishedTeamsData, SnapshotStore,
};
use teamforge::roster::parse_roster;

/// 8 participants: 2 editors, 2 AI leads (disjoint from the editors),
/// everyone FULL duration. With team_size=4 and anchors_per_team=1 this
/// satisfies every constraint with nothing to spare on editors/leads.
const TIGHT_ROSTER: &str = "\
name,email,ai_capability_score,is_editor,traditional_skills,duration_commitment
Ada,ada@example.com,4,false,design,FULL
Grace,grace@example.com,5,false,backend,FULL
Edith,edith@example.com,1,true,writing,FULL
Evelyn,evelyn@example.com,2,true,audio,FULL
Mary,mary@example.com,0,false,art,FULL
Kat,kat@example.com,1,false,music,FULL
Radia,radia@example.com,2,false,frontend,FULL
Hedy,hedy@example.com,1,false,video,FULL
";

fn tight_config() -> TeamConfig {
    TeamConfig {
        team_size: 4,
        anchors_per_team: 1,
        ..TeamConfig::default()
    }
}

#[test]
fn test_pipeline_parse_to_options() {
    let parsed = parse_roster(TIGHT_ROSTER);
    assert!(parsed.errors.is_empty(), "errors: {:?}", parsed.errors);
    assert_eq!(parsed.participants.len(), 8);

    let config = tight_config();
    let feasibility = feasibility_check(&parsed.participants, &config);
    assert!(feasibility.feasible);
    assert_eq!(feasibility.stats.expected_team_count, 2);
    assert_eq!(feasibility.stats.editor_count, 2);
    assert_eq!(feasibility.stats.ai_lead_count, 2);

    let mut rng = StdRng::seed_from_u64(42);
    let options = generate_teams_with(&mut rng, &parsed.participants, &config);
    assert!(!options.is_empty());

    for option in &options {
        assert_eq!(option.teams.len(), 2);
        for team in &option.teams {
            assert_eq!(team.members.len(), 4);
            assert_eq!(team.members.iter().filter(|m| m.is_editor).count(), 1);
            assert!(team.members.iter().any(|m| m.is_ai_lead()));
            assert_eq!(team.diagnostics.stability_score, 100);
        }
    }
}

#[test]
fn test_pipeline_every_option_partitions_roster() {
    let parsed = parse_roster(TIGHT_ROSTER);
    let config = tight_config();
    let mut rng = StdRng::seed_from_u64(7);
    let options = generate_teams_with(&mut rng, &parsed.participants, &config);

    let expected: HashSet<String> = parsed
        .participants
        .iter()
        .map(|p| p.email.clone())
        .collect();

    for option in &options {
        let mut seen = HashSet::new();
        for team in &option.teams {
            for member in &team.members {
                assert!(
                    seen.insert(member.email.clone()),
                    "{} appears twice in option {}",
                    member.email,
                    option.id
                );
            }
        }
        assert_eq!(seen, expected);
    }
}

#[test]
fn test_pipeline_unseeded_generation_still_valid() {
    // The production entry point uses the thread RNG; the exact partitions
    // vary but the invariants may not.
    let parsed = parse_roster(TIGHT_ROSTER);
    let config = tight_config();
    let options = generate_teams(&parsed.participants, &config);
    assert!(!options.is_empty());
    for option in &options {
        let members: usize = option.teams.iter().map(|t| t.members.len()).sum();
        assert_eq!(members, 8);
    }
}

#[test]
fn test_pipeline_export_shape() {
    let parsed = parse_roster(TIGHT_ROSTER);
    let config = tight_config();
    let mut rng = StdRng::seed_from_u64(3);
    let options = generate_teams_with(&mut rng, &parsed.participants, &config);
    let csv = export_teams_to_csv(&options[0]);
    let lines: Vec<&str> = csv.lines().collect();

    // Header plus one row per member.
    assert_eq!(lines.len(), 9);
    assert!(lines[0].starts_with("team_number,name,email"));

    for p in &parsed.participants {
        assert_eq!(
            csv.matches(p.email.as_str()).count(),
            1,
            "{} should appear exactly once",
            p.email
        );
    }
}

#[test]
fn test_pipeline_publish_and_lookup() {
    let parsed = parse_roster(TIGHT_ROSTER);
    let config = tight_config();
    let mut rng = StdRng::seed_from_u64(11);
    let options = generate_teams_with(&mut rng, &parsed.participants, &config);

    let dir = TempDir::new().unwrap();
    let store = FileSnapshotStore::new(dir.path());
    assert_eq!(store.load().unwrap(), None);

    let snapshot = PublishedTeamsData::from_option(&options[0]);
    store.save(&snapshot).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.option_score, options[0].overall_score);

    // Case-insensitive lookup against the persisted snapshot.
    let (team, member) = find_team_for_email(&loaded, "ADA@example.COM").unwrap();
    assert_eq!(member.email, "ada@example.com");
    assert!(team.members.iter().any(|m| m.email == "ada@example.com"));

    assert!(find_team_for_email(&loaded, "stranger@example.com").is_none());
}

#[test]
fn test_pipeline_infeasible_roster_blocks_before_generation() {
    // Demand anchors from a roster with none: everyone SHORT.
    let raw = TIGHT_ROSTER.replace(",FULL", ",SHORT");
    let parsed = parse_roster(&raw);
    let config = tight_config();

    let feasibility = feasibility_check(&parsed.participants, &config);
    assert!(!feasibility.feasible);
    assert!(feasibility
        .errors
        .iter()
        .any(|e| e.contains("Not enough full-duration anchors")));

    // The generator copes anyway: every restart abandons, no panic.
    let mut rng = StdRng::seed_from_u64(5);
    let options = generate_teams_with(&mut rng, &parsed.participants, &config);
    assert!(options.is_empty());
}

#[test]
fn test_pipeline_dirty_roster_rows_survive() {
    let raw = "\
name,email,ai_capability_score,is_editor,duration_commitment
Ada,ada@example.com,9,true,FULL
,missing@example.com,3,false,FULL
Grace,grace@example.com,not-a-number,yes,sometimes
Kat,,1,false,HALF
";
    let parsed = parse_roster(raw);
    assert_eq!(parsed.participants.len(), 2);
    assert_eq!(parsed.errors.len(), 2);
    assert!(parsed.errors.iter().any(|e| e == "Row 3: Missing name or email"));
    assert!(parsed.errors.iter().any(|e| e == "Row 5: Missing name or email"));

    let ada = &parsed.participants[0];
    assert_eq!(ada.ai_capability_score, 5);
    let grace = &parsed.participants[1];
    assert_eq!(grace.ai_capability_score, 0);
    assert!(grace.is_editor);
    assert_eq!(grace.duration_commitment.as_str(), "UNSURE");
}
