use super::*;

const BASIC_ROSTER: &str = "\
name,email,ai_capability_score,is_editor,duration_commitment
Ada Lovelace,ADA@Example.com,5,true,FULL
Grace Hopper,grace@example.com,2,no,MOST
";

#[test]
fn test_parse_basic_roster() {
    let result = parse_roster(BASIC_ROSTER);
    assert!(result.errors.is_empty());
    assert_eq!(result.row_count, 2);
    assert_eq!(result.participants.len(), 2);

    let ada = &result.participants[0];
    assert_eq!(ada.name, "Ada Lovelace");
    assert_eq!(ada.email, "ada@example.com");
    assert_eq!(ada.ai_capability_score, 5);
    assert!(ada.is_editor);
    assert_eq!(ada.duration_commitment, DurationCommitment::Full);
    assert!(ada.idea_blurb.is_empty());
    assert!(ada.traditional_skills.is_empty());

    let grace = &result.participants[1];
    assert!(!grace.is_editor);
    assert_eq!(grace.duration_commitment, DurationCommitment::Most);
}

#[test]
fn test_parse_optional_columns() {
    let raw = "\
name,email,idea_blurb,ai_capability_score,is_editor,traditional_skills,duration_commitment
Ada,ada@example.com,\"A jam game\",4,yes,\"design; writing\",FULL
";
    let result = parse_roster(raw);
    assert!(result.errors.is_empty());
    let ada = &result.participants[0];
    assert_eq!(ada.idea_blurb, "A jam game");
    assert_eq!(ada.traditional_skills, vec!["design", "writing"]);
}

#[test]
fn test_parse_quoted_name_roundtrip() {
    let raw = "\
name,email,ai_capability_score,is_editor,duration_commitment
\"Jane, \"\"J\"\" Doe\",jane@example.com,3,false,HALF
";
    let result = parse_roster(raw);
    assert!(result.errors.is_empty());
    assert_eq!(result.participants[0].name, r#"Jane, "J" Doe"#);
}

#[test]
fn test_parse_header_variants_tolerated() {
    let raw = "\
Name,Email,AI Capability Score,Is Editor?,Duration Commitment
Ada,ada@example.com,3,true,FULL
";
    let result = parse_roster(raw);
    assert!(result.errors.is_empty(), "errors: {:?}", result.errors);
    assert_eq!(result.participants.len(), 1);
    assert_eq!(result.raw_headers[2], "AI Capability Score");
}

#[test]
fn test_parse_missing_required_columns_is_fatal() {
    let raw = "name,email\nAda,ada@example.com\n";
    let result = parse_roster(raw);
    assert!(result.participants.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("Missing required columns"));
    assert!(result.errors[0].contains("ai_capability_score"));
    assert!(result.errors[0].contains("is_editor"));
    assert!(result.errors[0].contains("duration_commitment"));
    assert_eq!(result.row_count, 1);
}

#[test]
fn test_parse_too_few_lines_is_fatal() {
    for raw in ["", "name,email,ai_capability_score,is_editor,duration_commitment\n", "\n\n  \n"] {
        let result = parse_roster(raw);
        assert!(result.participants.is_empty());
        assert_eq!(
            result.errors,
            vec!["CSV must have a header row and at least one data row".to_string()]
        );
        assert_eq!(result.row_count, 0);
    }
}

#[test]
fn test_parse_row_missing_email_skipped_with_row_number() {
    let raw = "\
name,email,ai_capability_score,is_editor,duration_commitment
Ada,ada@example.com,3,true,FULL
Grace,,2,false,MOST
Katherine,kat@example.com,1,false,HALF
";
    let result = parse_roster(raw);
    assert_eq!(result.participants.len(), 2);
    assert_eq!(result.errors, vec!["Row 3: Missing name or email".to_string()]);
    assert_eq!(result.row_count, 3);
}

#[test]
fn test_parse_mixed_line_endings_and_blank_lines() {
    let raw = "name,email,ai_capability_score,is_editor,duration_commitment\r\n\
               Ada,ada@example.com,3,true,FULL\r\
               \r\n\
               Grace,grace@example.com,2,false,MOST\n";
    let result = parse_roster(raw);
    assert!(result.errors.is_empty());
    assert_eq!(result.participants.len(), 2);
    assert_eq!(result.row_count, 2);
}

#[test]
fn test_parse_score_out_of_range_clamped() {
    let raw = "\
name,email,ai_capability_score,is_editor,duration_commitment
A,a@example.com,7,true,FULL
B,b@example.com,-3,true,FULL
C,c@example.com,abc,true,FULL
D,d@example.com,,true,FULL
";
    let result = parse_roster(raw);
    let scores: Vec<u8> = result
        .participants
        .iter()
        .map(|p| p.ai_capability_score)
        .collect();
    assert_eq!(scores, vec![5, 0, 0, 0]);
    for p in &result.participants {
        assert!(p.ai_capability_score <= 5);
    }
}

#[test]
fn test_parse_short_row_defaults_missing_fields() {
    // Fewer fields than headers: missing cells read as empty.
    let raw = "\
name,email,ai_capability_score,is_editor,duration_commitment
Ada,ada@example.com
";
    let result = parse_roster(raw);
    assert!(result.errors.is_empty());
    let ada = &result.participants[0];
    assert_eq!(ada.ai_capability_score, 0);
    assert!(!ada.is_editor);
    assert_eq!(ada.duration_commitment, DurationCommitment::Unsure);
}

#[test]
fn test_parse_duration_fallback_to_unsure() {
    let raw = "\
name,email,ai_capability_score,is_editor,duration_commitment
Ada,ada@example.com,3,true,whenever
";
    let result = parse_roster(raw);
    assert_eq!(
        result.participants[0].duration_commitment,
        DurationCommitment::Unsure
    );
}
