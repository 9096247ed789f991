use super::model::{DurationCommitment, Participant};
use super::RosterParseResult;

/// Columns that must be present (after header normalization) for a roster
/// to be usable at all.
const REQUIRED_COLUMNS: [&str; 5] = [
    "name",
    "email",
    "ai_capability_score",
    "is_editor",
    "duration_commitment",
];

/// Parse raw delimited roster text into participants plus row-level errors.
///
/// Tolerant by design: a bad data row is recorded and skipped, never fatal.
/// Only two conditions abort the whole parse with zero participants:
/// fewer than two non-blank lines, or a missing required column.
pub fn parse_roster(raw: &str) -> RosterParseResult {
    let lines = split_lines(raw);

    if lines.len() < 2 {
        return RosterParseResult {
            participants: vec![],
            errors: vec!["CSV must have a header row and at least one data row".to_string()],
            raw_headers: vec![],
            row_count: 0,
        };
    }

    let raw_headers = tokenize_row(lines[0]);
    let headers: Vec<String> = raw_headers.iter().map(|h| normalize_header(h)).collect();
    let col = |name: &str| headers.iter().position(|h| h == name);

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| col(c).is_none())
        .copied()
        .collect();
    if !missing.is_empty() {
        return RosterParseResult {
            participants: vec![],
            errors: vec![format!("Missing required columns: {}", missing.join(", "))],
            raw_headers,
            row_count: lines.len() - 1,
        };
    }

    let columns = Columns {
        name: col("name").unwrap_or(0),
        email: col("email").unwrap_or(0),
        ai_score: col("ai_capability_score").unwrap_or(0),
        is_editor: col("is_editor").unwrap_or(0),
        duration: col("duration_commitment").unwrap_or(0),
        idea_blurb: col("idea_blurb"),
        skills: col("traditional_skills"),
    };

    let mut participants = Vec::new();
    let mut errors = Vec::new();

    for (i, line) in lines.iter().enumerate().skip(1) {
        // 1-based row number counting the header line.
        let row_num = i + 1;
        match parse_row(line, &columns) {
            Ok(p) => participants.push(p),
            Err(RowError::MissingIdentity) => {
                errors.push(format!("Row {}: Missing name or email", row_num));
            }
            Err(RowError::Malformed) => {
                errors.push(format!("Row {}: Failed to parse", row_num));
            }
        }
    }

    RosterParseResult {
        participants,
        errors,
        raw_headers,
        row_count: lines.len() - 1,
    }
}

/// Column indices resolved from the normalized header row.
struct Columns {
    name: usize,
    email: usize,
    ai_score: usize,
    is_editor: usize,
    duration: usize,
    idea_blurb: Option<usize>,
    skills: Option<usize>,
}

/// Why a single data row was rejected.
enum RowError {
    /// Row parsed but has no usable identity.
    MissingIdentity,
    /// Row could not be tokenized into fields at all.
    Malformed,
}

fn parse_row(line: &str, columns: &Columns) -> Result<Participant, RowError> {
    let fields = tokenize_row(line);
    if fields.is_empty() {
        return Err(RowError::Malformed);
    }

    let field = |idx: usize| fields.get(idx).map(String::as_str).unwrap_or("");

    let name = field(columns.name);
    let email = field(columns.email);
    if name.is_empty() || email.is_empty() {
        return Err(RowError::MissingIdentity);
    }

    Ok(Participant {
        name: name.to_string(),
        email: email.trim().to_lowercase(),
        idea_blurb: columns
            .idea_blurb
            .map(|idx| field(idx).to_string())
            .unwrap_or_default(),
        ai_capability_score: parse_score(field(columns.ai_score)),
        is_editor: parse_bool(field(columns.is_editor)),
        traditional_skills: columns
            .skills
            .map(|idx| parse_skills(field(idx)))
            .unwrap_or_default(),
        duration_commitment: DurationCommitment::parse(field(columns.duration)),
    })
}

/// Split raw text into non-blank lines, normalizing CRLF and bare CR.
fn split_lines(raw: &str) -> Vec<&str> {
    raw.split(['\n', '\r'])
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Tokenize one delimited row into trimmed fields.
///
/// Character state machine rather than a naive split: commas inside
/// double-quoted fields are literal, and a doubled quote inside a quoted
/// field is an escaped literal quote.
pub fn tokenize_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => {
                    fields.push(current.trim().to_string());
                    current.clear();
                }
                _ => current.push(ch),
            }
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Normalize a header for column lookup: lowercase, inner whitespace runs
/// become a single underscore, everything outside `[a-z0-9_]` is stripped.
pub fn normalize_header(header: &str) -> String {
    let mut out = String::with_capacity(header.len());
    let mut pending_space = false;

    for ch in header.trim().to_lowercase().chars() {
        if ch.is_whitespace() {
            pending_space = true;
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' {
            if pending_space && !out.is_empty() {
                out.push('_');
            }
            pending_space = false;
            out.push(ch);
        }
        // Anything else is stripped outright.
    }

    out
}

/// Parse an AI capability score: integer or 0, clamped to 0..=5.
fn parse_score(value: &str) -> u8 {
    let raw: i64 = value.trim().parse().unwrap_or(0);
    raw.clamp(0, 5) as u8
}

/// Case-insensitive boolean: only `true`, `yes`, and `1` count as true.
fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "yes" | "1")
}

/// Split a skills field on `;` or `,`, trimming and dropping empty pieces.
fn parse_skills(value: &str) -> Vec<String> {
    value
        .split([';', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_plain_fields() {
        assert_eq!(tokenize_row("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(tokenize_row(" a , b "), vec!["a", "b"]);
    }

    #[test]
    fn test_tokenize_quoted_comma() {
        assert_eq!(
            tokenize_row(r#""Doe, Jane",jane@example.com"#),
            vec!["Doe, Jane", "jane@example.com"]
        );
    }

    #[test]
    fn test_tokenize_escaped_quote() {
        assert_eq!(
            tokenize_row(r#""Jane, ""J"" Doe",x"#),
            vec![r#"Jane, "J" Doe"#, "x"]
        );
    }

    #[test]
    fn test_tokenize_trailing_comma() {
        assert_eq!(tokenize_row("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_tokenize_empty_line() {
        assert_eq!(tokenize_row(""), vec![""]);
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("Name"), "name");
        assert_eq!(normalize_header("  AI Capability Score "), "ai_capability_score");
        assert_eq!(normalize_header("Is Editor?"), "is_editor");
        assert_eq!(normalize_header("duration_commitment"), "duration_commitment");
        assert_eq!(normalize_header("Traditional   Skills"), "traditional_skills");
    }

    #[test]
    fn test_parse_score_clamps_and_defaults() {
        assert_eq!(parse_score("3"), 3);
        assert_eq!(parse_score("7"), 5);
        assert_eq!(parse_score("-3"), 0);
        assert_eq!(parse_score("abc"), 0);
        assert_eq!(parse_score(""), 0);
        assert_eq!(parse_score(" 5 "), 5);
        // Whole-cell integers only; numeric prefixes do not count.
        assert_eq!(parse_score("7abc"), 0);
        assert_eq!(parse_score("3.5"), 0);
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(parse_bool("Yes"));
        assert!(parse_bool("1"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("no"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool(""));
        assert!(!parse_bool("y"));
    }

    #[test]
    fn test_parse_skills() {
        assert_eq!(parse_skills("design; writing"), vec!["design", "writing"]);
        assert_eq!(parse_skills("a,b;c"), vec!["a", "b", "c"]);
        assert_eq!(parse_skills(";;"), Vec::<String>::new());
        assert_eq!(parse_skills(""), Vec::<String>::new());
    }
}
