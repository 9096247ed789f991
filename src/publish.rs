//! Published-teams snapshot: an immutable record of the chosen option,
//! written by an explicit publish action and read later by the
//! "find my team" lookup.
//!
//! The store is modeled as an injected port over a single fixed key; the
//! engine never does I/O of its own. Saving overwrites the previous
//! snapshot wholesale (last writer wins, no merge, no versioning).

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::formation::TeamOption;

/// Fixed key the snapshot lives under in the external store.
pub const STORAGE_KEY: &str = "genjam_published_teams";

/// Reduced member record carried in the snapshot.
///
/// Deliberately excludes the idea blurb: the lookup page has no business
/// showing other people's pitches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedMember {
    pub name: String,
    pub email: String,
    pub ai_capability_score: u8,
    pub is_editor: bool,
    pub traditional_skills: Vec<String>,
    pub duration_commitment: String,
}

/// One team inside the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedTeam {
    pub id: usize,
    pub members: Vec<PublishedMember>,
}

/// The published snapshot: timestamp, option score, reduced teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedTeamsData {
    /// RFC 3339 publication timestamp.
    pub published_at: String,
    /// Overall score of the published option.
    pub option_score: f64,
    pub teams: Vec<PublishedTeam>,
}

impl PublishedTeamsData {
    /// Build a snapshot of `option`, stamped with the current UTC time.
    pub fn from_option(option: &TeamOption) -> Self {
        Self::from_option_at(option, Utc::now().to_rfc3339())
    }

    /// Build a snapshot with an explicit timestamp (tests).
    pub fn from_option_at(option: &TeamOption, published_at: String) -> Self {
        Self {
            published_at,
            option_score: option.overall_score,
            teams: option
                .teams
                .iter()
                .map(|team| PublishedTeam {
                    id: team.id,
                    members: team
                        .members
                        .iter()
                        .map(|m| PublishedMember {
                            name: m.name.clone(),
                            email: m.email.clone(),
                            ai_capability_score: m.ai_capability_score,
                            is_editor: m.is_editor,
                            traditional_skills: m.traditional_skills.clone(),
                            duration_commitment: m.duration_commitment.as_str().to_string(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Find the team containing `email`, matched case-insensitively after
/// trimming. Returns the team and the matching member.
pub fn find_team_for_email<'a>(
    snapshot: &'a PublishedTeamsData,
    email: &str,
) -> Option<(&'a PublishedTeam, &'a PublishedMember)> {
    let needle = email.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    for team in &snapshot.teams {
        for member in &team.members {
            if member.email.to_lowercase() == needle {
                return Some((team, member));
            }
        }
    }
    None
}

/// Read/write port over the external snapshot store.
pub trait SnapshotStore {
    /// Load the current snapshot, `None` when nothing has been published.
    fn load(&self) -> Result<Option<PublishedTeamsData>, String>;

    /// Save a snapshot, replacing any previous one.
    fn save(&self, snapshot: &PublishedTeamsData) -> Result<(), String>;
}

/// File-backed snapshot store: `<dir>/<STORAGE_KEY>.json`.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", STORAGE_KEY))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<PublishedTeamsData>, String> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        let snapshot = serde_json::from_str(&content)
            .map_err(|e| format!("failed to parse {}: {}", path.display(), e))?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &PublishedTeamsData) -> Result<(), String> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| format!("failed to create {}: {}", self.dir.display(), e))?;
        let path = self.path();
        let content = serde_json::to_string_pretty(snapshot)
            .map_err(|e| format!("failed to serialize snapshot: {}", e))?;
        fs::write(&path, content)
            .map_err(|e| format!("failed to write {}: {}", path.display(), e))
    }
}
