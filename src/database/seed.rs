use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::models::{Activity, StoredActivity};

const EMBEDDED_SEED: &str = include_str!("../../seed/activities.json");

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid seed document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate activity in seed: {0}")]
    DuplicateActivity(String),
    #[error("duplicate participant {email} in seed activity {activity}")]
    DuplicateParticipant { activity: String, email: String },
}

/// The activities every fresh process starts with.
pub fn load_embedded() -> Result<Vec<Activity>, SeedError> {
    parse_seed(EMBEDDED_SEED)
}

pub fn load_file(path: &Path) -> Result<Vec<Activity>, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&raw)
}

pub fn parse_seed(raw: &str) -> Result<Vec<Activity>, SeedError> {
    let stored: Vec<StoredActivity> = serde_json::from_str(raw)?;
    let activities: Vec<Activity> = stored.into_iter().map(Activity::from).collect();

    let mut names = HashSet::new();
    for activity in &activities {
        if !names.insert(activity.name.as_str()) {
            return Err(SeedError::DuplicateActivity(activity.name.clone()));
        }
        let mut emails = HashSet::new();
        for p in &activity.participants {
            if !emails.insert(p.email.as_str()) {
                return Err(SeedError::DuplicateParticipant {
                    activity: activity.name.clone(),
                    email: p.email.clone(),
                });
            }
        }
    }

    Ok(activities)
}
