use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-reported experience level a student picks when signing up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Advanced,
    Professional,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Advanced => "advanced",
            ExperienceLevel::Professional => "professional",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One signup on an activity roster.
///
/// Serializes as `{"email": ..., "level": ...}`; `level` is `null` for
/// entries that were recorded before levels existed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub email: String,
    pub level: Option<ExperienceLevel>,
}

impl Participant {
    pub fn new(email: impl Into<String>, level: ExperienceLevel) -> Self {
        Self {
            email: email.into(),
            level: Some(level),
        }
    }
}

/// Roster entry as it appears in seed documents: either a bare email
/// (legacy) or a structured record.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StoredParticipant {
    Legacy(String),
    Structured {
        email: String,
        #[serde(default)]
        level: Option<ExperienceLevel>,
    },
}

impl From<StoredParticipant> for Participant {
    fn from(stored: StoredParticipant) -> Self {
        match stored {
            StoredParticipant::Legacy(email) => Participant { email, level: None },
            StoredParticipant::Structured { email, level } => Participant { email, level },
        }
    }
}
