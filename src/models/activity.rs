use serde::ser::{Serialize, Serializer};
use serde::Deserialize;

use super::participant::{Participant, StoredParticipant};

/// An extracurricular offering and its roster, in signup order.
#[derive(Debug, Clone)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<Participant>,
}

impl Activity {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p.email == email)
    }
}

/// Activity record as written in seed documents.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<StoredParticipant>,
}

impl From<StoredActivity> for Activity {
    fn from(stored: StoredActivity) -> Self {
        Activity {
            name: stored.name,
            description: stored.description,
            schedule: stored.schedule,
            max_participants: stored.max_participants,
            participants: stored.participants.into_iter().map(Into::into).collect(),
        }
    }
}

/// Name-keyed JSON object that keeps registry order when serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityMap<T>(pub Vec<(String, T)>);

impl<T> ActivityMap<T> {
    pub fn get(&self, name: &str) -> Option<&T> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Serialize> Serialize for ActivityMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, value)| (name, value)))
    }
}
