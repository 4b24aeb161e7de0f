use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Activity, ExperienceLevel, Participant};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Activity not found")]
    ActivityNotFound(String),
    #[error("Student is already signed up")]
    AlreadySignedUp { activity: String, email: String },
}

/// Roster size right after a successful signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupOutcome {
    pub participant_count: usize,
    pub max_participants: u32,
}

impl SignupOutcome {
    pub fn is_over_capacity(&self) -> bool {
        self.participant_count > self.max_participants as usize
    }
}

/// Shared in-memory store of activities, in seed order.
///
/// Clones share the same underlying state. Writers hold the lock across
/// the duplicate check and the append.
#[derive(Debug, Clone, Default)]
pub struct ActivityRegistry {
    activities: Arc<RwLock<Vec<Activity>>>,
}

impl ActivityRegistry {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }

    /// Runs `f` against a consistent view of every activity.
    pub async fn read<R>(&self, f: impl FnOnce(&[Activity]) -> R) -> R {
        let guard = self.activities.read().await;
        f(&guard)
    }

    pub async fn load_activity(&self, name: &str) -> Option<Activity> {
        self.read(|activities| activities.iter().find(|a| a.name == name).cloned())
            .await
    }

    pub async fn insert_participant(
        &self,
        activity_name: &str,
        email: &str,
        level: ExperienceLevel,
    ) -> Result<SignupOutcome, RegistryError> {
        let mut guard = self.activities.write().await;
        let activity = guard
            .iter_mut()
            .find(|a| a.name == activity_name)
            .ok_or_else(|| RegistryError::ActivityNotFound(activity_name.to_string()))?;

        if activity.has_participant(email) {
            return Err(RegistryError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(Participant::new(email, level));
        Ok(SignupOutcome {
            participant_count: activity.participants.len(),
            max_participants: activity.max_participants,
        })
    }
}
