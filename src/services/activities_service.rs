use serde::Serialize;
use tracing::{info, warn};

use crate::database::registry::{ActivityRegistry, RegistryError};
use crate::models::{ActivityMap, ExperienceLevel, Participant};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentActivityView {
    pub activity: String,
    pub level: Option<ExperienceLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupConfirmation {
    pub message: String,
}

pub async fn list_activities(registry: &ActivityRegistry) -> ActivityMap<ActivityView> {
    registry
        .read(|activities| {
            ActivityMap(
                activities
                    .iter()
                    .map(|a| {
                        let view = ActivityView {
                            description: a.description.clone(),
                            schedule: a.schedule.clone(),
                            max_participants: a.max_participants,
                            participants: a.participants.clone(),
                        };
                        (a.name.clone(), view)
                    })
                    .collect(),
            )
        })
        .await
}

pub async fn list_activities_participants(
    registry: &ActivityRegistry,
) -> ActivityMap<Vec<Participant>> {
    registry
        .read(|activities| {
            ActivityMap(
                activities
                    .iter()
                    .map(|a| (a.name.clone(), a.participants.clone()))
                    .collect(),
            )
        })
        .await
}

/// Every activity the given email is on, in registry then roster order.
pub async fn list_student_activities(
    registry: &ActivityRegistry,
    email: &str,
) -> Vec<StudentActivityView> {
    registry
        .read(|activities| {
            activities
                .iter()
                .flat_map(|a| {
                    a.participants
                        .iter()
                        .filter(|p| p.email == email)
                        .map(|p| StudentActivityView {
                            activity: a.name.clone(),
                            level: p.level,
                        })
                })
                .collect()
        })
        .await
}

pub async fn sign_up(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
    level: ExperienceLevel,
) -> Result<SignupConfirmation, RegistryError> {
    let outcome = registry
        .insert_participant(activity_name, email, level)
        .await?;

    info!(activity = %activity_name, email = %email, level = %level, "signup accepted");
    if outcome.is_over_capacity() {
        // max_participants is advisory only.
        warn!(
            activity = %activity_name,
            participants = outcome.participant_count,
            max_participants = outcome.max_participants,
            "activity is over capacity"
        );
    }

    Ok(SignupConfirmation {
        message: format!("Signed up {} for {} as {}", email, activity_name, level),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed;

    fn seeded() -> ActivityRegistry {
        ActivityRegistry::new(seed::load_embedded().unwrap())
    }

    #[tokio::test]
    async fn signup_confirms_and_shows_up_everywhere() {
        let registry = seeded();
        let confirmation = sign_up(
            &registry,
            "Chess Club",
            "new@mergington.edu",
            ExperienceLevel::Beginner,
        )
        .await
        .unwrap();
        assert_eq!(
            confirmation.message,
            "Signed up new@mergington.edu for Chess Club as beginner"
        );

        let activities = list_activities(&registry).await;
        let chess = activities.get("Chess Club").unwrap();
        assert_eq!(chess.participants.len(), 3);
        assert_eq!(
            chess.participants[2],
            Participant::new("new@mergington.edu", ExperienceLevel::Beginner)
        );
        let matches = chess
            .participants
            .iter()
            .filter(|p| p.email == "new@mergington.edu")
            .count();
        assert_eq!(matches, 1);

        assert_eq!(
            list_student_activities(&registry, "new@mergington.edu").await,
            vec![StudentActivityView {
                activity: "Chess Club".to_string(),
                level: Some(ExperienceLevel::Beginner),
            }]
        );
    }

    #[tokio::test]
    async fn duplicate_signup_is_a_conflict() {
        let registry = seeded();
        let err = sign_up(
            &registry,
            "Chess Club",
            "michael@mergington.edu",
            ExperienceLevel::Advanced,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RegistryError::AlreadySignedUp { .. }));
        let participants = list_activities_participants(&registry).await;
        assert_eq!(participants.get("Chess Club").unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_activity_is_not_found() {
        let registry = seeded();
        let err = sign_up(
            &registry,
            "Nonexistent Club",
            "x@mergington.edu",
            ExperienceLevel::Beginner,
        )
        .await
        .unwrap_err();
        assert_eq!(err, RegistryError::ActivityNotFound("Nonexistent Club".to_string()));
    }

    #[tokio::test]
    async fn reads_are_idempotent() {
        let registry = seeded();
        assert_eq!(list_activities(&registry).await, list_activities(&registry).await);
        assert_eq!(
            list_activities_participants(&registry).await,
            list_activities_participants(&registry).await
        );
    }

    #[tokio::test]
    async fn participants_projection_matches_full_listing() {
        let registry = seeded();
        let full = list_activities(&registry).await;
        let participants = list_activities_participants(&registry).await;
        assert_eq!(full.len(), participants.len());
        for (name, view) in &full.0 {
            assert_eq!(participants.get(name), Some(&view.participants));
        }
    }

    #[tokio::test]
    async fn legacy_participants_are_normalized() {
        let registry = seeded();
        let participants = list_activities_participants(&registry).await;
        let gym = participants.get("Gym Class").unwrap();
        assert_eq!(gym[0].email, "john@mergington.edu");
        assert_eq!(gym[0].level, None);

        assert_eq!(
            list_student_activities(&registry, "olivia@mergington.edu").await,
            vec![StudentActivityView {
                activity: "Gym Class".to_string(),
                level: None,
            }]
        );
    }

    #[tokio::test]
    async fn student_activities_follow_registry_order() {
        let registry = seeded();
        for name in ["Science Club", "Art Studio"] {
            sign_up(&registry, name, "multi@mergington.edu", ExperienceLevel::Advanced)
                .await
                .unwrap();
        }
        let names: Vec<String> = list_student_activities(&registry, "multi@mergington.edu")
            .await
            .into_iter()
            .map(|v| v.activity)
            .collect();
        assert_eq!(names, vec!["Art Studio", "Science Club"]);
    }

    #[tokio::test]
    async fn unknown_student_has_no_activities() {
        let registry = seeded();
        assert!(list_student_activities(&registry, "nobody@mergington.edu")
            .await
            .is_empty());
    }
}
