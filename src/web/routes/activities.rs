use axum::{extract::State, Json};

use crate::database::registry::ActivityRegistry;
use crate::models::{ActivityMap, Participant};
use crate::services::activities_service::{self, ActivityView};

pub async fn activities_handler(
    State(registry): State<ActivityRegistry>,
) -> Json<ActivityMap<ActivityView>> {
    Json(activities_service::list_activities(&registry).await)
}

pub async fn activities_participants_handler(
    State(registry): State<ActivityRegistry>,
) -> Json<ActivityMap<Vec<Participant>>> {
    Json(activities_service::list_activities_participants(&registry).await)
}
