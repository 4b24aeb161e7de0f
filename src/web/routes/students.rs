use axum::{
    extract::{Path, State},
    Json,
};

use crate::database::registry::ActivityRegistry;
use crate::services::activities_service::{self, StudentActivityView};

pub async fn student_activities_handler(
    Path(email): Path<String>,
    State(registry): State<ActivityRegistry>,
) -> Json<Vec<StudentActivityView>> {
    Json(activities_service::list_student_activities(&registry, &email).await)
}
