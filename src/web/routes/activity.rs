use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::database::registry::ActivityRegistry;
use crate::models::ExperienceLevel;
use crate::services::activities_service::{self, SignupConfirmation};
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
    pub level: ExperienceLevel,
}

pub async fn activity_signup_handler(
    Path(activity_name): Path<String>,
    State(registry): State<ActivityRegistry>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<Json<SignupConfirmation>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        warn!("Signup for {} rejected: {}", activity_name, rejection.body_text());
        ApiError::unprocessable(rejection.body_text())
    })?;

    activities_service::sign_up(&registry, &activity_name, &query.email, query.level)
        .await
        .map(Json)
        .map_err(|e| {
            warn!("Signup of {} for {} failed: {}", query.email, activity_name, e);
            ApiError::from(e)
        })
}
