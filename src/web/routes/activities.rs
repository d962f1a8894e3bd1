use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use crate::models::ActivityListing;
use crate::services::activities_service::{self, Confirmation, ParticipantQuery};
use crate::web::{ApiError, AppState};

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<ActivityListing> {
    Json(activities_service::list_activities(&state.registry))
}

pub async fn signup_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<Confirmation>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let confirmation = activities_service::signup(&state.registry, &activity_name, &query.email)?;
    Ok(Json(confirmation))
}

pub async fn unregister_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<Confirmation>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let confirmation =
        activities_service::unregister(&state.registry, &activity_name, &query.email)?;
    Ok(Json(confirmation))
}
