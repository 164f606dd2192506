//! Activities API
//!
//! Activities are created under their process (see the processes API);
//! this router lists them across processes and edits them by id.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};

use crate::api::common::{ok, ApiError, ApiResult, JsonBody};
use crate::api::PlatformState;
use crate::domain::{Activity, ActivityFilter, ActivityPatch};

/// List activities, optionally filtered by process and status
#[utoipa::path(
    get,
    path = "/api/activities",
    tag = "activities",
    params(ActivityFilter),
    responses(
        (status = 200, description = "Matching activities in creation order", body = [Activity])
    )
)]
pub async fn list_activities(
    State(state): State<PlatformState>,
    Query(filter): Query<ActivityFilter>,
) -> ApiResult<Vec<Activity>> {
    Ok(ok(state.store.read().list_activities(&filter)))
}

/// Get activity by ID
#[utoipa::path(
    get,
    path = "/api/activities/{id}",
    tag = "activities",
    params(("id" = String, Path, description = "Activity ID")),
    responses(
        (status = 200, description = "Activity found", body = Activity),
        (status = 404, description = "Activity not found", body = ApiError)
    )
)]
pub async fn get_activity(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
) -> ApiResult<Activity> {
    Ok(ok(state.store.read().get_activity(&id)?))
}

/// Patch an activity
#[utoipa::path(
    patch,
    path = "/api/activities/{id}",
    tag = "activities",
    params(("id" = String, Path, description = "Activity ID")),
    request_body = ActivityPatch,
    responses(
        (status = 200, description = "Activity updated", body = Activity),
        (status = 400, description = "Validation error", body = ApiError),
        (status = 404, description = "Activity not found", body = ApiError)
    )
)]
pub async fn update_activity(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<ActivityPatch>,
) -> ApiResult<Activity> {
    Ok(ok(state.store.write().update_activity(&id, patch)?))
}

/// Delete an activity
#[utoipa::path(
    delete,
    path = "/api/activities/{id}",
    tag = "activities",
    params(("id" = String, Path, description = "Activity ID")),
    responses(
        (status = 200, description = "Deleted activity", body = Activity),
        (status = 404, description = "Activity not found", body = ApiError)
    )
)]
pub async fn delete_activity(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
) -> ApiResult<Activity> {
    Ok(ok(state.store.write().delete_activity(&id)?))
}

pub fn activities_router(state: PlatformState) -> Router {
    Router::new()
        .route("/", get(list_activities))
        .route("/:id", get(get_activity).patch(update_activity).delete(delete_activity))
        .with_state(state)
}
