//! Processes API
//!
//! Process CRUD, the advance transition, step history and the activities
//! that belong to a process.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};

use crate::api::common::{created, ok, ApiError, ApiResult, CreatedResult, JsonBody};
use crate::api::PlatformState;
use crate::domain::{
    Activity, ActivityFilter, AdvanceProcess, HistoryEntry, NewActivity, NewProcess, Process,
    ProcessPatch,
};

/// List processes
#[utoipa::path(
    get,
    path = "/api/processes",
    tag = "processes",
    responses(
        (status = 200, description = "Processes in creation order, under `data`", body = [Process])
    )
)]
pub async fn list_processes(State(state): State<PlatformState>) -> ApiResult<Vec<Process>> {
    Ok(ok(state.store.read().list_processes()))
}

/// Start a process on a workflow
#[utoipa::path(
    post,
    path = "/api/processes",
    tag = "processes",
    request_body = NewProcess,
    responses(
        (status = 201, description = "Process created", body = Process),
        (status = 400, description = "Validation error", body = ApiError)
    )
)]
pub async fn create_process(
    State(state): State<PlatformState>,
    JsonBody(payload): JsonBody<NewProcess>,
) -> CreatedResult<Process> {
    let process = state.store.write().create_process(payload)?;
    Ok(created(process))
}

/// Get process by ID
#[utoipa::path(
    get,
    path = "/api/processes/{id}",
    tag = "processes",
    params(("id" = String, Path, description = "Process ID")),
    responses(
        (status = 200, description = "Process found", body = Process),
        (status = 404, description = "Process not found", body = ApiError)
    )
)]
pub async fn get_process(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
) -> ApiResult<Process> {
    Ok(ok(state.store.read().get_process(&id)?))
}

/// Update a process
///
/// Status, step index and history only change through advance.
#[utoipa::path(
    put,
    path = "/api/processes/{id}",
    tag = "processes",
    params(("id" = String, Path, description = "Process ID")),
    request_body = ProcessPatch,
    responses(
        (status = 200, description = "Process updated", body = Process),
        (status = 400, description = "Validation error or workflow change", body = ApiError),
        (status = 404, description = "Process not found", body = ApiError)
    )
)]
pub async fn update_process(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<ProcessPatch>,
) -> ApiResult<Process> {
    Ok(ok(state.store.write().update_process(&id, patch)?))
}

/// Delete a process
#[utoipa::path(
    delete,
    path = "/api/processes/{id}",
    tag = "processes",
    params(("id" = String, Path, description = "Process ID")),
    responses(
        (status = 200, description = "Deleted process", body = Process),
        (status = 400, description = "Process has activities", body = ApiError),
        (status = 404, description = "Process not found", body = ApiError)
    )
)]
pub async fn delete_process(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
) -> ApiResult<Process> {
    Ok(ok(state.store.write().delete_process(&id)?))
}

/// Complete the current step of a process
#[utoipa::path(
    post,
    path = "/api/processes/{id}/advance",
    tag = "processes",
    params(("id" = String, Path, description = "Process ID")),
    request_body = AdvanceProcess,
    responses(
        (status = 200, description = "Process advanced", body = Process),
        (status = 400, description = "Process already completed or workflow missing", body = ApiError),
        (status = 404, description = "Process not found", body = ApiError)
    )
)]
pub async fn advance_process(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<AdvanceProcess>,
) -> ApiResult<Process> {
    Ok(ok(state.store.write().advance_process(&id, payload)?))
}

/// Completed steps of a process, oldest first
#[utoipa::path(
    get,
    path = "/api/processes/{id}/history",
    tag = "processes",
    params(("id" = String, Path, description = "Process ID")),
    responses(
        (status = 200, description = "Process history", body = [HistoryEntry]),
        (status = 404, description = "Process not found", body = ApiError)
    )
)]
pub async fn process_history(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<HistoryEntry>> {
    Ok(ok(state.store.read().process_history(&id)?))
}

/// List the activities of a process
///
/// An unknown process id yields an empty list.
#[utoipa::path(
    get,
    path = "/api/processes/{id}/activities",
    tag = "processes",
    params(("id" = String, Path, description = "Process ID")),
    responses(
        (status = 200, description = "Activities of the process", body = [Activity])
    )
)]
pub async fn list_process_activities(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<Activity>> {
    Ok(ok(state.store.read().list_activities(&ActivityFilter::for_process(id))))
}

/// Create an activity in a process
#[utoipa::path(
    post,
    path = "/api/processes/{id}/activities",
    tag = "processes",
    params(("id" = String, Path, description = "Process ID")),
    request_body = NewActivity,
    responses(
        (status = 201, description = "Activity created", body = Activity),
        (status = 400, description = "Validation error or unknown process", body = ApiError)
    )
)]
pub async fn create_process_activity(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<NewActivity>,
) -> CreatedResult<Activity> {
    let activity = state.store.write().create_activity(&id, payload)?;
    Ok(created(activity))
}

pub fn processes_router(state: PlatformState) -> Router {
    Router::new()
        .route("/", get(list_processes).post(create_process))
        .route("/:id", get(get_process).put(update_process).delete(delete_process))
        .route("/:id/advance", post(advance_process))
        .route("/:id/history", get(process_history))
        .route(
            "/:id/activities",
            get(list_process_activities).post(create_process_activity),
        )
        .with_state(state)
}
