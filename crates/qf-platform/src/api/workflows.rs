//! Workflows API

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use crate::api::common::{created, ok, ApiError, ApiResult, CreatedResult, JsonBody};
use crate::api::PlatformState;
use crate::domain::{NewWorkflow, Workflow, WorkflowPatch};

/// List workflows
#[utoipa::path(
    get,
    path = "/api/workflows",
    tag = "workflows",
    responses(
        (status = 200, description = "Workflows in creation order, under `data`", body = [Workflow])
    )
)]
pub async fn list_workflows(State(state): State<PlatformState>) -> ApiResult<Vec<Workflow>> {
    Ok(ok(state.store.read().list_workflows()))
}

/// Create a workflow
#[utoipa::path(
    post,
    path = "/api/workflows",
    tag = "workflows",
    request_body = NewWorkflow,
    responses(
        (status = 201, description = "Workflow created", body = Workflow),
        (status = 400, description = "Validation error", body = ApiError)
    )
)]
pub async fn create_workflow(
    State(state): State<PlatformState>,
    JsonBody(payload): JsonBody<NewWorkflow>,
) -> CreatedResult<Workflow> {
    let workflow = state.store.write().create_workflow(payload)?;
    Ok(created(workflow))
}

/// Get workflow by ID
#[utoipa::path(
    get,
    path = "/api/workflows/{id}",
    tag = "workflows",
    params(("id" = String, Path, description = "Workflow ID")),
    responses(
        (status = 200, description = "Workflow found", body = Workflow),
        (status = 404, description = "Workflow not found", body = ApiError)
    )
)]
pub async fn get_workflow(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
) -> ApiResult<Workflow> {
    Ok(ok(state.store.read().get_workflow(&id)?))
}

/// Update a workflow
///
/// A supplied `steps` list replaces every step and renumbers from 1.
#[utoipa::path(
    put,
    path = "/api/workflows/{id}",
    tag = "workflows",
    params(("id" = String, Path, description = "Workflow ID")),
    request_body = WorkflowPatch,
    responses(
        (status = 200, description = "Workflow updated", body = Workflow),
        (status = 400, description = "Validation error", body = ApiError),
        (status = 404, description = "Workflow not found", body = ApiError)
    )
)]
pub async fn update_workflow(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<WorkflowPatch>,
) -> ApiResult<Workflow> {
    Ok(ok(state.store.write().update_workflow(&id, patch)?))
}

/// Delete a workflow
#[utoipa::path(
    delete,
    path = "/api/workflows/{id}",
    tag = "workflows",
    params(("id" = String, Path, description = "Workflow ID")),
    responses(
        (status = 200, description = "Deleted workflow", body = Workflow),
        (status = 400, description = "Workflow is used by processes", body = ApiError),
        (status = 404, description = "Workflow not found", body = ApiError)
    )
)]
pub async fn delete_workflow(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
) -> ApiResult<Workflow> {
    Ok(ok(state.store.write().delete_workflow(&id)?))
}

pub fn workflows_router(state: PlatformState) -> Router {
    Router::new()
        .route("/", get(list_workflows).post(create_workflow))
        .route("/:id", get(get_workflow).put(update_workflow).delete(delete_workflow))
        .with_state(state)
}
