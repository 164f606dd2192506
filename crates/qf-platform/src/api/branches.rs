//! Branches API

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use crate::api::common::{created, ok, ApiError, ApiResult, CreatedResult, JsonBody};
use crate::api::PlatformState;
use crate::domain::{Branch, BranchPatch, NewBranch};

/// List branches
#[utoipa::path(
    get,
    path = "/api/branches",
    tag = "branches",
    responses(
        (status = 200, description = "Branches in creation order, under `data`", body = [Branch])
    )
)]
pub async fn list_branches(State(state): State<PlatformState>) -> ApiResult<Vec<Branch>> {
    Ok(ok(state.store.read().list_branches()))
}

/// Create a branch
#[utoipa::path(
    post,
    path = "/api/branches",
    tag = "branches",
    request_body = NewBranch,
    responses(
        (status = 201, description = "Branch created", body = Branch),
        (status = 400, description = "Validation error", body = ApiError)
    )
)]
pub async fn create_branch(
    State(state): State<PlatformState>,
    JsonBody(payload): JsonBody<NewBranch>,
) -> CreatedResult<Branch> {
    let branch = state.store.write().create_branch(payload)?;
    Ok(created(branch))
}

/// Get branch by ID
#[utoipa::path(
    get,
    path = "/api/branches/{id}",
    tag = "branches",
    params(("id" = String, Path, description = "Branch ID")),
    responses(
        (status = 200, description = "Branch found", body = Branch),
        (status = 404, description = "Branch not found", body = ApiError)
    )
)]
pub async fn get_branch(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
) -> ApiResult<Branch> {
    Ok(ok(state.store.read().get_branch(&id)?))
}

/// Update a branch
#[utoipa::path(
    put,
    path = "/api/branches/{id}",
    tag = "branches",
    params(("id" = String, Path, description = "Branch ID")),
    request_body = BranchPatch,
    responses(
        (status = 200, description = "Branch updated", body = Branch),
        (status = 400, description = "Validation error", body = ApiError),
        (status = 404, description = "Branch not found", body = ApiError)
    )
)]
pub async fn update_branch(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<BranchPatch>,
) -> ApiResult<Branch> {
    Ok(ok(state.store.write().update_branch(&id, patch)?))
}

/// Delete a branch
#[utoipa::path(
    delete,
    path = "/api/branches/{id}",
    tag = "branches",
    params(("id" = String, Path, description = "Branch ID")),
    responses(
        (status = 200, description = "Deleted branch", body = Branch),
        (status = 400, description = "Branch still has sectors or documents", body = ApiError),
        (status = 404, description = "Branch not found", body = ApiError)
    )
)]
pub async fn delete_branch(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
) -> ApiResult<Branch> {
    Ok(ok(state.store.write().delete_branch(&id)?))
}

pub fn branches_router(state: PlatformState) -> Router {
    Router::new()
        .route("/", get(list_branches).post(create_branch))
        .route("/:id", get(get_branch).put(update_branch).delete(delete_branch))
        .with_state(state)
}
