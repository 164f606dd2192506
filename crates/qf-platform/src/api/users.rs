//! Users API

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use crate::api::common::{created, ok, ApiError, ApiResult, CreatedResult, JsonBody};
use crate::api::PlatformState;
use crate::domain::{NewUser, User, UserPatch};

/// List users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "Users in creation order, under `data`", body = [User])
    )
)]
pub async fn list_users(State(state): State<PlatformState>) -> ApiResult<Vec<User>> {
    Ok(ok(state.store.read().list_users()))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error", body = ApiError)
    )
)]
pub async fn create_user(
    State(state): State<PlatformState>,
    JsonBody(payload): JsonBody<NewUser>,
) -> CreatedResult<User> {
    let user = state.store.write().create_user(payload)?;
    Ok(created(user))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = ApiError)
    )
)]
pub async fn get_user(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
) -> ApiResult<User> {
    Ok(ok(state.store.read().get_user(&id)?))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    request_body = UserPatch,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Validation error", body = ApiError),
        (status = 404, description = "User not found", body = ApiError)
    )
)]
pub async fn update_user(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<UserPatch>,
) -> ApiResult<User> {
    Ok(ok(state.store.write().update_user(&id, patch)?))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "Deleted user", body = User),
        (status = 400, description = "User is assigned to activities", body = ApiError),
        (status = 404, description = "User not found", body = ApiError)
    )
)]
pub async fn delete_user(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
) -> ApiResult<User> {
    Ok(ok(state.store.write().delete_user(&id)?))
}

pub fn users_router(state: PlatformState) -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
        .with_state(state)
}
