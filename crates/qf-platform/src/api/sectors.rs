//! Sectors API

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use crate::api::common::{created, ok, ApiError, ApiResult, CreatedResult, JsonBody};
use crate::api::PlatformState;
use crate::domain::{NewSector, Sector, SectorPatch};

/// List sectors
#[utoipa::path(
    get,
    path = "/api/sectors",
    tag = "sectors",
    responses(
        (status = 200, description = "Sectors in creation order, under `data`", body = [Sector])
    )
)]
pub async fn list_sectors(State(state): State<PlatformState>) -> ApiResult<Vec<Sector>> {
    Ok(ok(state.store.read().list_sectors()))
}

/// Create a sector
#[utoipa::path(
    post,
    path = "/api/sectors",
    tag = "sectors",
    request_body = NewSector,
    responses(
        (status = 201, description = "Sector created", body = Sector),
        (status = 400, description = "Validation error", body = ApiError)
    )
)]
pub async fn create_sector(
    State(state): State<PlatformState>,
    JsonBody(payload): JsonBody<NewSector>,
) -> CreatedResult<Sector> {
    let sector = state.store.write().create_sector(payload)?;
    Ok(created(sector))
}

/// Get sector by ID
#[utoipa::path(
    get,
    path = "/api/sectors/{id}",
    tag = "sectors",
    params(("id" = String, Path, description = "Sector ID")),
    responses(
        (status = 200, description = "Sector found", body = Sector),
        (status = 404, description = "Sector not found", body = ApiError)
    )
)]
pub async fn get_sector(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
) -> ApiResult<Sector> {
    Ok(ok(state.store.read().get_sector(&id)?))
}

/// Update a sector
#[utoipa::path(
    put,
    path = "/api/sectors/{id}",
    tag = "sectors",
    params(("id" = String, Path, description = "Sector ID")),
    request_body = SectorPatch,
    responses(
        (status = 200, description = "Sector updated", body = Sector),
        (status = 400, description = "Validation error", body = ApiError),
        (status = 404, description = "Sector not found", body = ApiError)
    )
)]
pub async fn update_sector(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<SectorPatch>,
) -> ApiResult<Sector> {
    Ok(ok(state.store.write().update_sector(&id, patch)?))
}

/// Delete a sector
#[utoipa::path(
    delete,
    path = "/api/sectors/{id}",
    tag = "sectors",
    params(("id" = String, Path, description = "Sector ID")),
    responses(
        (status = 200, description = "Deleted sector", body = Sector),
        (status = 400, description = "Sector still has documents", body = ApiError),
        (status = 404, description = "Sector not found", body = ApiError)
    )
)]
pub async fn delete_sector(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
) -> ApiResult<Sector> {
    Ok(ok(state.store.write().delete_sector(&id)?))
}

pub fn sectors_router(state: PlatformState) -> Router {
    Router::new()
        .route("/", get(list_sectors).post(create_sector))
        .route("/:id", get(get_sector).put(update_sector).delete(delete_sector))
        .with_state(state)
}
