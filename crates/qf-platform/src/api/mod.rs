//! API Layer
//!
//! REST endpoints for the QualiFlow entities, all nested under `/api`.
//! Every handler takes the store lock for the duration of one store call.

pub mod common;
pub mod openapi;

pub mod branches;
pub mod sectors;
pub mod users;
pub mod documents;
pub mod workflows;
pub mod processes;
pub mod activities;

use axum::{http::StatusCode, response::IntoResponse, Json, Router};

use crate::store::SharedStore;

pub use common::*;
pub use openapi::PlatformApiDoc;

pub use branches::branches_router;
pub use sectors::sectors_router;
pub use users::users_router;
pub use documents::documents_router;
pub use workflows::workflows_router;
pub use processes::processes_router;
pub use activities::activities_router;

/// Router state shared by every entity router
#[derive(Clone)]
pub struct PlatformState {
    pub store: SharedStore,
}

impl PlatformState {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

/// Build the full `/api` router with the JSON 404 fallback.
pub fn platform_router(store: SharedStore) -> Router {
    let state = PlatformState::new(store);

    Router::new()
        .nest("/api/branches", branches_router(state.clone()))
        .nest("/api/sectors", sectors_router(state.clone()))
        .nest("/api/users", users_router(state.clone()))
        .nest("/api/documents", documents_router(state.clone()))
        .nest("/api/workflows", workflows_router(state.clone()))
        .nest("/api/processes", processes_router(state.clone()))
        .nest("/api/activities", activities_router(state))
        .fallback(route_not_found)
}

pub async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(ROUTE_NOT_FOUND_MESSAGE, StatusCode::NOT_FOUND.as_u16())),
    )
}
