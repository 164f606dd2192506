//! Documents API
//!
//! Document CRUD plus version uploads. Versions are append-only and are
//! never touched by a document update.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};

use crate::api::common::{created, ok, ApiError, ApiResult, CreatedResult, JsonBody};
use crate::api::PlatformState;
use crate::domain::{Document, DocumentPatch, DocumentVersion, NewDocument, NewDocumentVersion};

/// List documents
#[utoipa::path(
    get,
    path = "/api/documents",
    tag = "documents",
    responses(
        (status = 200, description = "Documents in creation order, under `data`", body = [Document])
    )
)]
pub async fn list_documents(State(state): State<PlatformState>) -> ApiResult<Vec<Document>> {
    Ok(ok(state.store.read().list_documents()))
}

/// Create a document
///
/// When `fileName` or `fileUrl` is given, version 1 is created along with it.
#[utoipa::path(
    post,
    path = "/api/documents",
    tag = "documents",
    request_body = NewDocument,
    responses(
        (status = 201, description = "Document created", body = Document),
        (status = 400, description = "Validation error", body = ApiError)
    )
)]
pub async fn create_document(
    State(state): State<PlatformState>,
    JsonBody(payload): JsonBody<NewDocument>,
) -> CreatedResult<Document> {
    let document = state.store.write().create_document(payload)?;
    Ok(created(document))
}

/// Get document by ID
#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    tag = "documents",
    params(("id" = String, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Document found", body = Document),
        (status = 404, description = "Document not found", body = ApiError)
    )
)]
pub async fn get_document(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
) -> ApiResult<Document> {
    Ok(ok(state.store.read().get_document(&id)?))
}

/// Update a document
#[utoipa::path(
    put,
    path = "/api/documents/{id}",
    tag = "documents",
    params(("id" = String, Path, description = "Document ID")),
    request_body = DocumentPatch,
    responses(
        (status = 200, description = "Document updated", body = Document),
        (status = 400, description = "Validation error", body = ApiError),
        (status = 404, description = "Document not found", body = ApiError)
    )
)]
pub async fn update_document(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<DocumentPatch>,
) -> ApiResult<Document> {
    Ok(ok(state.store.write().update_document(&id, patch)?))
}

/// Delete a document
#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    tag = "documents",
    params(("id" = String, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Deleted document", body = Document),
        (status = 400, description = "Document is linked to processes", body = ApiError),
        (status = 404, description = "Document not found", body = ApiError)
    )
)]
pub async fn delete_document(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
) -> ApiResult<Document> {
    Ok(ok(state.store.write().delete_document(&id)?))
}

/// Add a version to a document
#[utoipa::path(
    post,
    path = "/api/documents/{id}/versions",
    tag = "documents",
    params(("id" = String, Path, description = "Document ID")),
    request_body = NewDocumentVersion,
    responses(
        (status = 201, description = "Version added", body = DocumentVersion),
        (status = 404, description = "Document not found", body = ApiError)
    )
)]
pub async fn add_document_version(
    State(state): State<PlatformState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<NewDocumentVersion>,
) -> CreatedResult<DocumentVersion> {
    let version = state.store.write().add_document_version(&id, payload)?;
    Ok(created(version))
}

pub fn documents_router(state: PlatformState) -> Router {
    Router::new()
        .route("/", get(list_documents).post(create_document))
        .route("/:id", get(get_document).put(update_document).delete(delete_document))
        .route("/:id/versions", post(add_document_version))
        .with_state(state)
}
