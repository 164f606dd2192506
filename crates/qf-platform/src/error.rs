//! Platform Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error};

use crate::api::common::ApiError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("{message}")]
    Validation { message: String },

    /// Deletion blocked by a dependent entity
    #[error("{message}")]
    Conflict { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PlatformError {
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict { message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }

    /// Numeric status read by the HTTP layer.
    ///
    /// Conflicts are reported as 400, not 409.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation { .. } | Self::Conflict { .. } => 400,
            Self::Internal { .. } => 500,
        }
    }
}

#[cfg(test)]
impl PlatformError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

impl IntoResponse for PlatformError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (status, Json(ApiError::new(self.to_string(), status.as_u16()))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, PlatformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(PlatformError::not_found("Branch", "branch-1").status_code(), 404);
        assert_eq!(PlatformError::validation("Branch name is required.").status_code(), 400);
        assert_eq!(PlatformError::conflict("in use").status_code(), 400);
        assert_eq!(PlatformError::internal("boom").status_code(), 500);
    }

    #[test]
    fn test_messages() {
        let err = PlatformError::not_found("Process", "process-9");
        assert_eq!(err.to_string(), "Process not found: process-9");

        let err = PlatformError::validation("Process already completed.");
        assert_eq!(err.to_string(), "Process already completed.");
    }

    #[test]
    fn test_into_response_status() {
        let response = PlatformError::conflict("Sector is referenced").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = PlatformError::not_found("User", "user-1").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
