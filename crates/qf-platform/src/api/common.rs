//! Common API types and utilities

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::error::PlatformError;

pub const INVALID_JSON_MESSAGE: &str = "Could not parse the JSON body.";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found.";

/// Error envelope: `{"error": {"message": ..., "status": ...}}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
                status,
            },
        }
    }
}

/// Success envelope: `{"data": ...}`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

pub type ApiResult<T> = Result<Json<DataResponse<T>>, PlatformError>;
pub type CreatedResult<T> = Result<(StatusCode, Json<DataResponse<T>>), PlatformError>;

pub fn ok<T>(data: T) -> Json<DataResponse<T>> {
    Json(DataResponse::new(data))
}

pub fn created<T>(data: T) -> (StatusCode, Json<DataResponse<T>>) {
    (StatusCode::CREATED, Json(DataResponse::new(data)))
}

/// JSON body extractor.
///
/// An empty body or a literal `null` reads as `{}`. Anything that does not
/// parse into `T` is rejected with a 400 in the error envelope, instead of
/// axum's plain-text rejection.
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = PlatformError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| {
                debug!(error = %e, "Failed to read request body");
                PlatformError::validation(INVALID_JSON_MESSAGE)
            })?;

        parse_body(&bytes).map(JsonBody)
    }
}

pub fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, PlatformError> {
    let value = if bytes.iter().all(u8::is_ascii_whitespace) {
        serde_json::Value::Object(Default::default())
    } else {
        match serde_json::from_slice(bytes) {
            Ok(serde_json::Value::Null) => serde_json::Value::Object(Default::default()),
            Ok(value) => value,
            Err(e) => {
                debug!(error = %e, "Malformed JSON body");
                return Err(PlatformError::validation(INVALID_JSON_MESSAGE));
            }
        }
    };

    serde_json::from_value(value).map_err(|e| {
        debug!(error = %e, "JSON body does not match the expected shape");
        PlatformError::validation(INVALID_JSON_MESSAGE)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BranchPatch, NewBranch};

    #[test]
    fn test_empty_body_is_empty_object() {
        let payload: NewBranch = parse_body(b"").unwrap();
        assert!(payload.name.is_none());

        let payload: BranchPatch = parse_body(b"  \n").unwrap();
        assert!(payload.name.is_none());

        let payload: NewBranch = parse_body(b"null").unwrap();
        assert!(payload.description.is_none());
    }

    #[test]
    fn test_malformed_body() {
        let err = parse_body::<NewBranch>(b"{\"name\":").unwrap_err();
        assert_eq!(err.to_string(), INVALID_JSON_MESSAGE);
        assert_eq!(err.status_code(), 400);

        let err = parse_body::<NewBranch>(b"[1, 2]").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_parse_camel_case_fields() {
        let payload: NewBranch = parse_body(br#"{"name":"HQ","description":"Main"}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("HQ"));
        assert_eq!(payload.description.as_deref(), Some("Main"));
    }

    #[test]
    fn test_error_envelope_shape() {
        let value = serde_json::to_value(ApiError::new("Route not found.", 404)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"error": {"message": "Route not found.", "status": 404}})
        );

        let value = serde_json::to_value(DataResponse::new(vec![1, 2])).unwrap();
        assert_eq!(value, serde_json::json!({"data": [1, 2]}));
    }
}
