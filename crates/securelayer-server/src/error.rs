use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use securelayer_registry::RegistryError;
use serde::Serialize;

/// Message returned for internal failures unless details are exposed
pub const GENERIC_INTERNAL_ERROR: &str = "An internal error occurred";

/// API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Uniqueness violation. Rendered as 400 to match the admin endpoint's contract.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal {
        error: anyhow::Error,
        expose_details: bool,
        status: Option<&'static str>,
    },
}

impl ApiError {
    /// Attach a `status` tag to internal error bodies
    pub fn with_status(self, tag: &'static str) -> Self {
        match self {
            ApiError::Internal {
                error,
                expose_details,
                ..
            } => ApiError::Internal {
                error,
                expose_details,
                status: Some(tag),
            },
            other => other,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error, status) = match self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Internal {
                error,
                expose_details,
                status,
            } => {
                tracing::error!("Internal error: {:?}", error);
                let message = if expose_details {
                    error.to_string()
                } else {
                    GENERIC_INTERNAL_ERROR.to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message, status)
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            error,
            status,
        });

        (status_code, body).into_response()
    }
}

/// Helper to convert service errors to API errors
pub fn map_service_error(error: RegistryError, expose_details: bool) -> ApiError {
    match error {
        RegistryError::Validation(msg) => ApiError::InvalidRequest(msg),
        RegistryError::Conflict(msg) => ApiError::Conflict(msg),
        RegistryError::Storage(e) => ApiError::Internal {
            error: anyhow::Error::new(e),
            expose_details,
            status: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use securelayer_storage::StorageError;
    use serde_json::{json, Value};

    fn storage_failure() -> RegistryError {
        RegistryError::Storage(StorageError::Database("disk on fire".to_string()))
    }

    async fn render(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_renders_bad_request_without_status_tag() {
        let error = map_service_error(RegistryError::Validation("nope".into()), false);
        let (status, body) = render(error.with_status("error")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "success": false, "error": "nope" }));
    }

    #[tokio::test]
    async fn test_conflict_renders_bad_request() {
        let error = map_service_error(RegistryError::Conflict("dup".into()), false);
        let (status, body) = render(error).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "success": false, "error": "dup" }));
    }

    #[tokio::test]
    async fn test_storage_failure_hides_detail_by_default() {
        let (status, body) = render(map_service_error(storage_failure(), false)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "success": false, "error": GENERIC_INTERNAL_ERROR })
        );
    }

    #[tokio::test]
    async fn test_storage_failure_on_verify_carries_error_status() {
        let error = map_service_error(storage_failure(), false).with_status("error");
        let (status, body) = render(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "An internal error occurred",
                "status": "error"
            })
        );
    }

    #[tokio::test]
    async fn test_storage_failure_detail_exposed_when_enabled() {
        let error = map_service_error(storage_failure(), true).with_status("error");
        let (status, body) = render(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["status"], json!("error"));
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("disk on fire"), "got {:?}", message);
    }
}
