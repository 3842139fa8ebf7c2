pub mod responses;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Every failed request returns this body:
/// - `code`: stable dot-separated machine code (e.g., "route.not_found")
/// - `error`: broad error kind (e.g., "NotFound")
/// - `message`: human-readable error message
/// - `details`: optional structured details (e.g., per-field validation errors)
///
/// # JSON Example
///
/// ```json
/// {
///   "code": "route.not_found",
///   "error": "NotFound",
///   "message": "Event route does not exist",
///   "details": null
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable machine code for programmatic handling
    pub code: String,
    /// Broad error kind
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that converts into a structured HTTP response.
///
/// Domain crates map their own error enums into this type at the handler
/// boundary, preserving the originating machine code so clients can react to
/// specific failures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {message}")]
    BadRequest { code: String, message: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { code: String, message: String },

    #[error("Not Found: {message}")]
    NotFound { code: String, message: String },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("JSON extraction error: {0}")]
    JsonRejection(#[from] JsonRejection),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn unauthorized(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unauthorized {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, code, message, details) = match self {
            AppError::BadRequest { code, message } => {
                tracing::info!(error_code = %code, "Bad request: {}", message);
                (StatusCode::BAD_REQUEST, "BadRequest", code, message, None)
            }
            AppError::Unauthorized { code, message } => {
                tracing::info!(error_code = %code, "Unauthorized: {}", message);
                (StatusCode::UNAUTHORIZED, "Unauthorized", code, message, None)
            }
            AppError::NotFound { code, message } => {
                tracing::info!(error_code = %code, "Not found: {}", message);
                (StatusCode::NOT_FOUND, "NotFound", code, message, None)
            }
            AppError::Validation(errors) => {
                tracing::info!("Validation error: {:?}", errors);
                let details =
                    serde_json::to_value(&errors).unwrap_or(serde_json::Value::Null);
                (
                    StatusCode::BAD_REQUEST,
                    "BadRequest",
                    "request.validation".to_string(),
                    "Request validation failed".to_string(),
                    Some(details),
                )
            }
            AppError::JsonRejection(rejection) => {
                tracing::info!("JSON extraction error: {:?}", rejection);
                (
                    rejection.status(),
                    "BadRequest",
                    "request.body".to_string(),
                    rejection.body_text(),
                    None,
                )
            }
            AppError::Internal(message) => {
                tracing::error!("Internal server error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    "internal.error".to_string(),
                    "An unexpected internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            code,
            error: kind.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse {
        code: "resource.not_found".to_string(),
        error: "NotFound".to_string(),
        message: "The requested resource was not found".to_string(),
        details: None,
    });

    (StatusCode::NOT_FOUND, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_maps_to_400() {
        let err = AppError::bad_request("device.not_found", "Device does not exist");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::not_found("route.not_found", "Event route does not exist");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        let err = AppError::unauthorized("tenant.header.missing", "Missing tenant header");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_maps_to_500_with_opaque_message() {
        let err = AppError::internal("connection pool exhausted");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        use http_body_util::BodyExt;

        let err = AppError::not_found("route.not_found", "Event route does not exist");
        let response = err.into_response();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["code"], "route.not_found");
        assert_eq!(body["error"], "NotFound");
        assert_eq!(body["message"], "Event route does not exist");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_not_found_fallback() {
        let response = not_found().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
