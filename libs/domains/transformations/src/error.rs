use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TransformationError {
    #[error("Transformation not found: {0}")]
    NotFound(Uuid),

    #[error("Transformation name '{0}' already in use for this tenant")]
    DuplicateName(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type TransformationResult<T> = Result<T, TransformationError>;

impl From<TransformationError> for AppError {
    fn from(err: TransformationError) -> Self {
        match err {
            TransformationError::NotFound(guid) => AppError::not_found(
                "transformation.not_found",
                format!("Transformation '{}' not found", guid),
            ),
            TransformationError::DuplicateName(name) => AppError::bad_request(
                "transformation.name.in_use",
                format!("Transformation name '{}' is already in use", name),
            ),
            TransformationError::Validation(msg) => {
                AppError::bad_request("transformation.validation", msg)
            }
            TransformationError::Database(msg) => AppError::internal(msg),
        }
    }
}

impl IntoResponse for TransformationError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for TransformationError {
    fn from(err: mongodb::error::Error) -> Self {
        TransformationError::Database(err.to_string())
    }
}
