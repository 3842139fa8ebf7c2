use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DestinationError {
    #[error("REST destination not found: {0}")]
    NotFound(Uuid),

    #[error("Destination name '{0}' already in use for this tenant")]
    DuplicateName(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type DestinationResult<T> = Result<T, DestinationError>;

impl From<DestinationError> for AppError {
    fn from(err: DestinationError) -> Self {
        match err {
            DestinationError::NotFound(guid) => AppError::not_found(
                "destination.not_found",
                format!("REST destination '{}' not found", guid),
            ),
            DestinationError::DuplicateName(name) => AppError::bad_request(
                "destination.name.in_use",
                format!("Destination name '{}' is already in use", name),
            ),
            DestinationError::Validation(msg) => {
                AppError::bad_request("destination.validation", msg)
            }
            DestinationError::Database(msg) => AppError::internal(msg),
        }
    }
}

impl IntoResponse for DestinationError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for DestinationError {
    fn from(err: mongodb::error::Error) -> Self {
        DestinationError::Database(err.to_string())
    }
}
