use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("Device not found: {0}")]
    NotFound(Uuid),

    #[error("Device ID '{0}' already registered for this tenant")]
    DuplicateDeviceId(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type DeviceResult<T> = Result<T, DeviceError>;

impl From<DeviceError> for AppError {
    fn from(err: DeviceError) -> Self {
        match err {
            DeviceError::NotFound(guid) => {
                AppError::not_found("device.not_found", format!("Device '{}' not found", guid))
            }
            DeviceError::DuplicateDeviceId(device_id) => AppError::bad_request(
                "device.id.in_use",
                format!("Device ID '{}' is already registered", device_id),
            ),
            DeviceError::Validation(msg) => AppError::bad_request("device.validation", msg),
            DeviceError::Database(msg) => AppError::internal(msg),
        }
    }
}

impl IntoResponse for DeviceError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for DeviceError {
    fn from(err: mongodb::error::Error) -> Self {
        DeviceError::Database(err.to_string())
    }
}
