use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_destinations::DestinationError;
use domain_devices::DeviceError;
use domain_transformations::TransformationError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Event route not found: {0}")]
    NotFound(Uuid),

    #[error("Route name '{0}' already in use for this tenant")]
    DuplicateName(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Route actor references unknown device: {0}")]
    ActorDeviceNotFound(Uuid),

    #[error("Route actor references unknown REST destination: {0}")]
    ActorDestinationNotFound(Uuid),

    #[error("Route references unknown transformation: {0}")]
    TransformationNotFound(Uuid),

    #[error("Database error: {0}")]
    Database(String),
}

pub type RouteResult<T> = Result<T, RouteError>;

impl From<RouteError> for AppError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::NotFound(guid) => AppError::not_found(
                "route.not_found",
                format!("Event route '{}' not found", guid),
            ),
            RouteError::DuplicateName(name) => AppError::bad_request(
                "route.name.in_use",
                format!("Route name '{}' is already in use", name),
            ),
            RouteError::Validation(msg) => AppError::bad_request("route.validation", msg),
            // Resolution failures are bad requests here: the caller named
            // a reference that does not exist for their tenant.
            RouteError::ActorDeviceNotFound(guid) => AppError::bad_request(
                "route.actor.device.not_found",
                format!("Device '{}' referenced by route actor not found", guid),
            ),
            RouteError::ActorDestinationNotFound(guid) => AppError::bad_request(
                "route.actor.destination.not_found",
                format!("REST destination '{}' referenced by route actor not found", guid),
            ),
            RouteError::TransformationNotFound(guid) => AppError::bad_request(
                "route.transformation.not_found",
                format!("Transformation '{}' referenced by route not found", guid),
            ),
            RouteError::Database(msg) => AppError::internal(msg),
        }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for RouteError {
    fn from(err: mongodb::error::Error) -> Self {
        RouteError::Database(err.to_string())
    }
}

impl From<DeviceError> for RouteError {
    fn from(err: DeviceError) -> Self {
        match err {
            DeviceError::NotFound(guid) => RouteError::ActorDeviceNotFound(guid),
            DeviceError::Database(msg) => RouteError::Database(msg),
            other => RouteError::Validation(other.to_string()),
        }
    }
}

impl From<DestinationError> for RouteError {
    fn from(err: DestinationError) -> Self {
        match err {
            DestinationError::NotFound(guid) => RouteError::ActorDestinationNotFound(guid),
            DestinationError::Database(msg) => RouteError::Database(msg),
            other => RouteError::Validation(other.to_string()),
        }
    }
}

impl From<TransformationError> for RouteError {
    fn from(err: TransformationError) -> Self {
        match err {
            TransformationError::NotFound(guid) => RouteError::TransformationNotFound(guid),
            TransformationError::Database(msg) => RouteError::Database(msg),
            other => RouteError::Validation(other.to_string()),
        }
    }
}
