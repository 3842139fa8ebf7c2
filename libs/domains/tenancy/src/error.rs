use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TenantError {
    #[error("Tenant not found: {0}")]
    NotFound(String),

    #[error("Tenant domain '{0}' already registered")]
    DuplicateDomain(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type TenantResult<T> = Result<T, TenantError>;

impl From<TenantError> for AppError {
    fn from(err: TenantError) -> Self {
        match err {
            TenantError::NotFound(domain) => AppError::not_found(
                "tenant.not_found",
                format!("Tenant '{}' not found", domain),
            ),
            TenantError::DuplicateDomain(domain) => AppError::bad_request(
                "tenant.domain.in_use",
                format!("Tenant domain '{}' is already registered", domain),
            ),
            TenantError::Validation(msg) => AppError::bad_request("tenant.validation", msg),
            TenantError::Database(msg) => AppError::internal(msg),
        }
    }
}

impl IntoResponse for TenantError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for TenantError {
    fn from(err: mongodb::error::Error) -> Self {
        TenantError::Database(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Application not found: {0}")]
    NotFound(String),

    #[error("Application '{0}' already exists for this tenant")]
    DuplicateName(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;

impl From<ApplicationError> for AppError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::NotFound(name) => AppError::not_found(
                "application.not_found",
                format!("Application '{}' not found", name),
            ),
            ApplicationError::DuplicateName(name) => AppError::bad_request(
                "application.name.in_use",
                format!("Application '{}' already exists for this tenant", name),
            ),
            ApplicationError::Validation(msg) => {
                AppError::bad_request("application.validation", msg)
            }
            ApplicationError::Database(msg) => AppError::internal(msg),
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ApplicationError {
    fn from(err: mongodb::error::Error) -> Self {
        ApplicationError::Database(err.to_string())
    }
}
