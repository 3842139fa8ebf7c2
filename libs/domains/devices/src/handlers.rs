//! Tenant-scoped HTTP surface for device registration and lifecycle
//!
//! Expects the tenant context middleware to have resolved the caller's
//! tenant; every operation is scoped to it.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use axum_helpers::{
    AppError, GuidPath, ValidatedJson,
    errors::responses::{
        BadGuidResponse, BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
        UnauthorizedResponse, ValidationFailedResponse,
    },
};
use domain_tenancy::CurrentTenant;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{Device, RegisterDevice, UpdateDevice};
use crate::repository::DeviceRepository;
use crate::service::DeviceService;

/// OpenAPI documentation for the device API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_devices,
        register_device,
        get_device,
        update_device,
        switch_activation,
        remove_device
    ),
    components(
        schemas(Device, RegisterDevice, UpdateDevice),
        responses(
            BadRequestResponse,
            BadGuidResponse,
            ValidationFailedResponse,
            NotFoundResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Devices", description = "Device registration and lifecycle")
    )
)]
pub struct ApiDoc;

/// Create the device router
pub fn router<R>(service: DeviceService<R>) -> Router
where
    R: DeviceRepository + 'static,
{
    Router::new()
        .route("/", get(list_devices).post(register_device))
        .route(
            "/{guid}",
            get(get_device).put(update_device).delete(remove_device),
        )
        .route("/{guid}/activation", put(switch_activation))
        .with_state(Arc::new(service))
}

/// List the tenant's devices
#[utoipa::path(
    get,
    path = "",
    tag = "Devices",
    responses(
        (status = 200, description = "List of devices", body = Vec<Device>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_devices<R: DeviceRepository>(
    State(service): State<Arc<DeviceService<R>>>,
    CurrentTenant(tenant): CurrentTenant,
) -> Result<Json<Vec<Device>>, AppError> {
    let devices = service.list_devices(&tenant).await?;
    Ok(Json(devices))
}

/// Register a new device
#[utoipa::path(
    post,
    path = "",
    tag = "Devices",
    request_body = RegisterDevice,
    responses(
        (status = 201, description = "Device registered", body = Device),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register_device<R: DeviceRepository>(
    State(service): State<Arc<DeviceService<R>>>,
    CurrentTenant(tenant): CurrentTenant,
    ValidatedJson(input): ValidatedJson<RegisterDevice>,
) -> Result<impl IntoResponse, AppError> {
    let device = service.register_device(&tenant, input).await?;
    Ok((StatusCode::CREATED, Json(device)))
}

/// Fetch a single device by GUID
#[utoipa::path(
    get,
    path = "/{guid}",
    tag = "Devices",
    params(
        ("guid" = uuid::Uuid, Path, description = "Device GUID")
    ),
    responses(
        (status = 200, description = "The device", body = Device),
        (status = 400, response = BadGuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_device<R: DeviceRepository>(
    State(service): State<Arc<DeviceService<R>>>,
    CurrentTenant(tenant): CurrentTenant,
    GuidPath(guid): GuidPath,
) -> Result<Json<Device>, AppError> {
    let device = service.get_device(&tenant, guid).await?;
    Ok(Json(device))
}

/// Update a device's display fields
#[utoipa::path(
    put,
    path = "/{guid}",
    tag = "Devices",
    params(
        ("guid" = uuid::Uuid, Path, description = "Device GUID")
    ),
    request_body = UpdateDevice,
    responses(
        (status = 200, description = "Updated device", body = Device),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_device<R: DeviceRepository>(
    State(service): State<Arc<DeviceService<R>>>,
    CurrentTenant(tenant): CurrentTenant,
    GuidPath(guid): GuidPath,
    ValidatedJson(input): ValidatedJson<UpdateDevice>,
) -> Result<Json<Device>, AppError> {
    let device = service.update_device(&tenant, guid, input).await?;
    Ok(Json(device))
}

/// Toggle a device between active and inactive
#[utoipa::path(
    put,
    path = "/{guid}/activation",
    tag = "Devices",
    params(
        ("guid" = uuid::Uuid, Path, description = "Device GUID")
    ),
    responses(
        (status = 200, description = "Device with toggled activation", body = Device),
        (status = 400, response = BadGuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn switch_activation<R: DeviceRepository>(
    State(service): State<Arc<DeviceService<R>>>,
    CurrentTenant(tenant): CurrentTenant,
    GuidPath(guid): GuidPath,
) -> Result<Json<Device>, AppError> {
    let device = service.switch_activation(&tenant, guid).await?;
    Ok(Json(device))
}

/// Remove a device
#[utoipa::path(
    delete,
    path = "/{guid}",
    tag = "Devices",
    params(
        ("guid" = uuid::Uuid, Path, description = "Device GUID")
    ),
    responses(
        (status = 204, description = "Device removed"),
        (status = 400, response = BadGuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_device<R: DeviceRepository>(
    State(service): State<Arc<DeviceService<R>>>,
    CurrentTenant(tenant): CurrentTenant,
    GuidPath(guid): GuidPath,
) -> Result<StatusCode, AppError> {
    service.remove_device(&tenant, guid).await?;
    Ok(StatusCode::NO_CONTENT)
}
