//! Tenant-scoped HTTP surface for event routes
//!
//! Expects the tenant context middleware to have resolved the caller's
//! tenant; every operation is scoped to it. Write operations resolve
//! actor and transformation references before anything is persisted.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError, GuidPath, ValidatedJson,
    errors::responses::{
        BadGuidResponse, BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
        UnauthorizedResponse, ValidationFailedResponse,
    },
};
use domain_destinations::RestDestinationRepository;
use domain_devices::DeviceRepository;
use domain_tenancy::CurrentTenant;
use domain_transformations::TransformationRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{
    EventRoute, RouteActor, RouteActorForm, RouteActorKind, RouteForm, TransformationRef,
};
use crate::repository::EventRouteRepository;
use crate::service::EventRouteService;

/// OpenAPI documentation for the event route API
#[derive(OpenApi)]
#[openapi(
    paths(list_routes, create_route, get_route, update_route, remove_route),
    components(
        schemas(
            EventRoute,
            RouteActor,
            RouteActorForm,
            RouteActorKind,
            RouteForm,
            TransformationRef
        ),
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
        (name = "Event Routes", description = "Routing rules between devices and destinations")
    )
)]
pub struct ApiDoc;

/// Create the event route router
pub fn router<R, D, T, X>(service: EventRouteService<R, D, T, X>) -> Router
where
    R: EventRouteRepository + 'static,
    D: DeviceRepository + 'static,
    T: TransformationRepository + 'static,
    X: RestDestinationRepository + 'static,
{
    Router::new()
        .route("/", get(list_routes).post(create_route))
        .route(
            "/{guid}",
            get(get_route).put(update_route).delete(remove_route),
        )
        .with_state(Arc::new(service))
}

/// List the tenant's event routes
#[utoipa::path(
    get,
    path = "",
    tag = "Event Routes",
    responses(
        (status = 200, description = "List of event routes", body = Vec<EventRoute>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_routes<R, D, T, X>(
    State(service): State<Arc<EventRouteService<R, D, T, X>>>,
    CurrentTenant(tenant): CurrentTenant,
) -> Result<Json<Vec<EventRoute>>, AppError>
where
    R: EventRouteRepository,
    D: DeviceRepository,
    T: TransformationRepository,
    X: RestDestinationRepository,
{
    let routes = service.list_routes(&tenant).await?;
    Ok(Json(routes))
}

/// Create an event route
///
/// Actor and transformation references are resolved against current
/// records before the route is stored; created routes start active.
#[utoipa::path(
    post,
    path = "",
    tag = "Event Routes",
    request_body = RouteForm,
    responses(
        (status = 201, description = "Created event route", body = EventRoute),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = ValidationFailedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_route<R, D, T, X>(
    State(service): State<Arc<EventRouteService<R, D, T, X>>>,
    CurrentTenant(tenant): CurrentTenant,
    ValidatedJson(form): ValidatedJson<RouteForm>,
) -> Result<impl IntoResponse, AppError>
where
    R: EventRouteRepository,
    D: DeviceRepository,
    T: TransformationRepository,
    X: RestDestinationRepository,
{
    let route = service.create_route(&tenant, form).await?;
    Ok((StatusCode::CREATED, Json(route)))
}

/// Fetch a single event route by GUID
#[utoipa::path(
    get,
    path = "/{guid}",
    tag = "Event Routes",
    params(
        ("guid" = uuid::Uuid, Path, description = "Event route GUID")
    ),
    responses(
        (status = 200, description = "The event route", body = EventRoute),
        (status = 400, response = BadGuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_route<R, D, T, X>(
    State(service): State<Arc<EventRouteService<R, D, T, X>>>,
    CurrentTenant(tenant): CurrentTenant,
    GuidPath(guid): GuidPath,
) -> Result<Json<EventRoute>, AppError>
where
    R: EventRouteRepository,
    D: DeviceRepository,
    T: TransformationRepository,
    X: RestDestinationRepository,
{
    let route = service.get_route(&tenant, guid).await?;
    Ok(Json(route))
}

/// Replace an event route's definition
#[utoipa::path(
    put,
    path = "/{guid}",
    tag = "Event Routes",
    params(
        ("guid" = uuid::Uuid, Path, description = "Event route GUID")
    ),
    request_body = RouteForm,
    responses(
        (status = 204, description = "Event route updated"),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationFailedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_route<R, D, T, X>(
    State(service): State<Arc<EventRouteService<R, D, T, X>>>,
    CurrentTenant(tenant): CurrentTenant,
    GuidPath(guid): GuidPath,
    ValidatedJson(form): ValidatedJson<RouteForm>,
) -> Result<StatusCode, AppError>
where
    R: EventRouteRepository,
    D: DeviceRepository,
    T: TransformationRepository,
    X: RestDestinationRepository,
{
    service.update_route(&tenant, guid, form).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remove an event route
#[utoipa::path(
    delete,
    path = "/{guid}",
    tag = "Event Routes",
    params(
        ("guid" = uuid::Uuid, Path, description = "Event route GUID")
    ),
    responses(
        (status = 204, description = "Event route removed"),
        (status = 400, response = BadGuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_route<R, D, T, X>(
    State(service): State<Arc<EventRouteService<R, D, T, X>>>,
    CurrentTenant(tenant): CurrentTenant,
    GuidPath(guid): GuidPath,
) -> Result<StatusCode, AppError>
where
    R: EventRouteRepository,
    D: DeviceRepository,
    T: TransformationRepository,
    X: RestDestinationRepository,
{
    service.remove_route(&tenant, guid).await?;
    Ok(StatusCode::NO_CONTENT)
}
