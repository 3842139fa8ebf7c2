//! Tenant-scoped HTTP surface for REST destinations

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
use domain_tenancy::CurrentTenant;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateRestDestination, RestDestination, UpdateRestDestination};
use crate::repository::RestDestinationRepository;
use crate::service::RestDestinationService;

/// OpenAPI documentation for the REST destination API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_destinations,
        create_destination,
        get_destination,
        update_destination,
        remove_destination
    ),
    components(
        schemas(RestDestination, CreateRestDestination, UpdateRestDestination),
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
        (name = "Destinations", description = "External HTTP endpoints routes forward events to")
    )
)]
pub struct ApiDoc;

/// Create the REST destination router
pub fn router<R>(service: RestDestinationService<R>) -> Router
where
    R: RestDestinationRepository + 'static,
{
    Router::new()
        .route("/", get(list_destinations).post(create_destination))
        .route(
            "/{guid}",
            get(get_destination)
                .put(update_destination)
                .delete(remove_destination),
        )
        .with_state(Arc::new(service))
}

/// List the tenant's REST destinations
#[utoipa::path(
    get,
    path = "",
    tag = "Destinations",
    responses(
        (status = 200, description = "List of destinations", body = Vec<RestDestination>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_destinations<R: RestDestinationRepository>(
    State(service): State<Arc<RestDestinationService<R>>>,
    CurrentTenant(tenant): CurrentTenant,
) -> Result<Json<Vec<RestDestination>>, AppError> {
    let destinations = service.list_destinations(&tenant).await?;
    Ok(Json(destinations))
}

/// Register a new REST destination
#[utoipa::path(
    post,
    path = "",
    tag = "Destinations",
    request_body = CreateRestDestination,
    responses(
        (status = 201, description = "Destination created", body = RestDestination),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_destination<R: RestDestinationRepository>(
    State(service): State<Arc<RestDestinationService<R>>>,
    CurrentTenant(tenant): CurrentTenant,
    ValidatedJson(input): ValidatedJson<CreateRestDestination>,
) -> Result<impl IntoResponse, AppError> {
    let destination = service.create_destination(&tenant, input).await?;
    Ok((StatusCode::CREATED, Json(destination)))
}

/// Fetch a single REST destination by GUID
#[utoipa::path(
    get,
    path = "/{guid}",
    tag = "Destinations",
    params(
        ("guid" = uuid::Uuid, Path, description = "Destination GUID")
    ),
    responses(
        (status = 200, description = "The destination", body = RestDestination),
        (status = 400, response = BadGuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_destination<R: RestDestinationRepository>(
    State(service): State<Arc<RestDestinationService<R>>>,
    CurrentTenant(tenant): CurrentTenant,
    GuidPath(guid): GuidPath,
) -> Result<Json<RestDestination>, AppError> {
    let destination = service.get_destination(&tenant, guid).await?;
    Ok(Json(destination))
}

/// Replace a REST destination's editable fields
#[utoipa::path(
    put,
    path = "/{guid}",
    tag = "Destinations",
    params(
        ("guid" = uuid::Uuid, Path, description = "Destination GUID")
    ),
    request_body = UpdateRestDestination,
    responses(
        (status = 200, description = "Updated destination", body = RestDestination),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_destination<R: RestDestinationRepository>(
    State(service): State<Arc<RestDestinationService<R>>>,
    CurrentTenant(tenant): CurrentTenant,
    GuidPath(guid): GuidPath,
    ValidatedJson(input): ValidatedJson<UpdateRestDestination>,
) -> Result<Json<RestDestination>, AppError> {
    let destination = service.update_destination(&tenant, guid, input).await?;
    Ok(Json(destination))
}

/// Remove a REST destination
#[utoipa::path(
    delete,
    path = "/{guid}",
    tag = "Destinations",
    params(
        ("guid" = uuid::Uuid, Path, description = "Destination GUID")
    ),
    responses(
        (status = 204, description = "Destination removed"),
        (status = 400, response = BadGuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_destination<R: RestDestinationRepository>(
    State(service): State<Arc<RestDestinationService<R>>>,
    CurrentTenant(tenant): CurrentTenant,
    GuidPath(guid): GuidPath,
) -> Result<StatusCode, AppError> {
    service.remove_destination(&tenant, guid).await?;
    Ok(StatusCode::NO_CONTENT)
}
