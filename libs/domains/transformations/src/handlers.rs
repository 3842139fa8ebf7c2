//! Tenant-scoped HTTP surface for transformation pipelines

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

use crate::models::{
    CreateTransformation, StepMethod, Transformation, TransformationStep, UpdateTransformation,
};
use crate::repository::TransformationRepository;
use crate::service::TransformationService;

/// OpenAPI documentation for the transformation API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_transformations,
        create_transformation,
        get_transformation,
        update_transformation,
        remove_transformation
    ),
    components(
        schemas(
            Transformation,
            TransformationStep,
            StepMethod,
            CreateTransformation,
            UpdateTransformation
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
        (name = "Transformations", description = "REST step pipelines applied by event routes")
    )
)]
pub struct ApiDoc;

/// Create the transformation router
pub fn router<R>(service: TransformationService<R>) -> Router
where
    R: TransformationRepository + 'static,
{
    Router::new()
        .route("/", get(list_transformations).post(create_transformation))
        .route(
            "/{guid}",
            get(get_transformation)
                .put(update_transformation)
                .delete(remove_transformation),
        )
        .with_state(Arc::new(service))
}

/// List the tenant's transformations
#[utoipa::path(
    get,
    path = "",
    tag = "Transformations",
    responses(
        (status = 200, description = "List of transformations", body = Vec<Transformation>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_transformations<R: TransformationRepository>(
    State(service): State<Arc<TransformationService<R>>>,
    CurrentTenant(tenant): CurrentTenant,
) -> Result<Json<Vec<Transformation>>, AppError> {
    let transformations = service.list_transformations(&tenant).await?;
    Ok(Json(transformations))
}

/// Create a new transformation
#[utoipa::path(
    post,
    path = "",
    tag = "Transformations",
    request_body = CreateTransformation,
    responses(
        (status = 201, description = "Transformation created", body = Transformation),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_transformation<R: TransformationRepository>(
    State(service): State<Arc<TransformationService<R>>>,
    CurrentTenant(tenant): CurrentTenant,
    ValidatedJson(input): ValidatedJson<CreateTransformation>,
) -> Result<impl IntoResponse, AppError> {
    let transformation = service.create_transformation(&tenant, input).await?;
    Ok((StatusCode::CREATED, Json(transformation)))
}

/// Fetch a single transformation by GUID
#[utoipa::path(
    get,
    path = "/{guid}",
    tag = "Transformations",
    params(
        ("guid" = uuid::Uuid, Path, description = "Transformation GUID")
    ),
    responses(
        (status = 200, description = "The transformation", body = Transformation),
        (status = 400, response = BadGuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_transformation<R: TransformationRepository>(
    State(service): State<Arc<TransformationService<R>>>,
    CurrentTenant(tenant): CurrentTenant,
    GuidPath(guid): GuidPath,
) -> Result<Json<Transformation>, AppError> {
    let transformation = service.get_transformation(&tenant, guid).await?;
    Ok(Json(transformation))
}

/// Replace a transformation's name, description and steps
#[utoipa::path(
    put,
    path = "/{guid}",
    tag = "Transformations",
    params(
        ("guid" = uuid::Uuid, Path, description = "Transformation GUID")
    ),
    request_body = UpdateTransformation,
    responses(
        (status = 200, description = "Updated transformation", body = Transformation),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_transformation<R: TransformationRepository>(
    State(service): State<Arc<TransformationService<R>>>,
    CurrentTenant(tenant): CurrentTenant,
    GuidPath(guid): GuidPath,
    ValidatedJson(input): ValidatedJson<UpdateTransformation>,
) -> Result<Json<Transformation>, AppError> {
    let transformation = service.update_transformation(&tenant, guid, input).await?;
    Ok(Json(transformation))
}

/// Remove a transformation
#[utoipa::path(
    delete,
    path = "/{guid}",
    tag = "Transformations",
    params(
        ("guid" = uuid::Uuid, Path, description = "Transformation GUID")
    ),
    responses(
        (status = 204, description = "Transformation removed"),
        (status = 400, response = BadGuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_transformation<R: TransformationRepository>(
    State(service): State<Arc<TransformationService<R>>>,
    CurrentTenant(tenant): CurrentTenant,
    GuidPath(guid): GuidPath,
) -> Result<StatusCode, AppError> {
    service.remove_transformation(&tenant, guid).await?;
    Ok(StatusCode::NO_CONTENT)
}
