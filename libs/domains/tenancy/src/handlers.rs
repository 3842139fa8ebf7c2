//! Administrative HTTP surface for tenants and applications
//!
//! These endpoints are not themselves tenant-scoped: they manage the
//! tenant records the [`crate::middleware::tenant_context`] middleware
//! resolves against, so the tenant is addressed by path rather than
//! header.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError, ValidatedJson,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
        ValidationFailedResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{Application, CreateApplication, CreateTenant, Tenant};
use crate::repository::{ApplicationRepository, TenantRepository};
use crate::service::{ApplicationService, TenantService};

/// OpenAPI documentation for the tenancy admin API
#[derive(OpenApi)]
#[openapi(
    paths(list_tenants, create_tenant, list_applications, create_application),
    components(
        schemas(Tenant, CreateTenant, Application, CreateApplication),
        responses(
            BadRequestResponse,
            ValidationFailedResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Tenants", description = "Tenant and application administration")
    )
)]
pub struct ApiDoc;

/// Shared state for the tenancy admin router
pub struct TenancyState<TR: TenantRepository, AR: ApplicationRepository> {
    pub tenants: TenantService<TR>,
    pub applications: ApplicationService<AR>,
}

/// Create the tenancy admin router
pub fn router<TR, AR>(
    tenants: TenantService<TR>,
    applications: ApplicationService<AR>,
) -> Router
where
    TR: TenantRepository + 'static,
    AR: ApplicationRepository + 'static,
{
    let state = Arc::new(TenancyState {
        tenants,
        applications,
    });

    Router::new()
        .route("/", get(list_tenants).post(create_tenant))
        .route(
            "/{domain}/applications",
            get(list_applications).post(create_application),
        )
        .with_state(state)
}

/// List all tenants
#[utoipa::path(
    get,
    path = "",
    tag = "Tenants",
    responses(
        (status = 200, description = "List of tenants", body = Vec<Tenant>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_tenants<TR: TenantRepository, AR: ApplicationRepository>(
    State(state): State<Arc<TenancyState<TR, AR>>>,
) -> Result<Json<Vec<Tenant>>, AppError> {
    let tenants = state.tenants.list_tenants().await?;
    Ok(Json(tenants))
}

/// Register a new tenant
#[utoipa::path(
    post,
    path = "",
    tag = "Tenants",
    request_body = CreateTenant,
    responses(
        (status = 201, description = "Tenant created", body = Tenant),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_tenant<TR: TenantRepository, AR: ApplicationRepository>(
    State(state): State<Arc<TenancyState<TR, AR>>>,
    ValidatedJson(input): ValidatedJson<CreateTenant>,
) -> Result<impl IntoResponse, AppError> {
    let tenant = state.tenants.create_tenant(input).await?;
    Ok((StatusCode::CREATED, Json(tenant)))
}

/// List a tenant's applications
#[utoipa::path(
    get,
    path = "/{domain}/applications",
    tag = "Tenants",
    params(
        ("domain" = String, Path, description = "Tenant domain name")
    ),
    responses(
        (status = 200, description = "List of applications", body = Vec<Application>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_applications<TR: TenantRepository, AR: ApplicationRepository>(
    State(state): State<Arc<TenancyState<TR, AR>>>,
    Path(domain): Path<String>,
) -> Result<Json<Vec<Application>>, AppError> {
    let tenant = state.tenants.get_tenant_by_domain(&domain).await?;
    let applications = state.applications.list_applications(&tenant).await?;
    Ok(Json(applications))
}

/// Create an application under a tenant
#[utoipa::path(
    post,
    path = "/{domain}/applications",
    tag = "Tenants",
    params(
        ("domain" = String, Path, description = "Tenant domain name")
    ),
    request_body = CreateApplication,
    responses(
        (status = 201, description = "Application created", body = Application),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_application<TR: TenantRepository, AR: ApplicationRepository>(
    State(state): State<Arc<TenancyState<TR, AR>>>,
    Path(domain): Path<String>,
    ValidatedJson(input): ValidatedJson<CreateApplication>,
) -> Result<impl IntoResponse, AppError> {
    let tenant = state.tenants.get_tenant_by_domain(&domain).await?;
    let application = state.applications.create_application(&tenant, input).await?;
    Ok((StatusCode::CREATED, Json(application)))
}
