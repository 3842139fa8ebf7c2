//! Tenant context middleware and extractor
//!
//! Every registry route is tenant-scoped. The middleware resolves the
//! `X-Tenant-Domain` header against the tenant repository and stashes the
//! full `Tenant` record in request extensions; handlers pull it back out
//! with the [`CurrentTenant`] extractor.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_helpers::AppError;

use crate::error::TenantError;
use crate::models::Tenant;
use crate::repository::TenantRepository;
use crate::service::TenantService;

/// Header carrying the caller's tenant domain name
pub const TENANT_DOMAIN_HEADER: &str = "x-tenant-domain";

/// Resolves the tenant for the request and inserts it into extensions.
///
/// Responds 401 when the header is absent or names an unknown tenant;
/// tenants are part of the caller's identity here, not a lookup that can
/// legitimately miss.
///
/// # Example
/// ```ignore
/// use axum::middleware;
///
/// let app = routes_router.layer(middleware::from_fn_with_state(
///     tenant_service.clone(),
///     tenant_context::<MongoTenantRepository>,
/// ));
/// ```
pub async fn tenant_context<R: TenantRepository + 'static>(
    State(service): State<TenantService<R>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let domain_name = request
        .headers()
        .get(TENANT_DOMAIN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            AppError::unauthorized("tenant.header.missing", "Missing X-Tenant-Domain header")
        })?;

    let tenant = match service.get_tenant_by_domain(domain_name).await {
        Ok(tenant) => tenant,
        Err(TenantError::NotFound(domain)) => {
            return Err(AppError::unauthorized(
                "tenant.not_found",
                format!("Tenant '{}' not found", domain),
            ));
        }
        Err(err) => return Err(err.into()),
    };

    request.extensions_mut().insert(tenant);

    Ok(next.run(request).await)
}

/// Extractor for the tenant resolved by [`tenant_context`]
///
/// # Example
/// ```ignore
/// async fn list_routes(CurrentTenant(tenant): CurrentTenant) { /* ... */ }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentTenant(pub Tenant);

impl<S> FromRequestParts<S> for CurrentTenant
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Tenant>()
            .cloned()
            .map(CurrentTenant)
            .ok_or_else(|| {
                AppError::internal("Tenant context missing; is the tenant middleware installed?")
            })
    }
}
