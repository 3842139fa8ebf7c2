//! API routes module
//!
//! This module wires the registry domains to HTTP routes. Everything except
//! tenant administration sits behind the tenant-context middleware, which
//! resolves the `X-Tenant-Domain` header before a handler runs.

pub mod destinations;
pub mod devices;
pub mod health;
pub mod routes;
pub mod tenants;
pub mod transformations;

use axum::{Router, middleware};
use domain_tenancy::{MongoTenantRepository, TenantService, middleware::tenant_context};
use mongodb::Database;
use tracing::info;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    let tenant_service = TenantService::new(MongoTenantRepository::new(state.db.clone()));

    // Tenant-scoped surface: the middleware rejects requests without a
    // resolvable X-Tenant-Domain header with 401.
    let tenant_scoped = Router::new()
        .nest("/devices", devices::router(state))
        .nest("/transformations", transformations::router(state))
        .nest("/destinations", destinations::router(state))
        .nest("/routes", routes::router(state))
        .layer(middleware::from_fn_with_state(
            tenant_service,
            tenant_context::<MongoTenantRepository>,
        ));

    Router::new()
        .merge(tenant_scoped)
        .nest("/tenants", tenants::router(state))
}

/// Create the MongoDB indexes the registry collections rely on
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    tenants::init_indexes(db).await?;
    devices::init_indexes(db).await?;
    transformations::init_indexes(db).await?;
    destinations::init_indexes(db).await?;
    routes::init_indexes(db).await?;
    info!("Registry collection indexes created");
    Ok(())
}
