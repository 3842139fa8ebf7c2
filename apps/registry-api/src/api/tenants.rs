//! Tenancy administration API routes
//!
//! These routes manage the tenants themselves, so they sit outside the
//! tenant-context middleware.

use axum::Router;
use domain_tenancy::{
    ApplicationService, MongoApplicationRepository, MongoTenantRepository, TenantService, handlers,
};
use mongodb::Database;

use crate::state::AppState;

/// Create tenancy admin router
pub fn router(state: &AppState) -> Router {
    let tenants = TenantService::new(MongoTenantRepository::new(state.db.clone()));
    let applications = ApplicationService::new(MongoApplicationRepository::new(state.db.clone()));

    handlers::router(tenants, applications)
}

/// Initialize tenant and application indexes in MongoDB
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoTenantRepository::new(db.clone())
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create tenant indexes: {}", e))?;

    MongoApplicationRepository::new(db.clone())
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create application indexes: {}", e))
}
