//! Devices API routes
//!
//! This module wires up the devices domain to HTTP routes.

use axum::Router;
use domain_devices::{DeviceService, MongoDeviceRepository, handlers};
use mongodb::Database;

use crate::state::AppState;

/// Create devices router
pub fn router(state: &AppState) -> Router {
    let repository = MongoDeviceRepository::new(state.db.clone());
    let service = DeviceService::new(repository);

    handlers::router(service)
}

/// Initialize device indexes in MongoDB
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoDeviceRepository::new(db.clone())
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create device indexes: {}", e))
}
