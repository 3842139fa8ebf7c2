//! Event routes API
//!
//! Wires up the routes domain, which pulls in the device, transformation,
//! and destination services to resolve route actors at write time.

use axum::Router;
use domain_destinations::{MongoRestDestinationRepository, RestDestinationService};
use domain_devices::{DeviceService, MongoDeviceRepository};
use domain_routes::{EventRouteService, MongoEventRouteRepository, handlers};
use domain_transformations::{MongoTransformationRepository, TransformationService};
use mongodb::Database;

use crate::state::AppState;

/// Create event routes router
pub fn router(state: &AppState) -> Router {
    let repository = MongoEventRouteRepository::new(state.db.clone());

    let devices = DeviceService::new(MongoDeviceRepository::new(state.db.clone()));
    let transformations =
        TransformationService::new(MongoTransformationRepository::new(state.db.clone()));
    let destinations =
        RestDestinationService::new(MongoRestDestinationRepository::new(state.db.clone()));

    let service = EventRouteService::new(repository, devices, transformations, destinations);

    handlers::router(service)
}

/// Initialize event route indexes in MongoDB
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoEventRouteRepository::new(db.clone())
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create event route indexes: {}", e))
}
