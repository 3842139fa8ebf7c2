//! REST destinations API routes
//!
//! This module wires up the destinations domain to HTTP routes.

use axum::Router;
use domain_destinations::{MongoRestDestinationRepository, RestDestinationService, handlers};
use mongodb::Database;

use crate::state::AppState;

/// Create destinations router
pub fn router(state: &AppState) -> Router {
    let repository = MongoRestDestinationRepository::new(state.db.clone());
    let service = RestDestinationService::new(repository);

    handlers::router(service)
}

/// Initialize destination indexes in MongoDB
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoRestDestinationRepository::new(db.clone())
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create destination indexes: {}", e))
}
