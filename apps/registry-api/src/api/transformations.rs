//! Transformations API routes
//!
//! This module wires up the transformations domain to HTTP routes.

use axum::Router;
use domain_transformations::{MongoTransformationRepository, TransformationService, handlers};
use mongodb::Database;

use crate::state::AppState;

/// Create transformations router
pub fn router(state: &AppState) -> Router {
    let repository = MongoTransformationRepository::new(state.db.clone());
    let service = TransformationService::new(repository);

    handlers::router(service)
}

/// Initialize transformation indexes in MongoDB
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoTransformationRepository::new(db.clone())
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create transformation indexes: {}", e))
}
