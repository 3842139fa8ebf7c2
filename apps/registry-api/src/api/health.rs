//! Readiness endpoint
//!
//! Liveness (`/health`, `/health/live`) comes from `axum_helpers::health_router`;
//! readiness needs the MongoDB handle, so it lives here.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use serde_json::Value;

use crate::state::AppState;

/// Create the readiness router, merged at the application root
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies the MongoDB connection answers pings
async fn readiness_check(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "mongodb",
        Box::pin(async {
            if database::mongodb::check_health(&state.mongo_client).await {
                Ok(())
            } else {
                Err("MongoDB ping failed".to_string())
            }
        }),
    )];

    run_health_checks(checks).await
}
