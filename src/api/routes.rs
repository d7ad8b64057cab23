//! Route configuration.

use crate::api::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Service
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        // Products
        .route("/products", get(handlers::list_products))
        .route("/products/{id}", get(handlers::get_product))
        // Alerts
        .route("/alerts", get(handlers::list_alerts))
        // Tracking
        .route("/track", post(handlers::track_product))
        .route("/tracked", get(handlers::list_tracked))
        .with_state(state)
}
