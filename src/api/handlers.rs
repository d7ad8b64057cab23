//! API request handlers.

use crate::analytics::{NEAR_LOW_MESSAGE, PriceRange, PriceSummary};
use crate::error::ApiError;
use crate::models::{
    AlertResponse, HealthResponse, HistoryQuery, ProductDetail, ProductSummary, RootResponse,
    TrackQuery, TrackResponse, TrackedProductInfo,
};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

/// Service name reported by the index endpoint.
pub const SERVICE_NAME: &str = "Price Tracker API";

// ============================================================================
// Service
// ============================================================================

/// API index.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service name and endpoints", body = RootResponse)
    ),
    tag = "Service"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: SERVICE_NAME.to_string(),
        endpoints: ["/products", "/products/{id}", "/alerts", "/track", "/tracked"]
            .iter()
            .map(|e| e.to_string())
            .collect(),
    })
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Service"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Products
// ============================================================================

/// List all products with their latest price analytics.
#[utoipa::path(
    get,
    path = "/products",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Products with current prices", body = [ProductSummary]),
        (status = 400, description = "Invalid history window")
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<ProductSummary>>, ApiError> {
    let days = state.history_days(query.days)?;
    let now = Utc::now();

    let products = state
        .catalog
        .list()
        .iter()
        .map(|product| -> Result<ProductSummary, ApiError> {
            let history = state.history.generate(product, days);
            let summary = PriceSummary::from_history(&history)?;
            Ok(ProductSummary::new(product, &summary, now))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Listed {} products over {} days", products.len(), days);
    Ok(Json(products))
}

/// Get a product with its full price history.
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = String, Path, description = "Product identifier"),
        HistoryQuery
    ),
    responses(
        (status = 200, description = "Product with price history", body = ProductDetail),
        (status = 400, description = "Invalid history window"),
        (status = 404, description = "Product not found")
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<ProductDetail>, ApiError> {
    let product = state
        .catalog
        .find_by_id(&id)
        .ok_or_else(|| ApiError::ProductNotFound(id.clone()))?;
    let days = state.history_days(query.days)?;

    let history = state.history.generate(&product, days);
    let (current_price, range) = PriceRange::with_latest(&history)?;

    Ok(Json(ProductDetail::new(
        &product,
        current_price,
        &range,
        history,
    )))
}

// ============================================================================
// Alerts
// ============================================================================

/// List products whose current price is near the window low.
#[utoipa::path(
    get,
    path = "/alerts",
    responses(
        (status = 200, description = "Near-low price alerts", body = [AlertResponse])
    ),
    tag = "Alerts"
)]
pub async fn list_alerts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AlertResponse>>, ApiError> {
    let days = state.history_config.default_days;
    let threshold = state.alert_config.near_low_threshold;
    let mut alerts = Vec::new();

    for product in state.catalog.list() {
        let history = state.history.generate(&product, days);
        let (current_price, range) = PriceRange::with_latest(&history)?;

        if range.is_near_low(current_price, threshold) {
            alerts.push(AlertResponse {
                product_id: product.id,
                product_name: product.name,
                current_price,
                lowest_price: range.lowest,
                message: NEAR_LOW_MESSAGE.to_string(),
                timestamp: Utc::now(),
            });
        }
    }

    debug!("Raised {} alerts", alerts.len());
    Ok(Json(alerts))
}

// ============================================================================
// Tracking
// ============================================================================

/// Register a product URL for tracking.
#[utoipa::path(
    post,
    path = "/track",
    params(TrackQuery),
    responses(
        (status = 200, description = "URL registered", body = TrackResponse),
        (status = 400, description = "Missing url parameter")
    ),
    tag = "Tracking"
)]
pub async fn track_product(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TrackQuery>,
) -> Json<TrackResponse> {
    let tracked = state.catalog.track(&query.url);
    info!("Tracking {} as product {}", tracked.url, tracked.product_id);

    Json(TrackResponse {
        success: true,
        message: format!("Now tracking: {}", tracked.url),
        product_id: tracked.product_id,
    })
}

/// List registered tracked URLs.
#[utoipa::path(
    get,
    path = "/tracked",
    responses(
        (status = 200, description = "Tracked URLs in registration order", body = [TrackedProductInfo])
    ),
    tag = "Tracking"
)]
pub async fn list_tracked(State(state): State<Arc<AppState>>) -> Json<Vec<TrackedProductInfo>> {
    Json(
        state
            .catalog
            .tracked()
            .into_iter()
            .map(TrackedProductInfo::from)
            .collect(),
    )
}
