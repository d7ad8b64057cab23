//! Request and response models for the REST API.

use crate::analytics::{PriceRange, PriceSummary};
use crate::catalog::{Product, TrackedProduct};
use crate::history::PricePoint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[cfg(test)]
mod tests;

// ============================================================================
// Service
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// API index response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    /// Service name.
    pub message: String,
    /// Available endpoints.
    pub endpoints: Vec<String>,
}

// ============================================================================
// Products
// ============================================================================

/// Query parameters for endpoints that generate a price history.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    /// Number of days in the history window (default 30).
    pub days: Option<usize>,
}

/// Product with its latest simulated price analytics.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    /// Product identifier.
    pub id: String,
    /// Product name.
    pub name: String,
    /// Retail site.
    pub site: String,
    /// Reference price.
    pub base_price: f64,
    /// Price on the last day of the window.
    pub current_price: f64,
    /// Price on the day before.
    pub previous_price: f64,
    /// Day-over-day change in percent.
    pub change: f64,
    /// Lowest price in the window.
    pub lowest_price: f64,
    /// Highest price in the window.
    pub highest_price: f64,
    /// Time the analytics were computed.
    pub last_updated: DateTime<Utc>,
}

impl ProductSummary {
    /// Builds a summary from a product and its price analytics.
    #[must_use]
    pub fn new(product: &Product, summary: &PriceSummary, last_updated: DateTime<Utc>) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            site: product.site.clone(),
            base_price: product.base_price,
            current_price: summary.current,
            previous_price: summary.previous,
            change: summary.change_percent,
            lowest_price: summary.range.lowest,
            highest_price: summary.range.highest,
            last_updated,
        }
    }
}

/// Product with its full simulated price history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    /// Product identifier.
    pub id: String,
    /// Product name.
    pub name: String,
    /// Retail site.
    pub site: String,
    /// Reference price.
    pub base_price: f64,
    /// Price on the last day of the window.
    pub current_price: f64,
    /// Daily prices, oldest first.
    pub price_history: Vec<PricePoint>,
    /// Lowest price in the window.
    pub lowest_price: f64,
    /// Highest price in the window.
    pub highest_price: f64,
}

impl ProductDetail {
    /// Builds a detail response. `current_price` is the last history point.
    #[must_use]
    pub fn new(
        product: &Product,
        current_price: f64,
        range: &PriceRange,
        price_history: Vec<PricePoint>,
    ) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            site: product.site.clone(),
            base_price: product.base_price,
            current_price,
            price_history,
            lowest_price: range.lowest,
            highest_price: range.highest,
        }
    }
}

// ============================================================================
// Alerts
// ============================================================================

/// A product whose current price is close to its window low.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertResponse {
    /// Product identifier.
    pub product_id: String,
    /// Product name.
    pub product_name: String,
    /// Price on the last day of the window.
    pub current_price: f64,
    /// Lowest price in the window.
    pub lowest_price: f64,
    /// Alert text.
    pub message: String,
    /// Time the alert was raised.
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Tracking
// ============================================================================

/// Query parameters for the track endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrackQuery {
    /// Product page URL.
    pub url: String,
}

/// Response after registering a URL.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackResponse {
    /// Whether the URL was registered.
    pub success: bool,
    /// Message describing the result.
    pub message: String,
    /// Identifier assigned to the tracked URL.
    pub product_id: String,
}

/// A registered tracked URL.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackedProductInfo {
    /// Identifier assigned at registration.
    pub product_id: String,
    /// Product page URL.
    pub url: String,
    /// Registration time.
    pub tracked_at: DateTime<Utc>,
}

impl From<TrackedProduct> for TrackedProductInfo {
    fn from(tracked: TrackedProduct) -> Self {
        Self {
            product_id: tracked.product_id,
            url: tracked.url,
            tracked_at: tracked.tracked_at,
        }
    }
}
