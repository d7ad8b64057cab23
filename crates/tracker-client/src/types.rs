//! Request and response types for the price tracker API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};


// ============================================================================
// Service
// ============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// API index response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    /// Service name.
    pub message: String,
    /// Available endpoints.
    pub endpoints: Vec<String>,
}

/// Error body returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Error code.
    pub code: String,
}

// ============================================================================
// Products
// ============================================================================

/// Query parameters for history-backed endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryQuery {
    /// Number of days in the history window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<usize>,
}

impl HistoryQuery {
    /// Creates a query for a window of `days` days.
    #[must_use]
    pub fn days(days: usize) -> Self {
        Self { days: Some(days) }
    }
}

/// A single day in a price history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Calendar date.
    pub date: NaiveDate,
    /// Price in dollars.
    pub price: f64,
}

/// Product with its latest price analytics.
#[derive(Debug, Clone, Serialize, Deserialize)]
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

/// Product with its full price history.
#[derive(Debug, Clone, Serialize, Deserialize)]
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

// ============================================================================
// Alerts
// ============================================================================

/// A product whose current price is close to its window low.
#[derive(Debug, Clone, Serialize, Deserialize)]
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
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackQuery {
    /// Product page URL.
    pub url: String,
}

/// Response after registering a URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
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
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedProductInfo {
    /// Identifier assigned at registration.
    pub product_id: String,
    /// Product page URL.
    pub url: String,
    /// Registration time.
    pub tracked_at: DateTime<Utc>,
}
