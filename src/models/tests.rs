//! Unit tests for models module.

use super::*;
use chrono::{NaiveDate, TimeZone};

fn sample_product() -> Product {
    Product::new("2", "iPhone 15 Pro", "BestBuy", 999.0)
}

fn sample_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

// ============================================================================
// ProductSummary Tests
// ============================================================================

#[test]
fn test_product_summary_new() {
    let summary = PriceSummary {
        current: 980.5,
        previous: 1000.0,
        change_percent: -1.95,
        range: PriceRange {
            lowest: 950.1,
            highest: 1048.0,
        },
    };

    let response = ProductSummary::new(&sample_product(), &summary, sample_time());
    assert_eq!(response.id, "2");
    assert_eq!(response.base_price, 999.0);
    assert_eq!(response.current_price, 980.5);
    assert_eq!(response.previous_price, 1000.0);
    assert_eq!(response.change, -1.95);
    assert_eq!(response.lowest_price, 950.1);
    assert_eq!(response.highest_price, 1048.0);
}

#[test]
fn test_product_summary_serialization_uses_camel_case() {
    let summary = PriceSummary {
        current: 980.5,
        previous: 1000.0,
        change_percent: -1.95,
        range: PriceRange {
            lowest: 950.1,
            highest: 1048.0,
        },
    };
    let response = ProductSummary::new(&sample_product(), &summary, sample_time());

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"basePrice\":999.0"));
    assert!(json.contains("\"currentPrice\":980.5"));
    assert!(json.contains("\"previousPrice\":1000.0"));
    assert!(json.contains("\"change\":-1.95"));
    assert!(json.contains("\"lowestPrice\":950.1"));
    assert!(json.contains("\"highestPrice\":1048.0"));
    assert!(json.contains("\"lastUpdated\":\"2024-03-15T12:00:00Z\""));
}

// ============================================================================
// ProductDetail Tests
// ============================================================================

#[test]
fn test_product_detail_serialization() {
    let history = vec![
        PricePoint {
            date: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            price: 1001.25,
        },
        PricePoint {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            price: 990.0,
        },
    ];
    let range = PriceRange {
        lowest: 990.0,
        highest: 1001.25,
    };

    let detail = ProductDetail::new(&sample_product(), 990.0, &range, history);
    let json = serde_json::to_value(&detail).unwrap();

    assert_eq!(json["id"], "2");
    assert_eq!(json["currentPrice"], 990.0);
    assert_eq!(json["priceHistory"].as_array().unwrap().len(), 2);
    assert_eq!(json["priceHistory"][0]["date"], "2024-03-14");
    assert_eq!(json["priceHistory"][1]["price"], 990.0);
    assert_eq!(json["lowestPrice"], 990.0);
    assert_eq!(json["highestPrice"], 1001.25);
}

// ============================================================================
// Alert and Tracking Tests
// ============================================================================

#[test]
fn test_alert_response_serialization() {
    let alert = AlertResponse {
        product_id: "3".to_string(),
        product_name: "Sony WH-1000XM5".to_string(),
        current_price: 332.1,
        lowest_price: 331.6,
        message: "Price near all-time low!".to_string(),
        timestamp: sample_time(),
    };

    let json = serde_json::to_string(&alert).unwrap();
    assert!(json.contains("\"productId\":\"3\""));
    assert!(json.contains("\"productName\":\"Sony WH-1000XM5\""));
    assert!(json.contains("\"currentPrice\":332.1"));
    assert!(json.contains("\"lowestPrice\":331.6"));
    assert!(json.contains("\"message\":\"Price near all-time low!\""));
}

#[test]
fn test_track_response_serialization() {
    let response = TrackResponse {
        success: true,
        message: "Now tracking: http://example.com".to_string(),
        product_id: "6".to_string(),
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("\"productId\":\"6\""));
}

#[test]
fn test_tracked_product_info_from() {
    let tracked = TrackedProduct {
        product_id: "6".to_string(),
        url: "http://example.com".to_string(),
        tracked_at: sample_time(),
    };

    let info = TrackedProductInfo::from(tracked);
    assert_eq!(info.product_id, "6");
    assert_eq!(info.url, "http://example.com");
    assert_eq!(info.tracked_at, sample_time());
}

#[test]
fn test_history_query_deserialization() {
    let query: HistoryQuery = serde_json::from_str(r#"{"days": 7}"#).unwrap();
    assert_eq!(query.days, Some(7));

    let query: HistoryQuery = serde_json::from_str("{}").unwrap();
    assert!(query.days.is_none());
}
