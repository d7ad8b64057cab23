//! URL tracking tests.

use price_tracker_backend::config::Config;
use tracker_tests::client_for;

#[tokio::test]
async fn test_track_product_default_catalog() {
    let client = client_for(&Config::default()).await;

    let response = client
        .track_product("http://example.com")
        .await
        .expect("Failed to track product");

    assert!(response.success);
    assert_eq!(response.product_id, "6");
    assert_eq!(response.message, "Now tracking: http://example.com");
}

#[tokio::test]
async fn test_track_ids_are_sequential() {
    let client = client_for(&Config::default()).await;

    let first = client.track_product("http://a.example").await.unwrap();
    let second = client.track_product("http://b.example").await.unwrap();

    assert_eq!(first.product_id, "6");
    assert_eq!(second.product_id, "7");
}

#[tokio::test]
async fn test_tracked_urls_listed() {
    let client = client_for(&Config::default()).await;
    let url = "https://shop.example/item?id=42&ref=home";

    client.track_product(url).await.expect("track");

    let tracked = client.list_tracked().await.expect("list tracked");
    assert_eq!(tracked.len(), 1);
    assert_eq!(tracked[0].url, url);
    assert_eq!(tracked[0].product_id, "6");

    let products = client.list_products(None).await.expect("list products");
    assert_eq!(products.len(), 5);
}

#[tokio::test]
async fn test_concurrent_tracking_assigns_unique_ids() {
    let client = client_for(&Config::default()).await;

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                client
                    .track_product(&format!("http://shop.example/{}", i))
                    .await
                    .expect("track")
                    .product_id
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().parse::<usize>().unwrap());
    }
    ids.sort_unstable();

    assert_eq!(ids, (6..16).collect::<Vec<_>>());
}
