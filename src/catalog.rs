//! Product catalog storage.
//!
//! The catalog holds the products whose prices are simulated, plus the URLs
//! registered through the track endpoint. Handlers only see the
//! [`CatalogStore`] trait so the in-memory store can be swapped for a
//! persistent one without touching the API layer.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Deserialize;

/// A tracked product with the reference price its history is simulated from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// Stable unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Retail site the product is listed on.
    pub site: String,
    /// Reference price in dollars. Always positive.
    pub base_price: f64,
}

impl Product {
    /// Creates a new product record.
    #[must_use]
    pub fn new(id: &str, name: &str, site: &str, base_price: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            site: site.to_string(),
            base_price,
        }
    }
}

/// A URL registered for tracking.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedProduct {
    /// Identifier assigned at registration.
    pub product_id: String,
    /// Product page URL as submitted.
    pub url: String,
    /// Registration time.
    pub tracked_at: DateTime<Utc>,
}

/// Storage for the product catalog.
pub trait CatalogStore: Send + Sync {
    /// Returns every catalog product in definition order.
    fn list(&self) -> Vec<Product>;

    /// Looks up a product by id.
    fn find_by_id(&self, id: &str) -> Option<Product>;

    /// Registers a URL for tracking and returns the new record.
    fn track(&self, url: &str) -> TrackedProduct;

    /// Returns every registered URL in registration order.
    fn tracked(&self) -> Vec<TrackedProduct>;
}

/// In-memory catalog. Products are fixed at construction; tracked URLs live
/// until the process exits.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    tracked: RwLock<Vec<TrackedProduct>>,
}

impl InMemoryCatalog {
    /// Creates a catalog holding the given products.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            tracked: RwLock::new(Vec::new()),
        }
    }

    /// Number of catalog products, excluding tracked URLs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogStore for InMemoryCatalog {
    fn list(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn find_by_id(&self, id: &str) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    fn track(&self, url: &str) -> TrackedProduct {
        // Id allocation and insert happen under one write lock.
        let mut tracked = self.tracked.write();
        let next_id = self.products.len() + tracked.len() + 1;
        let record = TrackedProduct {
            product_id: next_id.to_string(),
            url: url.to_string(),
            tracked_at: Utc::now(),
        };
        tracked.push(record.clone());
        record
    }

    fn tracked(&self) -> Vec<TrackedProduct> {
        self.tracked.read().clone()
    }
}
