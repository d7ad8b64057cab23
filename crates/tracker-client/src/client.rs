//! HTTP client for the price tracker API.

use crate::error::Error;
use crate::types::*;
use reqwest::Client;
use std::time::Duration;


/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:8000").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the Price Tracker API.
#[derive(Debug, Clone)]
pub struct TrackerClient {
    client: Client,
    base_url: String,
}

impl TrackerClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        url::Url::parse(&config.base_url)?;
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Service
    // ========================================================================

    /// Gets the API index.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn root(&self) -> Result<RootResponse, Error> {
        let url = format!("{}/", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Performs a health check.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn health_check(&self) -> Result<HealthResponse, Error> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Products
    // ========================================================================

    /// Lists all products with their latest price analytics.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_products(
        &self,
        query: Option<&HistoryQuery>,
    ) -> Result<Vec<ProductSummary>, Error> {
        let url = self.url_with_query("/products", query);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Gets a product with its full price history.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the product does not exist, or another
    /// error if the request fails.
    pub async fn get_product(
        &self,
        product_id: &str,
        query: Option<&HistoryQuery>,
    ) -> Result<ProductDetail, Error> {
        let url = self.url_with_query(&format!("/products/{}", product_id), query);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Alerts
    // ========================================================================

    /// Lists near-low price alerts.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_alerts(&self) -> Result<Vec<AlertResponse>, Error> {
        let url = format!("{}/alerts", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Tracking
    // ========================================================================

    /// Registers a product URL for tracking.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn track_product(&self, product_url: &str) -> Result<TrackResponse, Error> {
        let query = TrackQuery {
            url: product_url.to_string(),
        };
        let url = self.url_with_query("/track", Some(&query));
        let resp = self.client.post(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Lists registered tracked URLs.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_tracked(&self) -> Result<Vec<TrackedProductInfo>, Error> {
        let url = format!("{}/tracked", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn url_with_query<Q: serde::Serialize>(&self, path: &str, query: Option<&Q>) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if let Some(q) = query {
            let params = serde_urlencoded::to_string(q).unwrap_or_default();
            if !params.is_empty() {
                url.push_str(&format!("?{}", params));
            }
        }
        url
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status.is_success() {
            Ok(resp.json().await?)
        } else if status.as_u16() == 404 {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::NotFound(text))
        } else {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}
