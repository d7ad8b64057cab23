//! HTTP client library for the Price Tracker API.
//!
//! This crate provides a typed HTTP client for interacting with the Price
//! Tracker backend API.
//!
//! # Example
//!
//! ```no_run
//! use tracker_client::{TrackerClient, ClientConfig};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tracker_client::Error> {
//!     let client = TrackerClient::new(ClientConfig {
//!         base_url: "http://localhost:8000".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     for product in client.list_products(None).await? {
//!         println!("{}: ${:.2} ({:+.2}%)", product.name, product.current_price, product.change);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, TrackerClient};
pub use error::Error;
pub use types::*;
