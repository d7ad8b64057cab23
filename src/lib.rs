//! # Price Tracker Backend - REST API Server
//!
//! A small REST API that serves a catalog of tracked retail products together
//! with a simulated daily price history and the analytics a price-watch
//! dashboard needs. Built with [Axum](https://crates.io/crates/axum) for async
//! HTTP handling and provides OpenAPI/Swagger documentation via
//! [utoipa](https://crates.io/crates/utoipa).
//!
//! ## Key Features
//!
//! - **Simulated Price History**: Each day in the window is sampled
//!   independently within ±5% of the product's base price.
//!
//! - **Price Analytics**: Current and previous price, day-over-day change,
//!   window low and high.
//!
//! - **Near-Low Alerts**: Products whose current price sits within 2% of the
//!   window low.
//!
//! - **URL Tracking**: Product page URLs can be registered for tracking.
//!
//! - **OpenAPI Documentation**: Auto-generated Swagger UI at `/swagger-ui/`.
//!
//! - **CORS Support**: Any origin, method and header is accepted.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`analytics`] | Current/previous price, percent change, range, near-low check |
//! | [`api`] | Route handlers and router configuration |
//! | [`catalog`] | Product records and the catalog store |
//! | [`config`] | TOML configuration |
//! | [`error`] | API error types with `IntoResponse` implementation |
//! | [`history`] | Simulated price history generation |
//! | [`models`] | Request/response DTOs with OpenAPI schemas |
//! | [`state`] | Application state management |
//!
//! ## API Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | Service name and endpoint list |
//! | GET | `/health` | Health check |
//! | GET | `/products` | All products with current price analytics |
//! | GET | `/products/{id}` | One product with its full price history |
//! | GET | `/alerts` | Products near their window low |
//! | POST | `/track?url=...` | Register a product URL |
//! | GET | `/tracked` | Registered product URLs |
//!
//! `/products` and `/products/{id}` accept an optional `days` query parameter
//! (default 30).
//!
//! ## Example Usage
//!
//! ```bash
//! # Development mode
//! cargo run
//!
//! # With a configuration file and custom port
//! CONFIG_PATH=config.toml PORT=3000 cargo run
//!
//! curl http://localhost:8000/products
//! curl http://localhost:8000/products/1?days=7
//! curl http://localhost:8000/alerts
//! curl -X POST "http://localhost:8000/track?url=https://example.com/item"
//! ```

pub mod analytics;
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod state;
