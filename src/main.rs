//! Price Tracker Backend Server
//!
//! REST API server for the price tracker dashboard.

use price_tracker_backend::api::create_router;
use price_tracker_backend::config::Config;
use price_tracker_backend::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use price_tracker_backend::error::ErrorResponse;
use price_tracker_backend::history::PricePoint;
use price_tracker_backend::models::{
    AlertResponse, HealthResponse, ProductDetail, ProductSummary, RootResponse, TrackResponse,
    TrackedProductInfo,
};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        price_tracker_backend::api::handlers::root,
        price_tracker_backend::api::handlers::health_check,
        price_tracker_backend::api::handlers::list_products,
        price_tracker_backend::api::handlers::get_product,
        price_tracker_backend::api::handlers::list_alerts,
        price_tracker_backend::api::handlers::track_product,
        price_tracker_backend::api::handlers::list_tracked,
    ),
    components(
        schemas(
            RootResponse,
            HealthResponse,
            ProductSummary,
            ProductDetail,
            PricePoint,
            AlertResponse,
            TrackResponse,
            TrackedProductInfo,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Service", description = "Index and health endpoints"),
        (name = "Products", description = "Product prices and history"),
        (name = "Alerts", description = "Near-low price alerts"),
        (name = "Tracking", description = "Product URL tracking"),
    ),
    info(
        title = "Price Tracker API",
        version = "0.1.0",
        description = "REST API for the price tracker dashboard",
        license(name = "MIT"),
        contact(name = "Joaquin Bejar", email = "jb@taunais.com")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let mut config = match std::env::var("CONFIG_PATH") {
        Ok(path) => {
            info!("Loading configuration from {}", path);
            Config::load(&path)?
        }
        Err(_) => Config::default(),
    };
    config.apply_env_overrides()?;

    // Create application state
    let state = Arc::new(AppState::from_config(&config));

    let host = &config.server.host;
    let port = config.server.port;

    info!("Starting Price Tracker Backend on {}:{}", host, port);
    info!(
        "Swagger UI available at http://{}:{}/swagger-ui/",
        host, port
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
