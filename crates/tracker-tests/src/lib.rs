//! Integration tests for the Price Tracker API.
//!
//! Each test starts the API router on an ephemeral local port and talks to it
//! through [`TrackerClient`]. Set `API_BASE_URL` to run the same tests against
//! an already running server instead.

use price_tracker_backend::api::create_router;
use price_tracker_backend::config::Config;
use price_tracker_backend::state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracker_client::{ClientConfig, TrackerClient};

/// Gets the external API base URL from the environment, if configured.
#[must_use]
pub fn external_api_url() -> Option<String> {
    std::env::var("API_BASE_URL").ok()
}

/// Starts the API with the given configuration on `127.0.0.1:0`.
///
/// The server runs on the current tokio runtime and stops with it.
///
/// # Errors
/// Returns error if the listener cannot be bound.
pub async fn spawn_server(config: &Config) -> std::io::Result<String> {
    let state = Arc::new(AppState::from_config(config));
    let app = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(format!("http://{}", addr))
}

/// Creates a client for a freshly spawned server with the given configuration.
///
/// # Panics
/// Panics if the server cannot be started or the client cannot be built.
pub async fn client_for(config: &Config) -> TrackerClient {
    let base_url = spawn_server(config)
        .await
        .expect("Failed to start test server");
    build_client(base_url)
}

/// Creates a test client, against `API_BASE_URL` if set or a fresh
/// in-process server with the default configuration otherwise.
///
/// # Panics
/// Panics if the server cannot be started or the client cannot be built.
pub async fn create_test_client() -> TrackerClient {
    match external_api_url() {
        Some(base_url) => build_client(base_url),
        None => client_for(&Config::default()).await,
    }
}

fn build_client(base_url: String) -> TrackerClient {
    TrackerClient::new(ClientConfig {
        base_url,
        timeout: Duration::from_secs(10),
    })
    .expect("Failed to create client")
}
