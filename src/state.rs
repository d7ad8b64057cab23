//! Application state management.

use crate::catalog::{CatalogStore, InMemoryCatalog};
use crate::config::{AlertConfig, Config, HistoryConfig};
use crate::error::ApiError;
use crate::history::HistoryGenerator;
use std::sync::Arc;
use tracing::info;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Product catalog.
    pub catalog: Arc<dyn CatalogStore>,
    /// Price history generator.
    pub history: HistoryGenerator,
    /// History window settings.
    pub history_config: HistoryConfig,
    /// Alert settings.
    pub alert_config: AlertConfig,
}

impl AppState {
    /// Creates a new application state with the default catalog and settings.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Creates a new application state from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let catalog = Arc::new(InMemoryCatalog::new(config.products.clone()));
        info!("Loaded catalog with {} products", catalog.len());
        Self::with_catalog(catalog, config)
    }

    /// Creates a new application state around an existing catalog store.
    #[must_use]
    pub fn with_catalog(catalog: Arc<dyn CatalogStore>, config: &Config) -> Self {
        Self {
            catalog,
            history: HistoryGenerator::from_config(&config.history),
            history_config: config.history.clone(),
            alert_config: config.alerts.clone(),
        }
    }

    /// Resolves the requested history window, falling back to the default.
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidRequest`] if the window is shorter than two
    /// days or longer than the configured maximum.
    pub fn history_days(&self, requested: Option<usize>) -> Result<usize, ApiError> {
        let days = requested.unwrap_or(self.history_config.default_days);
        let max_days = self.history_config.max_days;
        if !(2..=max_days).contains(&days) {
            return Err(ApiError::InvalidRequest(format!(
                "days must be between 2 and {}, got {}",
                max_days, days
            )));
        }
        Ok(days)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
