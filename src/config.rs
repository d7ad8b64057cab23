//! Configuration module for loading and parsing TOML configuration files.

use crate::catalog::Product;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Price history simulation configuration.
    #[serde(default)]
    pub history: HistoryConfig,
    /// Alert configuration.
    #[serde(default)]
    pub alerts: AlertConfig,
    /// Tracked product catalog.
    #[serde(default = "default_products")]
    pub products: Vec<Product>,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port number to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Price history simulation configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Number of days generated when a request does not ask for a window.
    pub default_days: usize,
    /// Largest window a request may ask for.
    pub max_days: usize,
    /// Maximum relative deviation from the base price (0.05 = ±5%).
    pub volatility: f64,
    /// Seed for reproducible histories. Fresh randomness on every call when unset.
    pub seed: Option<u64>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            default_days: 30,
            max_days: 365,
            volatility: 0.05,
            seed: None,
        }
    }
}

/// Alert configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Relative distance above the window low that still counts as "near low".
    pub near_low_threshold: f64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            near_low_threshold: 0.02,
        }
    }
}

/// Largest history window a configuration may allow (about ten years).
pub const MAX_HISTORY_DAYS: usize = 3650;

/// Products tracked out of the box.
#[must_use]
pub fn default_products() -> Vec<Product> {
    vec![
        Product::new("1", "MacBook Pro 14\"", "Amazon", 1999.0),
        Product::new("2", "iPhone 15 Pro", "BestBuy", 999.0),
        Product::new("3", "Sony WH-1000XM5", "Amazon", 349.0),
        Product::new("4", "Samsung 65\" OLED TV", "Walmart", 1499.0),
        Product::new("5", "PS5 Console", "Target", 499.0),
    ]
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Arguments
    /// * `content` - TOML content as string.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `HOST` and `PORT` environment overrides.
    ///
    /// # Errors
    /// Returns error if `PORT` is not a valid port number.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue(format!("PORT must be a number: {port}")))?;
        }
        Ok(())
    }

    /// Validates the configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.products.is_empty() {
            return Err(ConfigError::InvalidValue(
                "at least one product must be configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for product in &self.products {
            if product.id.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "product id cannot be empty".to_string(),
                ));
            }
            if !seen.insert(product.id.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            if product.base_price.is_nan() || product.base_price <= 0.0 {
                return Err(ConfigError::InvalidValue(format!(
                    "product {} base_price must be positive",
                    product.id
                )));
            }
        }

        let history = &self.history;
        if history.max_days < 2 {
            return Err(ConfigError::InvalidValue(
                "history max_days must be at least 2".to_string(),
            ));
        }
        if history.max_days > MAX_HISTORY_DAYS {
            return Err(ConfigError::InvalidValue(format!(
                "history max_days must be at most {MAX_HISTORY_DAYS}"
            )));
        }
        if history.default_days < 2 || history.default_days > history.max_days {
            return Err(ConfigError::InvalidValue(format!(
                "history default_days must be between 2 and {}",
                history.max_days
            )));
        }
        if history.volatility.is_nan() || history.volatility <= 0.0 || history.volatility >= 1.0 {
            return Err(ConfigError::InvalidValue(
                "history volatility must be between 0 and 1".to_string(),
            ));
        }

        let threshold = self.alerts.near_low_threshold;
        if threshold.is_nan() || threshold < 0.0 {
            return Err(ConfigError::InvalidValue(
                "alerts near_low_threshold cannot be negative".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            history: HistoryConfig::default(),
            alerts: AlertConfig::default(),
            products: default_products(),
        }
    }
}
