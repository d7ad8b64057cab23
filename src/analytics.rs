//! Price analytics derived from a generated history.

use crate::history::{PricePoint, round_to_cents};
use thiserror::Error;

/// Alert message attached to near-low alerts.
pub const NEAR_LOW_MESSAGE: &str = "Price near all-time low!";

/// Analytics error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// The history is too short for the requested metric.
    #[error("history has {actual} points, at least {required} required")]
    InsufficientHistory {
        /// Minimum number of points needed.
        required: usize,
        /// Number of points supplied.
        actual: usize,
    },

    /// Percent change is undefined against a zero price.
    #[error("previous price is zero, percent change is undefined")]
    ZeroPreviousPrice,
}

/// Lowest and highest price over a history window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    /// Lowest price in the window.
    pub lowest: f64,
    /// Highest price in the window.
    pub highest: f64,
}

impl PriceRange {
    /// Computes the range of a history.
    ///
    /// # Errors
    /// Returns [`AnalyticsError::InsufficientHistory`] for an empty history.
    pub fn of(history: &[PricePoint]) -> Result<Self, AnalyticsError> {
        let first = history.first().ok_or(AnalyticsError::InsufficientHistory {
            required: 1,
            actual: 0,
        })?;

        let range = history.iter().skip(1).fold(
            PriceRange {
                lowest: first.price,
                highest: first.price,
            },
            |acc, point| PriceRange {
                lowest: acc.lowest.min(point.price),
                highest: acc.highest.max(point.price),
            },
        );
        Ok(range)
    }

    /// Returns the last price of a history together with its range.
    ///
    /// # Errors
    /// Returns [`AnalyticsError::InsufficientHistory`] for an empty history.
    pub fn with_latest(history: &[PricePoint]) -> Result<(f64, Self), AnalyticsError> {
        let range = Self::of(history)?;
        let current = history.last().map_or(range.lowest, |p| p.price);
        Ok((current, range))
    }

    /// Returns true if `price` is within `threshold` (relative) of the low.
    #[must_use]
    pub fn is_near_low(&self, price: f64, threshold: f64) -> bool {
        price <= self.lowest * (1.0 + threshold)
    }
}

/// Day-over-day summary of a history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSummary {
    /// Price on the last day.
    pub current: f64,
    /// Price on the day before the last.
    pub previous: f64,
    /// Percent change from previous to current, rounded to two decimals.
    pub change_percent: f64,
    /// Window low and high.
    pub range: PriceRange,
}

impl PriceSummary {
    /// Summarizes a history of at least two points.
    ///
    /// # Errors
    /// Returns an error if the history has fewer than two points or the
    /// previous price is zero.
    pub fn from_history(history: &[PricePoint]) -> Result<Self, AnalyticsError> {
        let [.., previous, current] = history else {
            return Err(AnalyticsError::InsufficientHistory {
                required: 2,
                actual: history.len(),
            });
        };

        Ok(Self {
            current: current.price,
            previous: previous.price,
            change_percent: percent_change(previous.price, current.price)?,
            range: PriceRange::of(history)?,
        })
    }
}

/// Percent change from `previous` to `current`, rounded to two decimals.
///
/// # Errors
/// Returns [`AnalyticsError::ZeroPreviousPrice`] if `previous` is zero.
pub fn percent_change(previous: f64, current: f64) -> Result<f64, AnalyticsError> {
    if previous == 0.0 {
        return Err(AnalyticsError::ZeroPreviousPrice);
    }
    Ok(round_to_cents((current - previous) / previous * 100.0))
}
