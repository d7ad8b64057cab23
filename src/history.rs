//! Simulated daily price history.
//!
//! Each day is sampled independently around the product's base price; there
//! is no drift or correlation between consecutive days.

use crate::catalog::Product;
use crate::config::HistoryConfig;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single day in a price history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PricePoint {
    /// Calendar date (YYYY-MM-DD).
    #[schema(value_type = String, example = "2024-03-15")]
    pub date: NaiveDate,
    /// Price in dollars, rounded to cents.
    pub price: f64,
}

/// Rounds a dollar amount to two decimal places.
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generates `days` price points ending on `today`, oldest first.
///
/// Every price is `base_price * (1 + u)` with `u` drawn uniformly from
/// `[-volatility, volatility]`, then rounded to cents.
pub fn generate_price_history<R: Rng + ?Sized>(
    rng: &mut R,
    base_price: f64,
    days: usize,
    volatility: f64,
    today: NaiveDate,
) -> Vec<PricePoint> {
    window_dates(days, today)
        .map(|date| PricePoint {
            date,
            price: sample_price(rng, base_price, volatility),
        })
        .collect()
}

fn window_dates(days: usize, today: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (0..days)
        .rev()
        .map(move |days_ago| today - Duration::days(days_ago as i64))
}

fn sample_price<R: Rng + ?Sized>(rng: &mut R, base_price: f64, volatility: f64) -> f64 {
    let change: f64 = rng.gen_range(-volatility..=volatility);
    round_to_cents(base_price * (1.0 + change))
}

/// Produces price histories for catalog products.
///
/// Without a seed every call draws from the thread-local RNG. With a seed,
/// each day's price comes from its own RNG keyed on (seed, product id, date),
/// so a given day has one price no matter which window it is read through.
#[derive(Debug, Clone)]
pub struct HistoryGenerator {
    volatility: f64,
    seed: Option<u64>,
}

impl HistoryGenerator {
    /// Creates a generator.
    #[must_use]
    pub fn new(volatility: f64, seed: Option<u64>) -> Self {
        Self { volatility, seed }
    }

    /// Creates a generator from the history configuration.
    #[must_use]
    pub fn from_config(config: &HistoryConfig) -> Self {
        Self::new(config.volatility, config.seed)
    }

    /// Generates a history ending today (UTC).
    #[must_use]
    pub fn generate(&self, product: &Product, days: usize) -> Vec<PricePoint> {
        self.generate_until(product, days, Utc::now().date_naive())
    }

    /// Generates a history ending on the given date.
    #[must_use]
    pub fn generate_until(
        &self,
        product: &Product,
        days: usize,
        today: NaiveDate,
    ) -> Vec<PricePoint> {
        match self.seed {
            Some(seed) => window_dates(days, today)
                .map(|date| {
                    let mut rng = StdRng::seed_from_u64(day_seed(seed, &product.id, date));
                    PricePoint {
                        date,
                        price: sample_price(&mut rng, product.base_price, self.volatility),
                    }
                })
                .collect(),
            None => generate_price_history(
                &mut rand::thread_rng(),
                product.base_price,
                days,
                self.volatility,
                today,
            ),
        }
    }
}

impl Default for HistoryGenerator {
    fn default() -> Self {
        Self::from_config(&HistoryConfig::default())
    }
}

/// FNV-1a over the seed, product id and day number. Stable across toolchains.
fn day_seed(seed: u64, product_id: &str, date: NaiveDate) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let seed_bytes = seed.to_le_bytes();
    let day_bytes = date.num_days_from_ce().to_le_bytes();
    seed_bytes
        .iter()
        .chain(product_id.as_bytes())
        .chain(day_bytes.iter())
        .fold(FNV_OFFSET, |hash, &byte| {
            (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(1.234), 1.23);
        assert_eq!(round_to_cents(1.235_1), 1.24);
        assert_eq!(round_to_cents(1999.0), 1999.0);
        assert_eq!(round_to_cents(0.0), 0.0);
    }

    #[test]
    fn test_history_length_and_dates() {
        let mut rng = StdRng::seed_from_u64(7);
        let today = date(2024, 3, 2);
        let history = generate_price_history(&mut rng, 999.0, 30, 0.05, today);

        assert_eq!(history.len(), 30);
        assert_eq!(history.last().unwrap().date, today);
        assert_eq!(history[0].date, date(2024, 2, 2));
        for pair in history.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn test_history_within_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let today = date(2024, 1, 15);

        for base in [1999.0, 999.0, 349.0, 1499.0, 499.0, 12.5] {
            let history = generate_price_history(&mut rng, base, 365, 0.05, today);
            for point in &history {
                assert!(point.price > 0.0);
                assert!(point.price >= round_to_cents(base * 0.95) - 1e-9);
                assert!(point.price <= round_to_cents(base * 1.05) + 1e-9);
            }
        }
    }

    #[test]
    fn test_history_prices_are_rounded() {
        let mut rng = StdRng::seed_from_u64(3);
        let history = generate_price_history(&mut rng, 349.0, 50, 0.05, date(2024, 6, 1));
        for point in history {
            let cents = point.price * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_history_small_windows() {
        let mut rng = StdRng::seed_from_u64(1);
        let today = date(2024, 6, 1);

        assert!(generate_price_history(&mut rng, 100.0, 0, 0.05, today).is_empty());

        let single = generate_price_history(&mut rng, 100.0, 1, 0.05, today);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].date, today);
    }

    #[test]
    fn test_history_crosses_year_boundary() {
        let mut rng = StdRng::seed_from_u64(5);
        let history = generate_price_history(&mut rng, 100.0, 3, 0.05, date(2024, 1, 1));
        let dates: Vec<NaiveDate> = history.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date(2023, 12, 30), date(2023, 12, 31), date(2024, 1, 1)]);
    }

    #[test]
    fn test_history_days_are_independent() {
        // A random walk would wander; independent samples keep returning near the base.
        let mut rng = StdRng::seed_from_u64(99);
        let history = generate_price_history(&mut rng, 1000.0, 2000, 0.05, date(2024, 6, 1));
        let mean = history.iter().map(|p| p.price).sum::<f64>() / history.len() as f64;
        assert!((mean - 1000.0).abs() < 5.0);
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let generator = HistoryGenerator::new(0.05, Some(42));
        let product = Product::new("1", "MacBook", "Amazon", 1999.0);
        let today = date(2024, 5, 10);

        let first = generator.generate_until(&product, 30, today);
        let second = generator.generate_until(&product, 30, today);
        assert_eq!(first, second);
    }

    #[test]
    fn test_seeded_generator_varies_by_product() {
        let generator = HistoryGenerator::new(0.05, Some(42));
        let a = Product::new("1", "A", "Shop", 1000.0);
        let b = Product::new("2", "B", "Shop", 1000.0);
        let today = date(2024, 5, 10);

        assert_ne!(
            generator.generate_until(&a, 30, today),
            generator.generate_until(&b, 30, today)
        );
    }

    #[test]
    fn test_seeded_day_price_independent_of_window() {
        let generator = HistoryGenerator::new(0.05, Some(42));
        let product = Product::new("1", "MacBook", "Amazon", 1999.0);
        let today = date(2024, 5, 10);

        let week = generator.generate_until(&product, 7, today);
        let month = generator.generate_until(&product, 30, today);
        assert_eq!(week.last(), month.last());
        assert_eq!(week.as_slice(), &month[23..]);

        let yesterday = generator.generate_until(&product, 7, date(2024, 5, 9));
        assert_eq!(yesterday.as_slice(), &month[22..29]);
    }

    #[test]
    fn test_day_seed_is_stable() {
        assert_eq!(day_seed(42, "1", date(2024, 5, 10)), 0x38f2_2149_92c0_8d93);
        assert_ne!(day_seed(42, "1", date(2024, 5, 10)), day_seed(42, "1", date(2024, 5, 11)));
        assert_ne!(day_seed(42, "1", date(2024, 5, 10)), day_seed(42, "2", date(2024, 5, 10)));
        assert_ne!(day_seed(42, "1", date(2024, 5, 10)), day_seed(43, "1", date(2024, 5, 10)));
    }

    #[test]
    fn test_unseeded_generator_respects_bounds() {
        let generator = HistoryGenerator::default();
        let product = Product::new("5", "PS5 Console", "Target", 499.0);
        let before = Utc::now().date_naive();
        let history = generator.generate(&product, 30);
        let after = Utc::now().date_naive();

        assert_eq!(history.len(), 30);
        let last = history.last().unwrap().date;
        assert!(last == before || last == after);
        assert!(history.iter().all(|p| p.price >= 474.05 && p.price <= 523.95));
    }

    #[test]
    fn test_price_point_serialization() {
        let point = PricePoint {
            date: date(2024, 3, 15),
            price: 349.5,
        };
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"date":"2024-03-15","price":349.5}"#);
    }
}
