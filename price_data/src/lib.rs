//! # Price Data
//!
//! Core types and flat-file storage for per-product price histories.
//!
//! A product history is a plain CSV file with a `date,price` header, one row
//! per observation. Loading normalizes the rows into a [`PriceSeries`] sorted
//! ascending by date; appending a manually observed price re-sorts the series
//! and rewrites the file in full.
//!
//! ## Usage Example
//!
//! ```
//! use chrono::NaiveDate;
//! use price_data::{PriceObservation, PriceSeries};
//!
//! # fn main() -> Result<(), price_data::PriceError> {
//! let mut series = PriceSeries::new();
//! series.push(PriceObservation::new(
//!     NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
//!     12.0,
//! )?);
//! series.push(PriceObservation::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     10.0,
//! )?);
//!
//! // Observations are kept in date order regardless of insertion order.
//! assert_eq!(series.prices(), vec![10.0, 12.0]);
//! # Ok(())
//! # }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod store;
pub mod utils;

pub use store::ProductStore;

/// Errors that can occur while handling price data
#[derive(Error, Debug)]
pub enum PriceError {
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Data load error: {0}")]
    DataLoadError(String),

    #[error("Data write error: {0}")]
    DataWriteError(String),

    #[error("Unknown product: {0}")]
    UnknownProduct(String),
}

/// Result type for price data operations
pub type Result<T> = std::result::Result<T, PriceError>;

/// A single dated price observation for a product
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    /// Date the price was observed
    pub date: NaiveDate,
    /// Observed price, non-negative
    pub price: f64,
}

impl PriceObservation {
    /// Create a new observation, rejecting negative or non-finite prices
    pub fn new(date: NaiveDate, price: f64) -> Result<Self> {
        if !price.is_finite() {
            return Err(PriceError::InvalidPrice(format!(
                "price for {} must be a finite number",
                date
            )));
        }
        if price < 0.0 {
            return Err(PriceError::InvalidPrice(format!(
                "price for {} must not be negative (got {})",
                date, price
            )));
        }

        Ok(Self { date, price })
    }
}

/// A date-ordered series of price observations
///
/// The series is kept sorted ascending by date at all times. Duplicate dates
/// are allowed; the sort is stable, so entries sharing a date keep their
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct PriceSeries {
    observations: Vec<PriceObservation>,
}

impl PriceSeries {
    /// Create an empty series
    pub fn new() -> Self {
        Self {
            observations: Vec::new(),
        }
    }

    /// Create a series from unordered observations, normalizing to date order
    pub fn from_observations(mut observations: Vec<PriceObservation>) -> Self {
        observations.sort_by_key(|o| o.date);
        Self { observations }
    }

    /// Append an observation and restore date order
    pub fn push(&mut self, observation: PriceObservation) {
        self.observations.push(observation);
        self.observations.sort_by_key(|o| o.date);
    }

    /// Get the observations in date order
    pub fn observations(&self) -> &[PriceObservation] {
        &self.observations
    }

    /// Get the prices in date order
    pub fn prices(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.price).collect()
    }

    /// Get the observation dates in order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.observations.iter().map(|o| o.date).collect()
    }

    /// Get the most recent observation, if any
    pub fn latest(&self) -> Option<&PriceObservation> {
        self.observations.last()
    }

    /// Date of the first observation
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.observations.first().map(|o| o.date)
    }

    /// Date of the last observation
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|o| o.date)
    }

    /// Number of distinct observation dates
    pub fn distinct_dates(&self) -> usize {
        let mut count = 0;
        let mut previous: Option<NaiveDate> = None;
        for observation in &self.observations {
            if previous != Some(observation.date) {
                count += 1;
                previous = Some(observation.date);
            }
        }
        count
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Get the length of the series
    pub fn len(&self) -> usize {
        self.observations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_observation_validation() {
        assert!(PriceObservation::new(date(2024, 1, 1), 10.0).is_ok());
        assert!(PriceObservation::new(date(2024, 1, 1), 0.0).is_ok());
        assert!(PriceObservation::new(date(2024, 1, 1), -0.5).is_err());
        assert!(PriceObservation::new(date(2024, 1, 1), f64::NAN).is_err());
        assert!(PriceObservation::new(date(2024, 1, 1), f64::INFINITY).is_err());
    }

    #[test]
    fn test_push_keeps_date_order() {
        let mut series = PriceSeries::new();
        series.push(PriceObservation::new(date(2024, 1, 1), 10.0).unwrap());
        series.push(PriceObservation::new(date(2024, 2, 1), 12.0).unwrap());
        series.push(PriceObservation::new(date(2024, 1, 15), 11.0).unwrap());

        assert_eq!(
            series.dates(),
            vec![date(2024, 1, 1), date(2024, 1, 15), date(2024, 2, 1)]
        );
        assert_eq!(series.prices(), vec![10.0, 11.0, 12.0]);
    }

    #[test]
    fn test_duplicate_dates_are_kept_in_insertion_order() {
        let mut series = PriceSeries::new();
        series.push(PriceObservation::new(date(2024, 1, 1), 10.0).unwrap());
        series.push(PriceObservation::new(date(2024, 1, 1), 11.0).unwrap());

        assert_eq!(series.len(), 2);
        assert_eq!(series.distinct_dates(), 1);
        assert_eq!(series.prices(), vec![10.0, 11.0]);
    }

    #[test]
    fn test_latest_follows_sorted_order() {
        let series = PriceSeries::from_observations(vec![
            PriceObservation::new(date(2024, 3, 1), 14.0).unwrap(),
            PriceObservation::new(date(2024, 1, 1), 10.0).unwrap(),
        ]);

        assert_eq!(series.latest().unwrap().price, 14.0);
        assert_eq!(series.first_date(), Some(date(2024, 1, 1)));
        assert_eq!(series.last_date(), Some(date(2024, 3, 1)));
    }
}
