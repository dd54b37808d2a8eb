//! # Price Math
//!
//! Indicator calculations for price series analysis. This crate computes the
//! user-facing summary numbers (average, latest, predicted, expected
//! variation) and the alert bucket derived from them.

use thiserror::Error;

pub mod indicators;

pub use indicators::{PriceIndicators, TrendAlert};

/// Errors that can occur in indicator calculations
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Zero baseline: {0}")]
    ZeroBaseline(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for indicator calculations
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Round a value to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(10.004), 10.0);
        assert_eq!(round2(10.016), 10.02);
        assert_eq!(round2(-3.456), -3.46);
        assert_eq!(round2(0.0), 0.0);
    }
}
