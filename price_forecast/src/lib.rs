//! # Price Forecast
//!
//! Forecasting over daily price series: an additive trend plus weekly
//! seasonality model, dated forecast points with uncertainty bounds, and CSV
//! export of the resulting projection.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use price_data::{PriceObservation, PriceSeries};
//! use price_forecast::{
//!     ForecastModel, TrainedForecastModel, TrendSeasonalModel, DEFAULT_HORIZON_DAYS,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut series = PriceSeries::new();
//! for (day, price) in [(1, 10.0), (2, 10.5), (3, 11.0)] {
//!     let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
//!     series.push(PriceObservation::new(date, price)?);
//! }
//!
//! // Fit the model and project 90 days past the last observation.
//! let trained = TrendSeasonalModel::new().train(&series)?;
//! let forecast = trained.project(DEFAULT_HORIZON_DAYS)?;
//!
//! let last = forecast.last().unwrap();
//! assert_eq!(last.date, NaiveDate::from_ymd_opt(2024, 4, 2).unwrap());
//! assert!(last.lower <= last.predicted && last.predicted <= last.upper);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod export;
pub mod models;

// Re-export commonly used types
pub use crate::error::ForecastError;
pub use crate::models::trend_seasonal::{TrainedTrendSeasonalModel, TrendSeasonalModel};
pub use crate::models::{ForecastModel, ForecastPoint, ForecastSeries, TrainedForecastModel};

/// Days projected past the last historical observation
pub const DEFAULT_HORIZON_DAYS: usize = 90;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
