//! # Pricewatch
//!
//! Commodity price analysis and forecasting. This crate ties the member
//! crates together into a single pipeline: load a product's price history,
//! optionally merge a manually observed price, fit the forecasting model,
//! project 90 days ahead, and compute the user-facing indicators.
//!
//! ## Example
//!
//! ```no_run
//! use price_data::ProductStore;
//! use pricewatch::pipeline::PricePipeline;
//!
//! # fn main() -> Result<(), pricewatch::pipeline::PipelineError> {
//! let pipeline = PricePipeline::new(ProductStore::new("data"));
//! let run = pipeline.run("rice", None, false)?;
//!
//! println!("latest price: {}", run.indicators.latest);
//! println!("expected in 90 days: {}", run.indicators.predicted);
//! # Ok(())
//! # }
//! ```

pub mod pipeline;
pub mod report;

// Re-export commonly used types
pub use price_data::{PriceObservation, PriceSeries, ProductStore};
pub use price_forecast::{ForecastSeries, TrendSeasonalModel, DEFAULT_HORIZON_DAYS};
pub use price_math::{PriceIndicators, TrendAlert};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
