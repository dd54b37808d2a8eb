//! The per-run analysis pipeline
//!
//! Each invocation loads the series fresh from storage, runs to completion,
//! and returns an independent result object. Nothing is shared between runs
//! beyond the storage files themselves.

use price_data::{PriceError, PriceObservation, PriceSeries, ProductStore};
use price_forecast::{
    ForecastError, ForecastModel, ForecastSeries, TrainedForecastModel, TrendSeasonalModel,
    DEFAULT_HORIZON_DAYS,
};
use price_math::{MetricsError, PriceIndicators, TrendAlert};
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by a pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Price(#[from] PriceError),

    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

/// Result type for pipeline runs
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Everything produced by a single pipeline run
#[derive(Debug, Clone)]
pub struct PipelineRun {
    /// Product the run was executed for
    pub product: String,
    /// Historical series, including any merged manual entry
    pub series: PriceSeries,
    /// Daily forecast over the history plus the 90-day horizon
    pub forecast: ForecastSeries,
    /// Summary indicators derived from series and forecast
    pub indicators: PriceIndicators,
}

impl PipelineRun {
    /// Alert bucket for the run's expected variation
    pub fn alert(&self) -> TrendAlert {
        self.indicators.alert()
    }
}

/// Load, append, fit, project, and summarize for one product at a time
#[derive(Debug, Clone)]
pub struct PricePipeline {
    store: ProductStore,
    model: TrendSeasonalModel,
}

impl PricePipeline {
    /// Create a pipeline over a store with the default model
    pub fn new(store: ProductStore) -> Self {
        Self {
            store,
            model: TrendSeasonalModel::new(),
        }
    }

    /// Create a pipeline with an explicit model configuration
    pub fn with_model(store: ProductStore, model: TrendSeasonalModel) -> Self {
        Self { store, model }
    }

    /// The underlying product store
    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    /// Execute one full run for a product
    ///
    /// A manual entry, when given, is merged into the series before fitting;
    /// with `persist` set, the product file is rewritten with the entry
    /// included. The forecast always extends [`DEFAULT_HORIZON_DAYS`] past
    /// the last observation.
    pub fn run(
        &self,
        product: &str,
        new_entry: Option<PriceObservation>,
        persist: bool,
    ) -> Result<PipelineRun> {
        let mut series = self.store.load(product)?;
        debug!(product, observations = series.len(), "loaded price history");

        if let Some(observation) = new_entry {
            if persist {
                series = self.store.append(product, observation)?;
            } else {
                series.push(observation);
            }
            debug!(
                product,
                date = %observation.date,
                price = observation.price,
                "merged manual entry"
            );
        }

        let trained = self.model.train(&series)?;
        let forecast = trained.project(DEFAULT_HORIZON_DAYS)?;

        let predicted = forecast
            .last()
            .ok_or_else(|| {
                ForecastError::ForecastingError("projection produced no points".to_string())
            })?
            .predicted;

        let indicators = PriceIndicators::compute(&series.prices(), predicted)?;

        Ok(PipelineRun {
            product: product.to_string(),
            series,
            forecast,
            indicators,
        })
    }
}
