//! Forecasting models for price series

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use price_data::PriceSeries;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub mod trend_seasonal;

/// A single forecasted value with uncertainty bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Date the value is forecast for
    pub date: NaiveDate,
    /// Point estimate
    pub predicted: f64,
    /// Lower uncertainty bound
    pub lower: f64,
    /// Upper uncertainty bound
    pub upper: f64,
}

/// Daily forecast covering the historical range plus the projection horizon
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastSeries {
    points: Vec<ForecastPoint>,
}

impl ForecastSeries {
    /// Create a forecast series from dated points
    pub fn new(points: Vec<ForecastPoint>) -> Self {
        Self { points }
    }

    /// Get the forecast points in date order
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Get the first forecast point, if any
    pub fn first(&self) -> Option<&ForecastPoint> {
        self.points.first()
    }

    /// Get the final forecast point at the end of the horizon, if any
    pub fn last(&self) -> Option<&ForecastPoint> {
        self.points.last()
    }

    /// Points strictly after the given date (the projected future)
    pub fn future_points(&self, after: NaiveDate) -> &[ForecastPoint] {
        let start = self.points.partition_point(|p| p.date <= after);
        &self.points[start..]
    }

    /// Get the point estimates in date order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.predicted).collect()
    }

    /// Check if the forecast is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the number of forecast points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Serialize the forecast to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.points).map_err(|e| {
            ForecastError::ForecastingError(format!("failed to serialize forecast: {}", e))
        })
    }
}

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// Project fitted and future values
    ///
    /// Produces one point per day from the first historical observation
    /// through `horizon` days past the last one.
    fn project(&self, horizon: usize) -> Result<ForecastSeries>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on a price series
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model on a price series
    fn train(&self, series: &PriceSeries) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}
