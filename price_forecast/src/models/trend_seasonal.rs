//! Additive trend plus weekly seasonality model
//!
//! Fits a least-squares linear trend over days-since-origin, then estimates
//! an additive seasonal component from the residuals once the series spans at
//! least two full seasonal periods. The residual standard deviation drives
//! symmetric uncertainty bounds at the configured confidence level.

use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, ForecastPoint, ForecastSeries, TrainedForecastModel};
use chrono::{Days, NaiveDate};
use price_data::PriceSeries;
use statrs::distribution::{ContinuousCDF, Normal};

/// Default seasonal period in days (weekly cycle)
pub const DEFAULT_SEASONAL_PERIOD: usize = 7;

/// Default confidence level for the uncertainty bounds
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Additive trend plus seasonality model
#[derive(Debug, Clone)]
pub struct TrendSeasonalModel {
    /// Name of the model
    name: String,
    /// Seasonal period in days
    seasonal_period: usize,
    /// Confidence level for the uncertainty bounds
    confidence_level: f64,
}

/// Trained additive trend plus seasonality model
#[derive(Debug, Clone)]
pub struct TrainedTrendSeasonalModel {
    /// Name of the model
    name: String,
    /// Date of the first observation, origin of the day index
    origin: NaiveDate,
    /// Date of the last observation
    last_date: NaiveDate,
    /// Fitted trend slope per day
    slope: f64,
    /// Fitted trend intercept at the origin
    intercept: f64,
    /// Additive seasonal offsets, one per day of the period
    seasonal: Vec<f64>,
    /// Residual standard deviation
    sigma: f64,
    /// Normal quantile for the confidence level
    z: f64,
}

impl TrendSeasonalModel {
    /// Create a model with the default weekly period and 95% confidence
    pub fn new() -> Self {
        Self {
            name: format!(
                "Trend + Seasonality (period={}, confidence={})",
                DEFAULT_SEASONAL_PERIOD, DEFAULT_CONFIDENCE_LEVEL
            ),
            seasonal_period: DEFAULT_SEASONAL_PERIOD,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
        }
    }

    /// Create a model with an explicit seasonal period and confidence level
    pub fn with_params(seasonal_period: usize, confidence_level: f64) -> Result<Self> {
        if seasonal_period == 0 {
            return Err(ForecastError::InvalidParameter(
                "Seasonal period must be at least 1 day".to_string(),
            ));
        }
        if confidence_level <= 0.0 || confidence_level >= 1.0 {
            return Err(ForecastError::InvalidParameter(
                "Confidence level must be between 0 and 1".to_string(),
            ));
        }

        Ok(Self {
            name: format!(
                "Trend + Seasonality (period={}, confidence={})",
                seasonal_period, confidence_level
            ),
            seasonal_period,
            confidence_level,
        })
    }

    /// Seasonal period in days
    pub fn seasonal_period(&self) -> usize {
        self.seasonal_period
    }

    /// Confidence level for the uncertainty bounds
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }
}

impl Default for TrendSeasonalModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastModel for TrendSeasonalModel {
    type Trained = TrainedTrendSeasonalModel;

    fn train(&self, series: &PriceSeries) -> Result<Self::Trained> {
        let observations = series.observations();
        if observations.len() < 2 {
            return Err(ForecastError::ValidationError(format!(
                "Insufficient data for fitting. Need at least 2 observations, got {}.",
                observations.len()
            )));
        }

        let origin = observations[0].date;
        let last_date = observations[observations.len() - 1].date;

        let xs: Vec<f64> = observations
            .iter()
            .map(|o| (o.date - origin).num_days() as f64)
            .collect();
        let ys: Vec<f64> = observations.iter().map(|o| o.price).collect();

        let n = xs.len() as f64;
        let x_mean = xs.iter().sum::<f64>() / n;
        let y_mean = ys.iter().sum::<f64>() / n;

        // Least-squares trend over days since the first observation
        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (x, y) in xs.iter().zip(ys.iter()) {
            numerator += (x - x_mean) * (y - y_mean);
            denominator += (x - x_mean) * (x - x_mean);
        }

        if denominator.abs() < 1e-10 {
            return Err(ForecastError::ValidationError(
                "Cannot fit a trend: observations must cover at least two distinct dates"
                    .to_string(),
            ));
        }

        let slope = numerator / denominator;
        let intercept = y_mean - slope * x_mean;

        let mut residuals: Vec<f64> = xs
            .iter()
            .zip(ys.iter())
            .map(|(x, y)| y - (intercept + slope * x))
            .collect();

        // Seasonal offsets from residual means per day of the period, once
        // the series spans at least two full periods
        let period = self.seasonal_period;
        let span_days = (last_date - origin).num_days() as usize;
        let mut seasonal = vec![0.0; period];

        if period > 1 && span_days + 1 >= 2 * period {
            let mut sums = vec![0.0; period];
            let mut counts = vec![0usize; period];

            for (x, residual) in xs.iter().zip(residuals.iter()) {
                let slot = (*x as i64).rem_euclid(period as i64) as usize;
                sums[slot] += residual;
                counts[slot] += 1;
            }

            for slot in 0..period {
                if counts[slot] > 0 {
                    seasonal[slot] = sums[slot] / counts[slot] as f64;
                }
            }

            // Center the component so it carries no net offset
            let offset = seasonal.iter().sum::<f64>() / period as f64;
            for value in seasonal.iter_mut() {
                *value -= offset;
            }

            for (x, residual) in xs.iter().zip(residuals.iter_mut()) {
                let slot = (*x as i64).rem_euclid(period as i64) as usize;
                *residual -= seasonal[slot];
            }
        }

        let sigma = (residuals.iter().map(|r| r * r).sum::<f64>() / n).sqrt();

        let normal = Normal::new(0.0, 1.0).map_err(|e| {
            ForecastError::ForecastingError(format!(
                "failed to build the standard normal distribution: {}",
                e
            ))
        })?;
        let z = normal.inverse_cdf(0.5 + self.confidence_level / 2.0);

        Ok(TrainedTrendSeasonalModel {
            name: self.name.clone(),
            origin,
            last_date,
            slope,
            intercept,
            seasonal,
            sigma,
            z,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedTrendSeasonalModel {
    /// Fitted trend slope per day
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Fitted trend intercept at the origin date
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Residual standard deviation after trend and seasonality
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Fitted value for a date
    pub fn fitted(&self, date: NaiveDate) -> f64 {
        let x = (date - self.origin).num_days();
        let slot = x.rem_euclid(self.seasonal.len() as i64) as usize;
        self.intercept + self.slope * x as f64 + self.seasonal[slot]
    }
}

impl TrainedForecastModel for TrainedTrendSeasonalModel {
    fn project(&self, horizon: usize) -> Result<ForecastSeries> {
        if horizon == 0 {
            return Err(ForecastError::ValidationError(
                "Projection horizon must be at least one day".to_string(),
            ));
        }

        let total_days = (self.last_date - self.origin).num_days() as usize + horizon;
        let margin = self.z * self.sigma;
        let mut points = Vec::with_capacity(total_days + 1);

        for offset in 0..=total_days {
            let date = self
                .origin
                .checked_add_days(Days::new(offset as u64))
                .ok_or_else(|| {
                    ForecastError::ForecastingError(format!(
                        "projection date out of range at offset {}",
                        offset
                    ))
                })?;

            let predicted = self.fitted(date);
            points.push(ForecastPoint {
                date,
                predicted,
                lower: predicted - margin,
                upper: predicted + margin,
            });
        }

        Ok(ForecastSeries::new(points))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
