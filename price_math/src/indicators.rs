//! Summary indicators derived from a price series and its forecast

use crate::{round2, MetricsError, Result};
use serde::Serialize;

/// Alert bucket for the expected price variation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendAlert {
    /// Variation above +5%: a significant increase is expected
    Increase,
    /// Variation below -5%: a significant decrease is expected
    Decrease,
    /// Variation within [-5%, +5%]: no significant movement expected
    Stable,
}

impl TrendAlert {
    /// Bucket a variation percentage
    ///
    /// The +/-5 boundaries themselves count as stable.
    pub fn from_variation(variation_pct: f64) -> Self {
        if variation_pct > 5.0 {
            TrendAlert::Increase
        } else if variation_pct < -5.0 {
            TrendAlert::Decrease
        } else {
            TrendAlert::Stable
        }
    }

    /// User-facing alert message
    pub fn message(&self) -> &'static str {
        match self {
            TrendAlert::Increase => "Warning: a significant price increase is expected.",
            TrendAlert::Decrease => "Good news: a significant price decrease is expected.",
            TrendAlert::Stable => "Prices should remain stable over the coming months.",
        }
    }

    /// Style class used by the report template
    pub fn style_class(&self) -> &'static str {
        match self {
            TrendAlert::Increase => "increase",
            TrendAlert::Decrease => "decrease",
            TrendAlert::Stable => "stable",
        }
    }
}

/// Key indicators recomputed on every pipeline run
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PriceIndicators {
    /// Mean of all observed prices, rounded to 2 decimals
    pub average: f64,
    /// Price of the last observation in date order, rounded to 2 decimals
    pub latest: f64,
    /// Forecast value at the end of the horizon, rounded to 2 decimals
    pub predicted: f64,
    /// Expected variation between latest and predicted, in percent
    pub variation_pct: f64,
}

impl PriceIndicators {
    /// Compute indicators from observed prices and the final forecast value
    ///
    /// The variation is computed on the rounded latest and predicted values,
    /// so the displayed numbers stay consistent with each other. A latest
    /// price that rounds to zero has no meaningful variation baseline and is
    /// reported as an error.
    pub fn compute(prices: &[f64], predicted: f64) -> Result<Self> {
        let latest = match prices.last() {
            Some(latest) => round2(*latest),
            None => {
                return Err(MetricsError::InsufficientData(
                    "cannot compute indicators for an empty price series".to_string(),
                ))
            }
        };

        let average = round2(prices.iter().sum::<f64>() / prices.len() as f64);
        let predicted = round2(predicted);

        if latest == 0.0 {
            return Err(MetricsError::ZeroBaseline(
                "cannot compute variation against a zero latest price".to_string(),
            ));
        }

        let variation_pct = round2((predicted - latest) / latest * 100.0);

        Ok(Self {
            average,
            latest,
            predicted,
            variation_pct,
        })
    }

    /// Alert bucket for the computed variation
    pub fn alert(&self) -> TrendAlert {
        TrendAlert::from_variation(self.variation_pct)
    }
}
