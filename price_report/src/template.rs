//! HTML report template rendering
//!
//! Templates use `{{ key }}` placeholders. Every key is enumerated as a field
//! of [`ReportContext`]; rendering substitutes all of them and fails loudly
//! if any placeholder is left unresolved, instead of emitting literal
//! placeholder text into the report.

use crate::{ReportError, Result};
use chrono::NaiveDate;
use price_math::PriceIndicators;

/// Default report template shipped with the crate
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/report.html");

/// Values substituted into the report template
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// Product name shown in the heading
    pub product: String,
    /// Date the report was generated
    pub generated_on: NaiveDate,
    /// Average observed price
    pub average: f64,
    /// Latest observed price
    pub latest: f64,
    /// Predicted price at the end of the horizon
    pub predicted: f64,
    /// Expected variation in percent
    pub variation_pct: f64,
    /// Alert message shown in the report
    pub message: String,
    /// Style class applied to the alert block
    pub style: String,
    /// Path to the rendered history chart image
    pub history_chart: String,
    /// Path to the rendered forecast chart image
    pub forecast_chart: String,
}

impl ReportContext {
    /// Build a context from computed indicators and chart locations
    pub fn new(
        product: impl Into<String>,
        generated_on: NaiveDate,
        indicators: &PriceIndicators,
        history_chart: impl Into<String>,
        forecast_chart: impl Into<String>,
    ) -> Self {
        let alert = indicators.alert();
        Self {
            product: product.into(),
            generated_on,
            average: indicators.average,
            latest: indicators.latest,
            predicted: indicators.predicted,
            variation_pct: indicators.variation_pct,
            message: alert.message().to_string(),
            style: alert.style_class().to_string(),
            history_chart: history_chart.into(),
            forecast_chart: forecast_chart.into(),
        }
    }

    /// Every template key paired with its rendered value
    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("product", self.product.clone()),
            ("date", self.generated_on.format("%Y-%m-%d").to_string()),
            ("average", format!("{:.2}", self.average)),
            ("latest", format!("{:.2}", self.latest)),
            ("predicted", format!("{:.2}", self.predicted)),
            ("variation", format!("{:.2}", self.variation_pct)),
            ("message", self.message.clone()),
            ("style", self.style.clone()),
            ("history_chart", self.history_chart.clone()),
            ("forecast_chart", self.forecast_chart.clone()),
        ]
    }
}

/// Render a template by substituting every context key
///
/// Fails with the placeholder name if the template references a key the
/// context does not provide.
pub fn render(template: &str, context: &ReportContext) -> Result<String> {
    let mut html = template.to_string();

    for (key, value) in context.pairs() {
        html = html.replace(&format!("{{{{ {} }}}}", key), &value);
    }

    if let Some(start) = html.find("{{") {
        let rest = &html[start + 2..];
        let name = match rest.find("}}") {
            Some(end) => rest[..end].trim().to_string(),
            None => rest.chars().take(32).collect(),
        };
        return Err(ReportError::UnresolvedPlaceholder(name));
    }

    Ok(html)
}
