//! PNG chart rendering for price histories and forecasts

use crate::{ReportError, Result};
use plotters::prelude::*;
use price_data::PriceSeries;
use price_forecast::ForecastSeries;
use std::path::Path;
use tracing::info;

/// Default chart width in pixels
pub const CHART_WIDTH: u32 = 900;
/// Default chart height in pixels
pub const CHART_HEIGHT: u32 = 540;

/// Price range with 10% padding, floored at zero
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }

    let range = (max - min).max(1e-8); // Avoid a collapsed axis
    let padding = range * 0.1;
    ((min - padding).max(0.0), max + padding)
}

/// Render the historical price series as a line chart with point markers
pub fn history_chart(
    title: &str,
    series: &PriceSeries,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<()> {
    let observations = series.observations();
    if observations.len() < 2 {
        return Err(ReportError::ChartError(
            "not enough price data to draw a chart (minimum 2 points required)".to_string(),
        ));
    }

    let x_min = observations[0].date;
    let x_max = observations[observations.len() - 1].date;
    if x_min == x_max {
        return Err(ReportError::ChartError(
            "price history covers a single date, nothing to plot".to_string(),
        ));
    }

    let (y_min, y_max) = padded_range(observations.iter().map(|o| o.price));

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ReportError::ChartError(format!("failed to fill canvas: {}", e)))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 32.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| ReportError::ChartError(format!("failed to build chart: {}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Price")
        .draw()
        .map_err(|e| ReportError::ChartError(format!("failed to draw mesh: {}", e)))?;

    chart
        .draw_series(LineSeries::new(
            observations.iter().map(|o| (o.date, o.price)),
            &BLUE,
        ))
        .map_err(|e| ReportError::ChartError(format!("failed to draw price line: {}", e)))?;

    chart
        .draw_series(
            observations
                .iter()
                .map(|o| Circle::new((o.date, o.price), 3, BLUE.filled())),
        )
        .map_err(|e| ReportError::ChartError(format!("failed to draw price points: {}", e)))?;

    root.present()
        .map_err(|e| ReportError::ChartError(format!("failed to render chart: {}", e)))?;

    info!(chart = %path.display(), "rendered history chart");
    Ok(())
}

/// Render the forecast as a line with its uncertainty band over the
/// historical observations
pub fn forecast_chart(
    title: &str,
    series: &PriceSeries,
    forecast: &ForecastSeries,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<()> {
    let observations = series.observations();
    let points = forecast.points();
    if points.len() < 2 {
        return Err(ReportError::ChartError(
            "not enough forecast data to draw a chart (minimum 2 points required)".to_string(),
        ));
    }

    let x_min = points[0].date;
    let x_max = points[points.len() - 1].date;

    let (y_min, y_max) = padded_range(
        observations
            .iter()
            .map(|o| o.price)
            .chain(points.iter().map(|p| p.lower))
            .chain(points.iter().map(|p| p.upper)),
    );

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ReportError::ChartError(format!("failed to fill canvas: {}", e)))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 32.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| ReportError::ChartError(format!("failed to build chart: {}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Price")
        .draw()
        .map_err(|e| ReportError::ChartError(format!("failed to draw mesh: {}", e)))?;

    // Uncertainty band: upper bound forward, lower bound back
    let mut band: Vec<(chrono::NaiveDate, f64)> =
        points.iter().map(|p| (p.date, p.upper)).collect();
    band.extend(points.iter().rev().map(|p| (p.date, p.lower)));

    chart
        .draw_series(std::iter::once(Polygon::new(band, &BLUE.mix(0.2))))
        .map_err(|e| ReportError::ChartError(format!("failed to draw uncertainty band: {}", e)))?;

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.date, p.predicted)),
            &BLUE,
        ))
        .map_err(|e| ReportError::ChartError(format!("failed to draw forecast line: {}", e)))?;

    chart
        .draw_series(
            observations
                .iter()
                .map(|o| Circle::new((o.date, o.price), 2, BLACK.filled())),
        )
        .map_err(|e| ReportError::ChartError(format!("failed to draw observations: {}", e)))?;

    root.present()
        .map_err(|e| ReportError::ChartError(format!("failed to render chart: {}", e)))?;

    info!(chart = %path.display(), "rendered forecast chart");
    Ok(())
}
