//! Report assembly for a pipeline run
//!
//! Renders both charts, fills the HTML template, and hands the result to the
//! external PDF converter. Chart and report files are named after the product
//! inside the chosen output directory.

use crate::pipeline::PipelineRun;
use chrono::Utc;
use price_report::{charts, render, ReportContext, PdfRenderer, ReportError, DEFAULT_TEMPLATE};
use std::fs;
use std::path::{Path, PathBuf};

/// Files produced for a PDF report
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub history_chart: PathBuf,
    pub forecast_chart: PathBuf,
    pub html: PathBuf,
    pub pdf: PathBuf,
}

/// Render the history and forecast charts for a run
pub fn render_charts(
    run: &PipelineRun,
    out_dir: &Path,
) -> std::result::Result<(PathBuf, PathBuf), ReportError> {
    fs::create_dir_all(out_dir)?;

    let history = out_dir.join(format!("history_{}.png", run.product));
    let forecast = out_dir.join(format!("forecast_{}.png", run.product));

    charts::history_chart(
        &format!("{} Price History", run.product),
        &run.series,
        &history,
        charts::CHART_WIDTH,
        charts::CHART_HEIGHT,
    )?;

    charts::forecast_chart(
        &format!("{} Price Forecast (90 days)", run.product),
        &run.series,
        &run.forecast,
        &forecast,
        charts::CHART_WIDTH,
        charts::CHART_HEIGHT,
    )?;

    Ok((history, forecast))
}

/// Produce the full PDF report for a run
///
/// The HTML intermediate is kept next to the PDF so a failed conversion can
/// be inspected. Conversion failures are returned to the caller; nothing is
/// retried.
pub fn generate_pdf_report(
    run: &PipelineRun,
    out_dir: &Path,
    renderer: &PdfRenderer,
) -> std::result::Result<ReportPaths, ReportError> {
    let (history_chart, forecast_chart) = render_charts(run, out_dir)?;

    // The converter resolves image paths relative to its own working
    // directory, so the template gets absolute paths.
    let history_abs = fs::canonicalize(&history_chart).unwrap_or_else(|_| history_chart.clone());
    let forecast_abs = fs::canonicalize(&forecast_chart).unwrap_or_else(|_| forecast_chart.clone());

    let context = ReportContext::new(
        &run.product,
        Utc::now().date_naive(),
        &run.indicators,
        history_abs.display().to_string(),
        forecast_abs.display().to_string(),
    );

    let html = render(DEFAULT_TEMPLATE, &context)?;
    let html_path = out_dir.join(format!("report_{}.html", run.product));
    fs::write(&html_path, html)?;

    let pdf_path = out_dir.join(format!("report_{}.pdf", run.product));
    renderer.render(&html_path, &pdf_path)?;

    Ok(ReportPaths {
        history_chart,
        forecast_chart,
        html: html_path,
        pdf: pdf_path,
    })
}
