use assert_approx_eq::assert_approx_eq;
use chrono::{Days, NaiveDate};
use price_data::{PriceObservation, ProductStore};
use pricewatch::pipeline::{PipelineError, PricePipeline};
use pricewatch::TrendAlert;
use std::fs::File;
use std::io::Write;
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// Helper to create a product file with daily prices from 2024-01-01
fn create_product(dir: &std::path::Path, product: &str, prices: &[f64]) {
    let start = date(2024, 1, 1);
    let mut file = File::create(dir.join(format!("{}.csv", product))).unwrap();
    writeln!(file, "date,price").unwrap();
    for (i, price) in prices.iter().enumerate() {
        let day = start.checked_add_days(Days::new(i as u64)).unwrap();
        writeln!(file, "{},{}", day.format("%Y-%m-%d"), price).unwrap();
    }
}

#[test]
fn test_full_analysis_run() {
    let dir = tempdir().unwrap();
    let prices: Vec<f64> = (0..14).map(|i| 10.0 + i as f64 * 0.1).collect();
    create_product(dir.path(), "rice", &prices);

    let pipeline = PricePipeline::new(ProductStore::new(dir.path()));
    let run = pipeline.run("rice", None, false).unwrap();

    // 1. The series is loaded in full
    assert_eq!(run.series.len(), 14);

    // 2. The average matches the arithmetic mean
    let expected_mean = prices.iter().sum::<f64>() / prices.len() as f64;
    assert_approx_eq!(run.indicators.average, expected_mean, 0.01);

    // 3. The latest indicator is the final observation
    assert_approx_eq!(run.indicators.latest, 11.3, 0.01);

    // 4. The forecast extends exactly 90 days past the last observation
    let last_observed = run.series.last_date().unwrap();
    assert_eq!(
        run.forecast.last().unwrap().date,
        last_observed.checked_add_days(Days::new(90)).unwrap()
    );
    assert_eq!(run.forecast.future_points(last_observed).len(), 90);

    // 5. The predicted indicator is the final forecast point
    assert_approx_eq!(
        run.indicators.predicted,
        run.forecast.last().unwrap().predicted,
        0.01
    );

    // 6. A steadily rising series warns about rising prices
    // (0.1/day over 90 days on a ~11 baseline is far above +5%)
    assert_eq!(run.alert(), TrendAlert::Increase);
}

#[test]
fn test_manual_entry_is_merged_and_persisted() {
    let dir = tempdir().unwrap();
    let mut file = File::create(dir.path().join("rice.csv")).unwrap();
    writeln!(file, "date,price").unwrap();
    writeln!(file, "2024-01-01,10.0").unwrap();
    writeln!(file, "2024-02-01,12.0").unwrap();

    let store = ProductStore::new(dir.path());
    let pipeline = PricePipeline::new(store.clone());

    let entry = PriceObservation::new(date(2024, 1, 15), 11.0).unwrap();
    let run = pipeline.run("rice", Some(entry), true).unwrap();

    assert_eq!(
        run.series.dates(),
        vec![date(2024, 1, 1), date(2024, 1, 15), date(2024, 2, 1)]
    );
    assert_eq!(run.series.prices(), vec![10.0, 11.0, 12.0]);

    // The entry is visible to subsequent reads
    let reloaded = store.load("rice").unwrap();
    assert_eq!(reloaded.prices(), vec![10.0, 11.0, 12.0]);
}

#[test]
fn test_manual_entry_without_persist_leaves_storage_untouched() {
    let dir = tempdir().unwrap();
    create_product(dir.path(), "rice", &[10.0, 10.2, 10.4]);

    let store = ProductStore::new(dir.path());
    let pipeline = PricePipeline::new(store.clone());

    let entry = PriceObservation::new(date(2024, 2, 1), 11.0).unwrap();
    let run = pipeline.run("rice", Some(entry), false).unwrap();

    assert_eq!(run.series.len(), 4);
    assert_eq!(store.load("rice").unwrap().len(), 3);
}

#[test]
fn test_each_run_is_independent() {
    let dir = tempdir().unwrap();
    create_product(dir.path(), "rice", &[10.0, 10.5, 11.0, 11.5]);

    let pipeline = PricePipeline::new(ProductStore::new(dir.path()));
    let first = pipeline.run("rice", None, false).unwrap();
    let second = pipeline.run("rice", None, false).unwrap();

    assert_eq!(first.series.len(), second.series.len());
    assert_eq!(first.indicators.predicted, second.indicators.predicted);
    assert_eq!(first.forecast.len(), second.forecast.len());
}

#[test]
fn test_unknown_product_fails_the_run() {
    let dir = tempdir().unwrap();
    let pipeline = PricePipeline::new(ProductStore::new(dir.path()));

    let result = pipeline.run("nonexistent", None, false);
    assert!(matches!(result, Err(PipelineError::Price(_))));
}

#[test]
fn test_degenerate_series_fails_the_run() {
    let dir = tempdir().unwrap();
    create_product(dir.path(), "sparse", &[10.0]);

    let pipeline = PricePipeline::new(ProductStore::new(dir.path()));
    let result = pipeline.run("sparse", None, false);
    assert!(matches!(result, Err(PipelineError::Forecast(_))));
}
