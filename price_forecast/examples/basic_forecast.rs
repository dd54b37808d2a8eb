use chrono::{Days, NaiveDate};
use price_data::{PriceObservation, PriceSeries};
use price_forecast::{
    export, ForecastModel, TrainedForecastModel, TrendSeasonalModel, DEFAULT_HORIZON_DAYS,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Basic Forecast Example");
    println!("======================\n");

    // Build a few weeks of gently rising prices with a weekly wobble
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut series = PriceSeries::new();
    for day in 0..35u64 {
        let date = start.checked_add_days(Days::new(day)).unwrap();
        let price = 12.0 + day as f64 * 0.05 + ((day % 7) as f64 - 3.0) * 0.1;
        series.push(PriceObservation::new(date, price)?);
    }

    println!("Using {} observations", series.len());

    // Fit the model and project 90 days past the last observation
    let model = TrendSeasonalModel::new();
    let trained = model.train(&series)?;

    println!("Model: {}", model.name());
    println!("Fitted slope: {:.4} per day", trained.slope());
    println!("Residual sigma: {:.4}", trained.sigma());

    let forecast = trained.project(DEFAULT_HORIZON_DAYS)?;
    let last = forecast.last().expect("projection is never empty");

    println!("\nForecast for {}:", last.date);
    println!("  predicted: {:.2}", last.predicted);
    println!("  bounds:    [{:.2}, {:.2}]", last.lower, last.upper);

    // The full projection can be exported for spreadsheets
    let csv = export::to_csv_string(&forecast)?;
    println!("\nFirst export rows:");
    for line in csv.lines().take(4) {
        println!("  {}", line);
    }

    Ok(())
}
