//! Interactive terminal dashboard: pick a product, optionally record a new
//! price, review the indicators, and export forecasts, charts, or a PDF
//! report.

use chrono::{NaiveDate, Utc};
use price_data::{PriceObservation, ProductStore};
use price_forecast::export;
use price_report::PdfRenderer;
use pricewatch::pipeline::{PipelineRun, PricePipeline};
use pricewatch::report;
use std::io::{self, Write};
use std::path::Path;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn prompt(message: &str) -> Option<String> {
    print!("{}", message);
    io::stdout().flush().ok()?;

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => None, // EOF, treat as quit
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

fn resolve_product(products: &[String], choice: &str) -> Option<String> {
    if let Ok(index) = choice.parse::<usize>() {
        if index >= 1 && index <= products.len() {
            return Some(products[index - 1].clone());
        }
        return None;
    }

    products.iter().find(|p| p.as_str() == choice).cloned()
}

fn prompt_new_entry() -> Option<PriceObservation> {
    let answer = prompt("Add a new observed price? [y/N] ")?;
    if !answer.eq_ignore_ascii_case("y") {
        return None;
    }

    let date = loop {
        let input = prompt("Date (YYYY-MM-DD, empty for today): ")?;
        if input.is_empty() {
            break Utc::now().date_naive();
        }
        match NaiveDate::parse_from_str(&input, "%Y-%m-%d") {
            Ok(date) => break date,
            Err(e) => println!("Could not parse '{}': {}", input, e),
        }
    };

    loop {
        let input = prompt("Observed price: ")?;
        match input.parse::<f64>() {
            Ok(price) => match PriceObservation::new(date, price) {
                Ok(observation) => return Some(observation),
                Err(e) => println!("{}", e),
            },
            Err(_) => println!("Could not parse '{}' as a number", input),
        }
    }
}

fn print_summary(run: &PipelineRun) {
    let alert = run.alert();
    println!();
    println!("--- {} ---", run.product);
    println!("Observations:         {}", run.series.len());
    println!("Average price:        {:.2}", run.indicators.average);
    println!("Latest price:         {:.2}", run.indicators.latest);
    println!("Predicted (3 months): {:.2}", run.indicators.predicted);
    println!("Expected variation:   {:.2}%", run.indicators.variation_pct);
    println!();
    println!("{}", alert.message());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("pricewatch=info".parse().expect("valid logging directive")),
        )
        .init();

    let data_dir = std::env::var("PRICE_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let pipeline = PricePipeline::new(ProductStore::new(&data_dir));

    println!("Price Analysis & Forecasting Dashboard");
    println!("======================================");
    println!("Data directory: {}", data_dir);

    'products: loop {
        let products = match pipeline.store().products() {
            Ok(products) if !products.is_empty() => products,
            Ok(_) => {
                eprintln!("No product files found in {}.", data_dir);
                return;
            }
            Err(e) => {
                eprintln!("Failed to list products: {}", e);
                return;
            }
        };

        println!("\nAvailable products:");
        for (i, product) in products.iter().enumerate() {
            println!("  [{}] {}", i + 1, product);
        }

        let Some(choice) = prompt("\nSelect a product (number or name, q to quit): ") else {
            return;
        };
        if choice.eq_ignore_ascii_case("q") {
            return;
        }
        let Some(product) = resolve_product(&products, &choice) else {
            println!("Unknown product '{}'.", choice);
            continue;
        };

        let entry = prompt_new_entry();
        let run = match pipeline.run(&product, entry, true) {
            Ok(run) => run,
            Err(e) => {
                eprintln!("Analysis failed for {}: {}", product, e);
                continue;
            }
        };
        if let Some(observation) = entry {
            println!("Recorded {:.2} for {}.", observation.price, observation.date);
        }

        print_summary(&run);

        loop {
            println!();
            println!("[1] Export forecast CSV  [2] Render charts  [3] Generate PDF report");
            println!("[4] Switch product       [q] Quit");
            let Some(action) = prompt("Action: ") else {
                return;
            };

            match action.as_str() {
                "1" => {
                    let path = format!("forecast_{}.csv", run.product);
                    match export::write_csv_file(&run.forecast, &path) {
                        Ok(()) => println!("Forecast written to {}", path),
                        Err(e) => eprintln!("Export failed: {}", e),
                    }
                }
                "2" => match report::render_charts(&run, Path::new(".")) {
                    Ok((history, forecast)) => {
                        println!("Charts written to {} and {}", history.display(), forecast.display());
                    }
                    Err(e) => eprintln!("Chart rendering failed: {}", e),
                },
                "3" => {
                    match report::generate_pdf_report(&run, Path::new("."), &PdfRenderer::default())
                    {
                        Ok(paths) => println!("PDF report generated: {}", paths.pdf.display()),
                        Err(e) => {
                            // The run itself stays usable after a failed conversion.
                            warn!(error = %e, "PDF generation failed");
                            eprintln!("PDF generation failed: {}", e);
                        }
                    }
                }
                "4" => continue 'products,
                "q" | "Q" => return,
                other => println!("Unknown action '{}'.", other),
            }
        }
    }
}
