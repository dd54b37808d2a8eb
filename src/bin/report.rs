//! Batch report generator: run the analysis for one product and produce the
//! charts, the HTML report, and its PDF conversion in the current directory.

use price_data::ProductStore;
use price_report::PdfRenderer;
use pricewatch::pipeline::PricePipeline;
use pricewatch::report;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("pricewatch=info".parse().expect("valid logging directive")),
        )
        .init();

    let data_dir = std::env::var("PRICE_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let pipeline = PricePipeline::new(ProductStore::new(&data_dir));

    let product = match std::env::args().nth(1) {
        Some(product) => product,
        None => match pipeline.store().products() {
            Ok(products) if !products.is_empty() => {
                println!("No product given, defaulting to '{}'.", products[0]);
                products[0].clone()
            }
            Ok(_) => {
                eprintln!("No product files found in {}.", data_dir);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Failed to list products: {}", e);
                std::process::exit(1);
            }
        },
    };

    let run = match pipeline.run(&product, None, false) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("Analysis failed for {}: {}", product, e);
            std::process::exit(1);
        }
    };

    println!(
        "Generating report for {} ({} observations)...",
        run.product,
        run.series.len()
    );

    match report::generate_pdf_report(&run, Path::new("."), &PdfRenderer::default()) {
        Ok(paths) => println!("PDF report generated: {}", paths.pdf.display()),
        Err(e) => {
            eprintln!("PDF generation failed: {}", e);
            std::process::exit(1);
        }
    }
}
