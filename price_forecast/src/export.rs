//! CSV export and import of forecast series
//!
//! The exported format has a `date,predicted,lower,upper` header and one row
//! per forecast day. Values round-trip exactly: reading an exported file
//! reproduces the original series bit for bit.

use crate::error::{ForecastError, Result};
use crate::models::{ForecastPoint, ForecastSeries};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// One row of the exported forecast
#[derive(Debug, Serialize, Deserialize)]
struct ForecastRecord {
    date: NaiveDate,
    predicted: f64,
    lower: f64,
    upper: f64,
}

/// Write a forecast series as CSV
pub fn write_csv<W: Write>(series: &ForecastSeries, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for point in series.points() {
        csv_writer.serialize(ForecastRecord {
            date: point.date,
            predicted: point.predicted,
            lower: point.lower,
            upper: point.upper,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render a forecast series as a CSV string
pub fn to_csv_string(series: &ForecastSeries) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(series, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| {
        ForecastError::ForecastingError(format!("forecast CSV is not valid UTF-8: {}", e))
    })
}

/// Write a forecast series to a CSV file
pub fn write_csv_file<P: AsRef<Path>>(series: &ForecastSeries, path: P) -> Result<()> {
    let file = File::create(path)?;
    write_csv(series, file)
}

/// Read a forecast series from CSV
pub fn read_csv<R: Read>(reader: R) -> Result<ForecastSeries> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut points = Vec::new();

    for record in csv_reader.deserialize::<ForecastRecord>() {
        let record = record?;
        points.push(ForecastPoint {
            date: record.date,
            predicted: record.predicted,
            lower: record.lower,
            upper: record.upper,
        });
    }

    Ok(ForecastSeries::new(points))
}

/// Read a forecast series from a CSV file
pub fn read_csv_file<P: AsRef<Path>>(path: P) -> Result<ForecastSeries> {
    let file = File::open(path)?;
    read_csv(file)
}
