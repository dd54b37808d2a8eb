//! CSV-backed storage with one `date,price` file per product
//!
//! The expected file format is:
//!
//! ```text
//! date,price
//! 2024-01-01,10.0
//! 2024-01-08,10.4
//! ```

use crate::{PriceError, PriceObservation, PriceSeries, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// One `date,price` row in a product file
#[derive(Debug, Serialize, Deserialize)]
struct PriceRecord {
    date: NaiveDate,
    price: f64,
}

/// Flat-file store resolving product names to CSV histories in a directory
#[derive(Debug, Clone)]
pub struct ProductStore {
    data_dir: PathBuf,
}

impl ProductStore {
    /// Create a store rooted at the given data directory
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Root directory holding the product files
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Storage path for a product
    pub fn path_for(&self, product: &str) -> PathBuf {
        self.data_dir.join(format!("{}.csv", product))
    }

    /// List available products by scanning the data directory for CSV files
    pub fn products(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.data_dir).map_err(|e| {
            PriceError::DataLoadError(format!(
                "failed to read data directory {}: {}",
                self.data_dir.display(),
                e
            ))
        })?;

        let mut products = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                PriceError::DataLoadError(format!("failed to read directory entry: {}", e))
            })?;
            let path = entry.path();
            if path.extension().map(|ext| ext == "csv").unwrap_or(false) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    products.push(stem.to_string());
                }
            }
        }

        products.sort();
        Ok(products)
    }

    /// Load a product history sorted ascending by date
    ///
    /// Fails if the file is missing or any row has an unparseable date or an
    /// invalid price.
    pub fn load(&self, product: &str) -> Result<PriceSeries> {
        let path = self.path_for(product);
        if !path.exists() {
            return Err(PriceError::UnknownProduct(format!(
                "{} (no file at {})",
                product,
                path.display()
            )));
        }

        let file = File::open(&path).map_err(|e| {
            PriceError::DataLoadError(format!("failed to open {}: {}", path.display(), e))
        })?;

        let mut reader = csv::Reader::from_reader(file);
        let mut observations = Vec::new();

        for (i, record) in reader.deserialize::<PriceRecord>().enumerate() {
            let record = record.map_err(|e| {
                PriceError::DataLoadError(format!(
                    "invalid record at line {} of {}: {}",
                    i + 2,
                    path.display(),
                    e
                ))
            })?;

            let observation = PriceObservation::new(record.date, record.price).map_err(|e| {
                PriceError::DataLoadError(format!(
                    "invalid price at line {} of {}: {}",
                    i + 2,
                    path.display(),
                    e
                ))
            })?;

            observations.push(observation);
        }

        Ok(PriceSeries::from_observations(observations))
    }

    /// Overwrite a product history with the given series
    pub fn save(&self, product: &str, series: &PriceSeries) -> Result<()> {
        fs::create_dir_all(&self.data_dir).map_err(|e| {
            PriceError::DataWriteError(format!(
                "failed to create data directory {}: {}",
                self.data_dir.display(),
                e
            ))
        })?;

        let path = self.path_for(product);
        let mut writer = csv::Writer::from_path(&path).map_err(|e| {
            PriceError::DataWriteError(format!("failed to open {}: {}", path.display(), e))
        })?;

        for observation in series.observations() {
            writer
                .serialize(PriceRecord {
                    date: observation.date,
                    price: observation.price,
                })
                .map_err(|e| {
                    PriceError::DataWriteError(format!(
                        "failed to write {}: {}",
                        path.display(),
                        e
                    ))
                })?;
        }

        writer.flush().map_err(|e| {
            PriceError::DataWriteError(format!("failed to flush {}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Append an observation to a product history and persist the result
    ///
    /// The file is rewritten in full with the observation merged into date
    /// order. Returns the updated series.
    pub fn append(&self, product: &str, observation: PriceObservation) -> Result<PriceSeries> {
        let mut series = self.load(product)?;
        series.push(observation);
        self.save(product, &series)?;
        Ok(series)
    }
}
