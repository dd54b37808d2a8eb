//! # Price Report
//!
//! User-facing output for price analyses: PNG charts of the historical series
//! and its forecast, a typed HTML report template, and PDF conversion through
//! an external converter process.

use thiserror::Error;

pub mod charts;
pub mod pdf;
pub mod template;

pub use pdf::PdfRenderer;
pub use template::{render, ReportContext, DEFAULT_TEMPLATE};

/// Errors that can occur while producing report output
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Chart error: {0}")]
    ChartError(String),

    #[error("Unresolved template placeholder: {0}")]
    UnresolvedPlaceholder(String),

    #[error("PDF conversion error: {0}")]
    ConverterError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
