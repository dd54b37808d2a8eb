//! PDF conversion through an external HTML-to-PDF converter
//!
//! The converter runs as a blocking child process with an exit-code check.
//! There is no timeout and no retry; a failed conversion is reported to the
//! caller and the surrounding run continues.

use crate::{ReportError, Result};
use std::path::Path;
use std::process::Command;
use tracing::{info, warn};

/// Default HTML-to-PDF converter program
pub const DEFAULT_PDF_COMMAND: &str = "wkhtmltopdf";

/// Wrapper around the external HTML-to-PDF converter
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    command: String,
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PDF_COMMAND)
    }
}

impl PdfRenderer {
    /// Create a renderer invoking the given converter program
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Converter program this renderer invokes
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Convert a rendered HTML file to PDF
    pub fn render(&self, html_path: &Path, pdf_path: &Path) -> Result<()> {
        info!(
            html = %html_path.display(),
            pdf = %pdf_path.display(),
            "converting report to PDF"
        );

        let status = Command::new(&self.command)
            .arg(html_path)
            .arg(pdf_path)
            .status()
            .map_err(|e| {
                ReportError::ConverterError(format!("failed to run {}: {}", self.command, e))
            })?;

        if !status.success() {
            warn!(status = %status, "PDF converter reported a failure");
            return Err(ReportError::ConverterError(format!(
                "{} exited with {}",
                self.command, status
            )));
        }

        Ok(())
    }
}
