use price_report::{PdfRenderer, ReportError};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_missing_converter_is_reported() {
    let dir = tempdir().unwrap();
    let html = dir.path().join("report.html");
    let pdf = dir.path().join("report.pdf");
    fs::write(&html, "<html></html>").unwrap();

    let renderer = PdfRenderer::new("definitely-not-a-real-converter");
    let result = renderer.render(&html, &pdf);
    assert!(matches!(result, Err(ReportError::ConverterError(_))));
}

#[test]
fn test_non_zero_exit_is_reported() {
    let dir = tempdir().unwrap();
    let html = dir.path().join("report.html");
    let pdf = dir.path().join("report.pdf");
    fs::write(&html, "<html></html>").unwrap();

    // `false` ignores its arguments and always exits non-zero.
    let renderer = PdfRenderer::new("false");
    let result = renderer.render(&html, &pdf);
    assert!(matches!(result, Err(ReportError::ConverterError(_))));
}

#[test]
fn test_successful_exit_is_accepted() {
    let dir = tempdir().unwrap();
    let html = dir.path().join("report.html");
    let pdf = dir.path().join("report.pdf");
    fs::write(&html, "<html></html>").unwrap();

    // `true` stands in for a converter that succeeds.
    let renderer = PdfRenderer::new("true");
    assert!(renderer.render(&html, &pdf).is_ok());
}
