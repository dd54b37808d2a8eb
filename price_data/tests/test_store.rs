use chrono::NaiveDate;
use price_data::{PriceError, PriceObservation, ProductStore};
use std::fs;
use std::io::Write;
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn write_product(dir: &std::path::Path, product: &str, rows: &[&str]) {
    let mut file = fs::File::create(dir.join(format!("{}.csv", product))).unwrap();
    writeln!(file, "date,price").unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
}

#[test]
fn test_load_sorts_by_date() {
    let dir = tempdir().unwrap();
    write_product(
        dir.path(),
        "rice",
        &["2024-02-01,12.0", "2024-01-01,10.0", "2024-01-15,11.0"],
    );

    let store = ProductStore::new(dir.path());
    let series = store.load("rice").unwrap();

    assert_eq!(
        series.dates(),
        vec![date(2024, 1, 1), date(2024, 1, 15), date(2024, 2, 1)]
    );
    assert_eq!(series.prices(), vec![10.0, 11.0, 12.0]);
}

#[test]
fn test_load_missing_product() {
    let dir = tempdir().unwrap();
    let store = ProductStore::new(dir.path());

    let result = store.load("nonexistent");
    assert!(matches!(result, Err(PriceError::UnknownProduct(_))));
}

#[test]
fn test_load_malformed_rows() {
    let dir = tempdir().unwrap();
    let store = ProductStore::new(dir.path());

    write_product(dir.path(), "bad_date", &["not-a-date,10.0"]);
    assert!(matches!(
        store.load("bad_date"),
        Err(PriceError::DataLoadError(_))
    ));

    write_product(dir.path(), "bad_price", &["2024-01-01,ten"]);
    assert!(matches!(
        store.load("bad_price"),
        Err(PriceError::DataLoadError(_))
    ));

    write_product(dir.path(), "negative_price", &["2024-01-01,-4.0"]);
    assert!(matches!(
        store.load("negative_price"),
        Err(PriceError::DataLoadError(_))
    ));
}

#[test]
fn test_load_header_only_file() {
    let dir = tempdir().unwrap();
    write_product(dir.path(), "empty", &[]);

    let store = ProductStore::new(dir.path());
    let series = store.load("empty").unwrap();
    assert!(series.is_empty());
}

#[test]
fn test_append_merges_sorts_and_persists() {
    let dir = tempdir().unwrap();
    write_product(dir.path(), "rice", &["2024-01-01,10.0", "2024-02-01,12.0"]);

    let store = ProductStore::new(dir.path());
    let observation = PriceObservation::new(date(2024, 1, 15), 11.0).unwrap();
    let updated = store.append("rice", observation).unwrap();

    assert_eq!(
        updated.dates(),
        vec![date(2024, 1, 1), date(2024, 1, 15), date(2024, 2, 1)]
    );
    assert_eq!(updated.prices(), vec![10.0, 11.0, 12.0]);

    // The rewritten file preserves the merged order for subsequent reads.
    let reloaded = store.load("rice").unwrap();
    assert_eq!(reloaded.dates(), updated.dates());
    assert_eq!(reloaded.prices(), updated.prices());
}

#[test]
fn test_append_keeps_duplicate_dates() {
    let dir = tempdir().unwrap();
    write_product(dir.path(), "rice", &["2024-01-01,10.0", "2024-01-08,10.5"]);

    let store = ProductStore::new(dir.path());
    let observation = PriceObservation::new(date(2024, 1, 8), 10.7).unwrap();
    let updated = store.append("rice", observation).unwrap();

    assert_eq!(updated.len(), 3);
    assert_eq!(updated.prices(), vec![10.0, 10.5, 10.7]);
}

#[test]
fn test_products_scan() {
    let dir = tempdir().unwrap();
    write_product(dir.path(), "sugar", &["2024-01-01,5.0"]);
    write_product(dir.path(), "rice", &["2024-01-01,10.0"]);
    fs::write(dir.path().join("notes.txt"), "not a product").unwrap();

    let store = ProductStore::new(dir.path());
    assert_eq!(store.products().unwrap(), vec!["rice", "sugar"]);
}

#[test]
fn test_products_missing_directory() {
    let dir = tempdir().unwrap();
    let store = ProductStore::new(dir.path().join("missing"));

    assert!(matches!(
        store.products(),
        Err(PriceError::DataLoadError(_))
    ));
}
