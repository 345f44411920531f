//! Integration tests for dataset loading from disk.

use std::path::PathBuf;

use chrono::NaiveDate;
use moonlab_core::data::{export_records, load_dataset, LoadError};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/moon_sample.csv")
}

fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn fixture_loads_all_rows_in_file_order() {
    let ds = load_dataset(&fixture_path()).unwrap();

    assert_eq!(ds.len(), 16);
    let first = ds.get(0).unwrap();
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    assert_eq!(first.ticker, "WU");
    assert_eq!(first.moon_phase, "Waxing");
    assert_eq!(first.close, 11.98);
    assert_eq!(first.volume, 4_120_300.0);

    assert_eq!(ds.tickers(), vec!["AAPL", "WU", "ZSL"]);
    assert_eq!(ds.phases(), vec!["Full", "New", "Waning", "Waxing"]);
}

#[test]
fn missing_close_column_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "no_close.csv",
        "Date,Ticker,Moon_Phase,Open,High,Low,Volume\n2024-01-01,WU,Full,1,1,1,100\n",
    );

    match load_dataset(&path) {
        Err(LoadError::MissingColumn(col)) => assert_eq!(col, "Close"),
        other => panic!("expected MissingColumn(Close), got {other:?}"),
    }
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_dataset(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, LoadError::NotFound(_)));
}

#[test]
fn unparseable_date_reports_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "bad_date.csv",
        "Date,Ticker,Moon_Phase,Open,High,Low,Close,Volume\n\
         2024-01-01,WU,Full,1,1,1,1,100\n\
         not-a-date,WU,New,1,1,1,1,100\n",
    );

    match load_dataset(&path) {
        Err(LoadError::InvalidDate { row, value }) => {
            assert_eq!(row, 2);
            assert_eq!(value, "not-a-date");
        }
        other => panic!("expected InvalidDate, got {other:?}"),
    }
}

#[test]
fn empty_phase_cell_is_a_null_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "null_phase.csv",
        "Date,Ticker,Moon_Phase,Open,High,Low,Close,Volume\n2024-01-01,WU,,1,1,1,1,100\n",
    );

    match load_dataset(&path) {
        Err(LoadError::NullField { row, column }) => {
            assert_eq!(row, 1);
            assert_eq!(column, "Moon_Phase");
        }
        other => panic!("expected NullField, got {other:?}"),
    }
}

#[test]
fn blank_numeric_cells_load_as_nan() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "blank_numbers.csv",
        "Date,Ticker,Moon_Phase,Open,High,Low,Close,Volume\n\
         2024-01-01,WU,Full,1,1,1,1,\n\
         2024-01-02,WU,New,1,1,1,,250\n",
    );

    let ds = load_dataset(&path).unwrap();
    assert_eq!(ds.len(), 2);
    assert!(ds.get(0).unwrap().volume.is_nan());
    assert_eq!(ds.get(0).unwrap().close, 1.0);
    assert!(ds.get(1).unwrap().close.is_nan());
    assert_eq!(ds.get(1).unwrap().volume, 250.0);
}

#[test]
fn timestamp_dates_and_extra_columns_are_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "yf_export.csv",
        "Date,Ticker,Moon_Phase,Open,High,Low,Close,Adj Close,Volume\n\
         2024-01-05 00:00:00-05:00,WU,Full,1,2,0.5,1.5,1.4,100\n",
    );

    let ds = load_dataset(&path).unwrap();
    assert_eq!(ds.len(), 1);
    assert_eq!(
        ds.get(0).unwrap().date,
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    );
}

#[test]
fn parquet_export_loads_back() {
    let ds = load_dataset(&fixture_path()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moon.parquet");

    let written = export_records(ds.iter(), &path).unwrap();
    assert_eq!(written, ds.len());

    let reloaded = load_dataset(&path).unwrap();
    assert_eq!(reloaded, ds);
}

#[test]
fn csv_export_loads_back() {
    let ds = load_dataset(&fixture_path()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("moon.csv");

    export_records(ds.iter(), &path).unwrap();
    let reloaded = load_dataset(&path).unwrap();
    assert_eq!(reloaded.len(), ds.len());
    assert_eq!(reloaded.tickers(), ds.tickers());
}
