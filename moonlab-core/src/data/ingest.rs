//! Dataset loading: CSV or Parquet on disk into an in-memory [`Dataset`].
//!
//! Every column of a CSV file is read as text and coerced here, so a bad cell
//! is reported with its row and column instead of surfacing as a polars
//! inference error.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use polars::prelude::*;

use crate::data::schema::{RecordSchema, SchemaError};
use crate::dataset::Dataset;
use crate::domain::Record;

/// Date layouts accepted for the `Date` column, tried in order.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%b-%Y"];

/// Datetime layouts whose calendar date is kept as written.
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Dataset file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Dataset is not parseable as a table: {0}")]
    Unparseable(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Row {row}: cannot parse date {value:?}")]
    InvalidDate { row: usize, value: String },

    #[error("Row {row}: column {column} has non-numeric value {value:?}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Row {row}: column {column} is empty")]
    NullField { row: usize, column: String },
}

impl From<SchemaError> for LoadError {
    fn from(e: SchemaError) -> Self {
        match e {
            SchemaError::MissingColumn(col) => LoadError::MissingColumn(col),
        }
    }
}

/// Load a dataset, choosing the reader by file extension.
///
/// `.parquet` files go through the Parquet reader; anything else is treated
/// as delimited text with a header row.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let is_parquet = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));

    let df = if is_parquet {
        read_parquet(path)?
    } else {
        read_csv(path)?
    };

    let records = dataframe_to_records(&df)?;
    let dataset = Dataset::from_records(records);
    tracing::info!(
        path = %path.display(),
        rows = dataset.len(),
        tickers = dataset.tickers().len(),
        phases = dataset.phases().len(),
        "dataset loaded"
    );
    Ok(dataset)
}

fn read_csv(path: &Path) -> Result<DataFrame, LoadError> {
    LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()
        .and_then(|lf| lf.collect())
        .map_err(|e| LoadError::Unparseable(e.to_string()))
}

fn read_parquet(path: &Path) -> Result<DataFrame, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::Unparseable(e.to_string()))?;
    ParquetReader::new(file)
        .finish()
        .map_err(|e| LoadError::Unparseable(e.to_string()))
}

/// Convert a validated frame into records, coercing each column.
pub fn dataframe_to_records(df: &DataFrame) -> Result<Vec<Record>, LoadError> {
    RecordSchema::validate(df)?;

    let dates = date_column(df)?;
    let tickers = text_column(df, RecordSchema::TICKER)?;
    let phases = text_column(df, RecordSchema::MOON_PHASE)?;
    let opens = numeric_column(df, RecordSchema::OPEN)?;
    let highs = numeric_column(df, RecordSchema::HIGH)?;
    let lows = numeric_column(df, RecordSchema::LOW)?;
    let closes = numeric_column(df, RecordSchema::CLOSE)?;
    let volumes = numeric_column(df, RecordSchema::VOLUME)?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        records.push(Record {
            date: dates[i],
            ticker: tickers[i].clone(),
            moon_phase: phases[i].clone(),
            open: opens[i],
            high: highs[i],
            low: lows[i],
            close: closes[i],
            volume: volumes[i],
        });
    }
    Ok(records)
}

fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, LoadError> {
    df.column(name)
        .map_err(|_| LoadError::MissingColumn(name.to_string()))
}

fn text_column(df: &DataFrame, name: &str) -> Result<Vec<String>, LoadError> {
    let col = column(df, name)?
        .cast(&DataType::String)
        .map_err(|e| LoadError::Unparseable(format!("{name}: {e}")))?;
    let ca = col
        .str()
        .map_err(|e| LoadError::Unparseable(format!("{name}: {e}")))?;

    ca.into_iter()
        .enumerate()
        .map(|(i, v)| match v.map(str::trim) {
            Some(s) if !s.is_empty() => Ok(s.to_string()),
            _ => Err(LoadError::NullField {
                row: i + 1,
                column: name.to_string(),
            }),
        })
        .collect()
}

/// Blank or null cells become `NaN`, so one missing price does not reject the
/// whole dataset; text that is present but not a number is an error.
fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>, LoadError> {
    let raw = column(df, name)?;

    if raw.dtype() != &DataType::String {
        let cast = raw
            .cast(&DataType::Float64)
            .map_err(|e| LoadError::Unparseable(format!("{name}: {e}")))?;
        let ca = cast
            .f64()
            .map_err(|e| LoadError::Unparseable(format!("{name}: {e}")))?;
        return Ok(ca.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect());
    }

    let ca = raw
        .str()
        .map_err(|e| LoadError::Unparseable(format!("{name}: {e}")))?;
    ca.into_iter()
        .enumerate()
        .map(|(i, v)| match v.map(str::trim) {
            None | Some("") => Ok(f64::NAN),
            Some(s) => s.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
                row: i + 1,
                column: name.to_string(),
                value: s.to_string(),
            }),
        })
        .collect()
}

fn date_column(df: &DataFrame) -> Result<Vec<NaiveDate>, LoadError> {
    let name = RecordSchema::DATE;
    let raw = column(df, name)?;

    if raw.dtype() == &DataType::Date {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)
            .ok_or_else(|| LoadError::Unparseable("epoch date".into()))?;
        let ca = raw
            .date()
            .map_err(|e| LoadError::Unparseable(format!("{name}: {e}")))?;
        return (0..ca.len())
            .map(|i| {
                ca.get(i)
                    .map(|days| epoch + chrono::Duration::days(days as i64))
                    .ok_or(LoadError::NullField {
                        row: i + 1,
                        column: name.to_string(),
                    })
            })
            .collect();
    }

    text_column(df, name)?
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            parse_date(&s).ok_or(LoadError::InvalidDate {
                row: i + 1,
                value: s,
            })
        })
        .collect()
}

/// Parse a calendar date from the layouts the dataset may use.
///
/// Timestamps (with or without an offset) keep the date as written; no
/// timezone conversion is applied.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%:z") {
        return Some(dt.naive_local().date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local().date());
    }
    None
}
