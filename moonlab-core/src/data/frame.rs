//! Polars conversion and file export for filtered rows.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use polars::prelude::*;

use crate::data::schema::RecordSchema;
use crate::domain::Record;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Unsupported export format for {0} (expected .csv or .parquet)")]
    UnsupportedFormat(String),

    #[error("DataFrame error: {0}")]
    Frame(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Output formats for [`export_records`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Parquet,
}

impl ExportFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("csv") => Ok(ExportFormat::Csv),
            Some("parquet") => Ok(ExportFormat::Parquet),
            _ => Err(ExportError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Build a typed DataFrame (see [`RecordSchema::schema`]) from records.
pub fn records_to_dataframe<'a, I>(records: I) -> Result<DataFrame, ExportError>
where
    I: IntoIterator<Item = &'a Record>,
{
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)
        .ok_or_else(|| ExportError::Frame("epoch date".into()))?;

    let mut dates: Vec<i32> = Vec::new();
    let mut tickers: Vec<&str> = Vec::new();
    let mut phases: Vec<&str> = Vec::new();
    let mut opens: Vec<f64> = Vec::new();
    let mut highs: Vec<f64> = Vec::new();
    let mut lows: Vec<f64> = Vec::new();
    let mut closes: Vec<f64> = Vec::new();
    let mut volumes: Vec<f64> = Vec::new();

    for r in records {
        dates.push((r.date - epoch).num_days() as i32);
        tickers.push(&r.ticker);
        phases.push(&r.moon_phase);
        opens.push(r.open);
        highs.push(r.high);
        lows.push(r.low);
        closes.push(r.close);
        volumes.push(r.volume);
    }

    DataFrame::new(vec![
        Column::new(RecordSchema::DATE.into(), dates)
            .cast(&DataType::Date)
            .map_err(|e| ExportError::Frame(format!("date cast: {e}")))?,
        Column::new(RecordSchema::TICKER.into(), tickers),
        Column::new(RecordSchema::MOON_PHASE.into(), phases),
        Column::new(RecordSchema::OPEN.into(), opens),
        Column::new(RecordSchema::HIGH.into(), highs),
        Column::new(RecordSchema::LOW.into(), lows),
        Column::new(RecordSchema::CLOSE.into(), closes),
        Column::new(RecordSchema::VOLUME.into(), volumes),
    ])
    .map_err(|e| ExportError::Frame(format!("dataframe creation: {e}")))
}

/// Write records to `path`, choosing CSV or Parquet by extension.
pub fn export_records<'a, I>(records: I, path: &Path) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a Record>,
{
    let format = ExportFormat::from_path(path)?;
    let mut df = records_to_dataframe(records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;

    match format {
        ExportFormat::Csv => CsvWriter::new(file)
            .include_header(true)
            .finish(&mut df)
            .map_err(|e| ExportError::Frame(format!("write csv: {e}")))?,
        ExportFormat::Parquet => {
            ParquetWriter::new(file)
                .finish(&mut df)
                .map_err(|e| ExportError::Frame(format!("write parquet: {e}")))?;
        }
    }

    tracing::info!(path = %path.display(), rows = df.height(), ?format, "exported rows");
    Ok(df.height())
}
