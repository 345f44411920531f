//! Test helpers for creating in-memory datasets

use chrono::NaiveDate;
use moonlab_core::{Dataset, Record};

pub fn record(day: u32, ticker: &str, phase: &str, close: f64) -> Record {
    Record {
        date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        ticker: ticker.into(),
        moon_phase: phase.into(),
        open: close - 0.2,
        high: close + 0.4,
        low: close - 0.4,
        close,
        volume: 1_250_000.0,
    }
}

/// Five rows: WU and ZSL (the default tickers) plus one AAPL row.
pub fn sample_dataset() -> Dataset {
    Dataset::from_records(vec![
        record(1, "WU", "Full", 12.0),
        record(2, "WU", "New", 12.4),
        record(1, "ZSL", "Full", 24.0),
        record(2, "AAPL", "New", 185.0),
        record(3, "ZSL", "Waning", 23.5),
    ])
}
