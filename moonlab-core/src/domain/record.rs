//! Record: one row of the moon-phase price dataset.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily OHLCV row for one ticker, tagged with the lunar phase of that day.
///
/// Field names serialize to the dataset's column headers so a record written
/// back out as CSV has the same shape it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[serde(rename = "Moon_Phase")]
    pub moon_phase: String,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "Volume")]
    pub volume: f64,
}

impl Record {
    /// True if this row passes both membership tests of a selection.
    pub fn matches(&self, tickers: &BTreeSet<String>, phases: &BTreeSet<String>) -> bool {
        tickers.contains(&self.ticker) && phases.contains(&self.moon_phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            ticker: "WU".into(),
            moon_phase: "Full".into(),
            open: 12.0,
            high: 12.5,
            low: 11.8,
            close: 12.3,
            volume: 3_400_000.0,
        }
    }

    #[test]
    fn matches_requires_both_sets() {
        let r = sample_record();
        let tickers: BTreeSet<String> = ["WU".to_string()].into();
        let phases: BTreeSet<String> = ["Full".to_string()].into();
        let other_phases: BTreeSet<String> = ["New".to_string()].into();

        assert!(r.matches(&tickers, &phases));
        assert!(!r.matches(&tickers, &other_phases));
    }

    #[test]
    fn matches_is_case_sensitive() {
        let r = sample_record();
        let tickers: BTreeSet<String> = ["wu".to_string()].into();
        let phases: BTreeSet<String> = ["Full".to_string()].into();
        assert!(!r.matches(&tickers, &phases));
    }

    #[test]
    fn serializes_with_dataset_headers() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(json["Date"], "2024-01-02");
        assert_eq!(json["Moon_Phase"], "Full");
        assert_eq!(json["Close"], 12.3);
    }
}
