//! Filter engine: applies a [`Selection`] to a [`Dataset`].

use polars::prelude::DataFrame;

use crate::data::frame::{records_to_dataframe, ExportError};
use crate::dataset::Dataset;
use crate::domain::Record;
use crate::selection::Selection;

/// Rows of a dataset that match a selection, in dataset order.
///
/// Borrows the dataset and keeps row indices, so it is cheap to rebuild on
/// every selection change. It also remembers which tickers were selected,
/// since the chart draws a trend trace for each of them even when they
/// contribute no rows.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
    selected_tickers: Vec<String>,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Positions of the matching rows in the source dataset, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn selected_tickers(&self) -> &[String] {
        &self.selected_tickers
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        let records = self.dataset.records();
        self.indices.iter().map(move |&i| &records[i])
    }

    pub fn get(&self, n: usize) -> Option<&'a Record> {
        self.indices.get(n).and_then(|&i| self.dataset.get(i))
    }

    /// Tickers that contribute rows, in order of first appearance.
    pub fn tickers_present(&self) -> Vec<&'a str> {
        let mut seen: Vec<&'a str> = Vec::new();
        for r in self.iter() {
            if !seen.contains(&r.ticker.as_str()) {
                seen.push(r.ticker.as_str());
            }
        }
        seen
    }

    pub fn to_records(&self) -> Vec<Record> {
        self.iter().cloned().collect()
    }

    pub fn to_dataframe(&self) -> Result<DataFrame, ExportError> {
        records_to_dataframe(self.iter())
    }
}

/// Keep rows whose ticker and phase are both selected.
///
/// Pure and stable: output order is dataset order, and an empty ticker or
/// phase set yields an empty view without scanning.
pub fn filter<'a>(dataset: &'a Dataset, selection: &Selection) -> FilteredView<'a> {
    let selected_tickers: Vec<String> = selection.tickers.iter().cloned().collect();

    let indices = if selection.is_empty() {
        Vec::new()
    } else {
        dataset
            .iter()
            .enumerate()
            .filter(|(_, r)| r.matches(&selection.tickers, &selection.phases))
            .map(|(i, _)| i)
            .collect()
    };

    tracing::debug!(
        tickers = selection.tickers.len(),
        phases = selection.phases.len(),
        rows = indices.len(),
        "filtered dataset"
    );

    FilteredView {
        dataset,
        indices,
        selected_tickers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, ticker: &str, phase: &str) -> Record {
        Record {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            ticker: ticker.into(),
            moon_phase: phase.into(),
            open: 10.0,
            high: 11.0,
            low: 9.0,
            close: 10.0 + day as f64,
            volume: 1_000.0,
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            record(1, "WU", "Full"),
            record(2, "WU", "New"),
            record(1, "ZSL", "Full"),
        ])
    }

    #[test]
    fn single_ticker_single_phase() {
        let ds = dataset();
        let view = filter(&ds, &Selection::new(["WU"], ["Full"]));
        assert_eq!(view.indices(), &[0]);
        assert_eq!(view.get(0), ds.get(0));
    }

    #[test]
    fn preserves_dataset_order() {
        let ds = dataset();
        let view = filter(&ds, &Selection::new(["ZSL", "WU"], ["Full", "New"]));
        assert_eq!(view.indices(), &[0, 1, 2]);
    }

    #[test]
    fn empty_phase_set_short_circuits() {
        let ds = dataset();
        let view = filter(&ds, &Selection::new(["WU"], Vec::<String>::new()));
        assert!(view.is_empty());
        assert_eq!(view.selected_tickers(), &["WU".to_string()]);
    }

    #[test]
    fn unknown_ticker_matches_nothing() {
        let ds = dataset();
        let view = filter(&ds, &Selection::new(["NONEXISTENT"], ["Full"]));
        assert!(view.is_empty());
    }

    #[test]
    fn tickers_present_in_first_appearance_order() {
        let ds = Dataset::from_records(vec![
            record(1, "ZSL", "Full"),
            record(2, "WU", "Full"),
            record(3, "ZSL", "Full"),
        ]);
        let view = filter(&ds, &Selection::new(["WU", "ZSL"], ["Full"]));
        assert_eq!(view.tickers_present(), vec!["ZSL", "WU"]);
    }

    #[test]
    fn to_dataframe_matches_view_len() {
        let ds = dataset();
        let view = filter(&ds, &Selection::new(["WU"], ["Full", "New"]));
        let df = view.to_dataframe().unwrap();
        assert_eq!(df.height(), 2);
    }
}
