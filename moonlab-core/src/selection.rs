//! Selection state: the option lists offered to the user and the ticker and
//! phase sets they have currently chosen.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// Tickers preselected when the dashboard opens.
pub const DEFAULT_TICKERS: [&str; 2] = ["WU", "ZSL"];

/// Enumerated, sorted, deduplicated choices for the two multiselects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOptions {
    pub tickers: Vec<String>,
    pub phases: Vec<String>,
}

impl SelectionOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            tickers: dataset.tickers(),
            phases: dataset.phases(),
        }
    }
}

/// The user's current choice of tickers and phases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub tickers: BTreeSet<String>,
    pub phases: BTreeSet<String>,
}

impl Selection {
    pub fn new<T, P>(tickers: T, phases: P) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            tickers: tickers.into_iter().map(Into::into).collect(),
            phases: phases.into_iter().map(Into::into).collect(),
        }
    }

    /// Initial selection: the given default tickers that the dataset actually
    /// offers, and every phase.
    pub fn with_defaults<S: AsRef<str>>(options: &SelectionOptions, default_tickers: &[S]) -> Self {
        let tickers = default_tickers
            .iter()
            .map(|t| t.as_ref())
            .filter(|t: &&str| options.tickers.iter().any(|o| o == t))
            .map(String::from)
            .collect();
        Self {
            tickers,
            phases: options.phases.iter().cloned().collect(),
        }
    }

    pub fn set_tickers<I, S>(&mut self, tickers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tickers = tickers.into_iter().map(Into::into).collect();
    }

    pub fn set_phases<I, S>(&mut self, phases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phases = phases.into_iter().map(Into::into).collect();
    }

    /// Flip membership of one ticker. Returns true if it is now selected.
    pub fn toggle_ticker(&mut self, ticker: &str) -> bool {
        toggle(&mut self.tickers, ticker)
    }

    /// Flip membership of one phase. Returns true if it is now selected.
    pub fn toggle_phase(&mut self, phase: &str) -> bool {
        toggle(&mut self.phases, phase)
    }

    pub fn select_all_tickers(&mut self, options: &SelectionOptions) {
        self.tickers = options.tickers.iter().cloned().collect();
    }

    pub fn select_all_phases(&mut self, options: &SelectionOptions) {
        self.phases = options.phases.iter().cloned().collect();
    }

    pub fn clear_tickers(&mut self) {
        self.tickers.clear();
    }

    pub fn clear_phases(&mut self) {
        self.phases.clear();
    }

    /// True when either set is empty, so no row can match.
    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty() || self.phases.is_empty()
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> SelectionOptions {
        SelectionOptions {
            tickers: vec!["AAPL".into(), "WU".into(), "ZSL".into()],
            phases: vec!["Full".into(), "New".into(), "Waning".into(), "Waxing".into()],
        }
    }

    #[test]
    fn defaults_pick_two_tickers_and_all_phases() {
        let sel = Selection::with_defaults(&options(), &DEFAULT_TICKERS);
        assert_eq!(
            sel.tickers.iter().collect::<Vec<_>>(),
            vec!["WU", "ZSL"]
        );
        assert_eq!(sel.phases.len(), 4);
    }

    #[test]
    fn defaults_drop_tickers_not_offered() {
        let opts = SelectionOptions {
            tickers: vec!["WU".into()],
            phases: vec!["Full".into()],
        };
        let sel = Selection::with_defaults(&opts, &DEFAULT_TICKERS);
        assert_eq!(sel.tickers.len(), 1);
        assert!(sel.tickers.contains("WU"));
    }

    #[test]
    fn toggle_round_trips() {
        let mut sel = Selection::default();
        assert!(sel.toggle_ticker("WU"));
        assert!(sel.tickers.contains("WU"));
        assert!(!sel.toggle_ticker("WU"));
        assert!(sel.tickers.is_empty());
    }

    #[test]
    fn select_all_and_clear() {
        let opts = options();
        let mut sel = Selection::default();
        sel.select_all_tickers(&opts);
        sel.select_all_phases(&opts);
        assert_eq!(sel.tickers.len(), 3);
        assert!(!sel.is_empty());

        sel.clear_phases();
        assert!(sel.is_empty());
        sel.clear_tickers();
        assert!(sel.tickers.is_empty());
    }

    #[test]
    fn set_replaces_contents() {
        let mut sel = Selection::new(["WU"], ["Full"]);
        sel.set_tickers(["ZSL", "AAPL"]);
        sel.set_phases(Vec::<String>::new());
        assert_eq!(sel.tickers.len(), 2);
        assert!(!sel.tickers.contains("WU"));
        assert!(sel.is_empty());
    }
}
