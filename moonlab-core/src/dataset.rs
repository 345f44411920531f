//! Dataset: the immutable, process-wide table of records.

use std::collections::BTreeSet;

use crate::domain::Record;

/// Ordered rows loaded once at startup and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Distinct tickers, sorted ascending.
    pub fn tickers(&self) -> Vec<String> {
        distinct_sorted(self.records.iter().map(|r| r.ticker.as_str()))
    }

    /// Distinct moon phases, sorted ascending.
    pub fn phases(&self) -> Vec<String> {
        distinct_sorted(self.records.iter().map(|r| r.moon_phase.as_str()))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}
