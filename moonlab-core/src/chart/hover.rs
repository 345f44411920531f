//! Unified x hover: everything drawn at one date, across all facets.

use chrono::NaiveDate;
use serde::Serialize;

use crate::chart::palette::Rgb;
use crate::chart::spec::{ChartSpec, HoverData};

/// One line of a unified hover readout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverEntry {
    pub facet: Option<usize>,
    pub trace: String,
    pub color: Rgb,
    pub y: f64,
    /// Present for scatter points; trend vertices only carry x and y.
    pub data: Option<HoverData>,
}

impl ChartSpec {
    /// Distinct dates of all scatter points, ascending. These are the stops
    /// of a hover cursor.
    pub fn hover_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self
            .point_traces
            .iter()
            .flat_map(|t| t.points.iter().map(|p| p.x))
            .collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }

    /// Readout at `date`: scatter points first, grouped by facet, then trend
    /// vertices.
    pub fn hover_at(&self, date: NaiveDate) -> Vec<HoverEntry> {
        let mut entries = Vec::new();

        for facet in 0..self.facet_count() {
            for trace in self.point_traces_in(facet) {
                for p in trace.points.iter().filter(|p| p.x == date) {
                    entries.push(HoverEntry {
                        facet: Some(facet),
                        trace: trace.name.clone(),
                        color: trace.color,
                        y: p.y,
                        data: Some(p.hover.clone()),
                    });
                }
            }
        }

        for trace in &self.trend_traces {
            for p in trace.points.iter().filter(|p| p.x == date) {
                entries.push(HoverEntry {
                    facet: trace.facet,
                    trace: trace.name.clone(),
                    color: trace.color,
                    y: p.y,
                    data: None,
                });
            }
        }

        entries
    }
}
