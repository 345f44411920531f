//! ChartSpec: renderer-independent description of the faceted chart.

use chrono::NaiveDate;
use serde::Serialize;

use crate::chart::palette::{MarkerSymbol, Rgb};
use crate::domain::Record;

/// Columns surfaced in the hover readout, in display order.
pub const HOVER_COLUMNS: [&str; 7] = [
    "Open",
    "High",
    "Low",
    "Close",
    "Volume",
    "Ticker",
    "Moon_Phase",
];

/// How hover readouts are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverMode {
    /// One readout per x value, shared by every panel.
    XUnified,
    /// Readout for the single nearest point.
    Closest,
}

/// Per-point hover payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverData {
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
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[serde(rename = "Moon_Phase")]
    pub moon_phase: String,
}

impl From<&Record> for HoverData {
    fn from(r: &Record) -> Self {
        Self {
            open: r.open,
            high: r.high,
            low: r.low,
            close: r.close,
            volume: r.volume,
            ticker: r.ticker.clone(),
            moon_phase: r.moon_phase.clone(),
        }
    }
}

/// A scatter point at (Date, Close).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: NaiveDate,
    pub y: f64,
    pub hover: HoverData,
}

/// A vertex of a trend line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinePoint {
    pub x: NaiveDate,
    pub y: f64,
}

/// One panel of the chart, holding a single ticker's rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facet {
    pub ticker: String,
    pub title: String,
}

/// Scatter points of one phase within one facet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointTrace {
    /// Phase label, also the legend label.
    pub name: String,
    pub facet: usize,
    pub color: Rgb,
    pub marker: MarkerSymbol,
    /// Only the first trace of each phase carries the legend entry.
    pub show_legend: bool,
    pub points: Vec<ChartPoint>,
}

/// Connected line through one selected ticker's closes, ordered by date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendTrace {
    /// `"<ticker> Trend"`.
    pub name: String,
    pub ticker: String,
    /// Facet drawn into; `None` when the ticker has no rows in the view.
    pub facet: Option<usize>,
    pub color: Rgb,
    pub line_width: f64,
    pub show_legend: bool,
    pub points: Vec<LinePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisSpec {
    pub title: String,
}

/// What a legend entry draws next to its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "symbol", rename_all = "snake_case")]
pub enum LegendGlyph {
    Marker(MarkerSymbol),
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
    pub glyph: LegendGlyph,
}

/// Complete chart description. Built by [`crate::chart::build_chart`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub height: u32,
    pub facets: Vec<Facet>,
    pub point_traces: Vec<PointTrace>,
    pub trend_traces: Vec<TrendTrace>,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub legend_title: String,
    pub hover_mode: HoverMode,
    pub hover_columns: Vec<String>,
}

impl ChartSpec {
    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    pub fn facet_index(&self, ticker: &str) -> Option<usize> {
        self.facets.iter().position(|f| f.ticker == ticker)
    }

    /// Point traces drawn in facet `facet`.
    pub fn point_traces_in(&self, facet: usize) -> impl Iterator<Item = &PointTrace> {
        self.point_traces.iter().filter(move |t| t.facet == facet)
    }

    /// Trend traces drawn in facet `facet`.
    pub fn trend_traces_in(&self, facet: usize) -> impl Iterator<Item = &TrendTrace> {
        self.trend_traces
            .iter()
            .filter(move |t| t.facet == Some(facet))
    }

    pub fn point_count(&self) -> usize {
        self.point_traces.iter().map(|t| t.points.len()).sum()
    }

    /// Legend entries: one per phase, then one per trend trace.
    pub fn legend(&self) -> Vec<LegendEntry> {
        let phases = self
            .point_traces
            .iter()
            .filter(|t| t.show_legend)
            .map(|t| LegendEntry {
                label: t.name.clone(),
                color: t.color,
                glyph: LegendGlyph::Marker(t.marker),
            });
        let trends = self
            .trend_traces
            .iter()
            .filter(|t| t.show_legend)
            .map(|t| LegendEntry {
                label: t.name.clone(),
                color: t.color,
                glyph: LegendGlyph::Line,
            });
        phases.chain(trends).collect()
    }

    /// Earliest and latest date across all points and trend vertices.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let xs = self
            .point_traces
            .iter()
            .flat_map(|t| t.points.iter().map(|p| p.x))
            .chain(
                self.trend_traces
                    .iter()
                    .flat_map(|t| t.points.iter().map(|p| p.x)),
            );
        let mut range: Option<(NaiveDate, NaiveDate)> = None;
        for x in xs {
            range = Some(match range {
                None => (x, x),
                Some((lo, hi)) => (lo.min(x), hi.max(x)),
            });
        }
        range
    }

    /// Lowest and highest close across all facets; panels share the y axis.
    pub fn close_range(&self) -> Option<(f64, f64)> {
        let ys = self
            .point_traces
            .iter()
            .flat_map(|t| t.points.iter().map(|p| p.y))
            .chain(
                self.trend_traces
                    .iter()
                    .flat_map(|t| t.points.iter().map(|p| p.y)),
            )
            .filter(|y| y.is_finite());
        let mut range: Option<(f64, f64)> = None;
        for y in ys {
            range = Some(match range {
                None => (y, y),
                Some((lo, hi)) => (lo.min(y), hi.max(y)),
            });
        }
        range
    }
}
