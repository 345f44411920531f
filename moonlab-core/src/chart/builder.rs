//! Chart builder: FilteredView → ChartSpec.
//!
//! Two visual layers: per-phase scatter points inside one facet per ticker,
//! and one trend line per selected ticker over its filtered closes.

use serde::{Deserialize, Serialize};

use crate::chart::palette::{phase_color, phase_marker, trend_color};
use crate::chart::spec::{
    AxisSpec, ChartPoint, ChartSpec, Facet, HoverData, HoverMode, LinePoint, PointTrace,
    TrendTrace, HOVER_COLUMNS,
};
use crate::filter::FilteredView;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    /// The selection matched no rows; callers show a warning instead.
    #[error("No data available for the selected filters.")]
    EmptyResult,
}

/// Presentation constants that do not depend on the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub title: String,
    pub height: u32,
    pub trend_line_width: f64,
    pub x_title: String,
    pub y_title: String,
    pub legend_title: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "Stock Closing Price vs Moon Phase".into(),
            height: 600,
            trend_line_width: 1.5,
            x_title: "Date".into(),
            y_title: "Close Price".into(),
            legend_title: "Moon Phase".into(),
        }
    }
}

/// Build the chart with default styling.
pub fn build_chart(view: &FilteredView<'_>) -> Result<ChartSpec, ChartError> {
    build_chart_with(view, &ChartStyle::default())
}

pub fn build_chart_with(
    view: &FilteredView<'_>,
    style: &ChartStyle,
) -> Result<ChartSpec, ChartError> {
    if view.is_empty() {
        tracing::warn!(
            selected_tickers = view.selected_tickers().len(),
            "selection matched no rows"
        );
        return Err(ChartError::EmptyResult);
    }

    let facets: Vec<Facet> = view
        .tickers_present()
        .into_iter()
        .map(|ticker| Facet {
            ticker: ticker.to_string(),
            title: format!("Ticker={ticker}"),
        })
        .collect();

    // Phase slots follow first appearance in the view; they fix color and marker.
    let mut phases: Vec<&str> = Vec::new();
    for r in view.iter() {
        if !phases.contains(&r.moon_phase.as_str()) {
            phases.push(r.moon_phase.as_str());
        }
    }

    // Rows with a missing close stay in the view and table but are not plotted.
    let mut point_traces: Vec<PointTrace> = Vec::new();
    for (slot, phase) in phases.iter().enumerate() {
        for (facet_idx, facet) in facets.iter().enumerate() {
            let points: Vec<ChartPoint> = view
                .iter()
                .filter(|r| r.moon_phase == *phase && r.ticker == facet.ticker)
                .filter(|r| r.close.is_finite())
                .map(|r| ChartPoint {
                    x: r.date,
                    y: r.close,
                    hover: HoverData::from(r),
                })
                .collect();
            if points.is_empty() {
                continue;
            }
            let first_of_phase = !point_traces.iter().any(|t| t.name == *phase);
            point_traces.push(PointTrace {
                name: phase.to_string(),
                facet: facet_idx,
                color: phase_color(slot),
                marker: phase_marker(slot),
                show_legend: first_of_phase,
                points,
            });
        }
    }

    // One trend per selected ticker, even when it contributes no rows.
    let trend_traces: Vec<TrendTrace> = view
        .selected_tickers()
        .iter()
        .enumerate()
        .map(|(slot, ticker)| {
            let mut points: Vec<LinePoint> = view
                .iter()
                .filter(|r| r.ticker == *ticker && r.close.is_finite())
                .map(|r| LinePoint {
                    x: r.date,
                    y: r.close,
                })
                .collect();
            points.sort_by_key(|p| p.x);
            TrendTrace {
                name: format!("{ticker} Trend"),
                ticker: ticker.clone(),
                facet: facets.iter().position(|f| f.ticker == *ticker),
                color: trend_color(phases.len(), slot),
                line_width: style.trend_line_width,
                show_legend: true,
                points,
            }
        })
        .collect();

    let spec = ChartSpec {
        title: style.title.clone(),
        height: style.height,
        facets,
        point_traces,
        trend_traces,
        x_axis: AxisSpec {
            title: style.x_title.clone(),
        },
        y_axis: AxisSpec {
            title: style.y_title.clone(),
        },
        legend_title: style.legend_title.clone(),
        hover_mode: HoverMode::XUnified,
        hover_columns: HOVER_COLUMNS.iter().map(|c| c.to_string()).collect(),
    };

    tracing::debug!(
        facets = spec.facet_count(),
        points = spec.point_count(),
        trends = spec.trend_traces.len(),
        "chart built"
    );
    Ok(spec)
}
