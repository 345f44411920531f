//! The whole pure transform, run once per selection change:
//! `(Dataset, Selection) -> (FilteredView, ChartSpec | EmptyResult)`.

use crate::chart::{build_chart_with, ChartError, ChartSpec, ChartStyle};
use crate::dataset::Dataset;
use crate::filter::{filter, FilteredView};
use crate::selection::Selection;

/// Output of one render pass. The view is always present so the table can
/// render even when the chart could not be built.
#[derive(Debug, Clone)]
pub struct RenderPass<'a> {
    pub view: FilteredView<'a>,
    pub chart: Result<ChartSpec, ChartError>,
}

impl RenderPass<'_> {
    /// True when the shell should show the empty-selection warning.
    pub fn is_empty(&self) -> bool {
        matches!(self.chart, Err(ChartError::EmptyResult))
    }
}

pub fn render_pass<'a>(
    dataset: &'a Dataset,
    selection: &Selection,
    style: &ChartStyle,
) -> RenderPass<'a> {
    let view = filter(dataset, selection);
    let chart = build_chart_with(&view, style);
    RenderPass { view, chart }
}
