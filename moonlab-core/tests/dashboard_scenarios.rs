//! End-to-end scenarios over the fixture dataset: load, select, filter, chart.

use std::path::PathBuf;

use moonlab_core::chart::{HoverMode, MarkerSymbol};
use moonlab_core::selection::DEFAULT_TICKERS;
use moonlab_core::{
    load_dataset, render_pass, ChartError, ChartStyle, Dataset, Selection, SelectionOptions,
};

fn fixture() -> Dataset {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/moon_sample.csv");
    load_dataset(&path).unwrap()
}

#[test]
fn default_selection_charts_two_tickers_across_all_phases() {
    let ds = fixture();
    let options = SelectionOptions::from_dataset(&ds);
    let selection = Selection::with_defaults(&options, &DEFAULT_TICKERS);

    let pass = render_pass(&ds, &selection, &ChartStyle::default());
    let spec = pass.chart.unwrap();

    let facets: Vec<&str> = spec.facets.iter().map(|f| f.ticker.as_str()).collect();
    assert_eq!(facets, vec!["WU", "ZSL"]);
    assert_eq!(pass.view.len(), 12);
    assert_eq!(spec.point_count(), 12);
    assert_eq!(spec.hover_mode, HoverMode::XUnified);

    // Waxing appears first in the file, so it takes the first marker.
    let waxing = spec.point_traces.iter().find(|t| t.name == "Waxing").unwrap();
    assert_eq!(waxing.marker, MarkerSymbol::Circle);

    let trend_names: Vec<&str> = spec.trend_traces.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(trend_names, vec!["WU Trend", "ZSL Trend"]);
}

#[test]
fn phase_filter_narrows_every_facet() {
    let ds = fixture();
    let selection = Selection::new(["WU", "ZSL", "AAPL"], ["Full"]);

    let pass = render_pass(&ds, &selection, &ChartStyle::default());
    let spec = pass.chart.unwrap();

    assert_eq!(pass.view.len(), 3);
    assert_eq!(spec.facets.len(), 3);
    assert!(spec.point_traces.iter().all(|t| t.name == "Full"));
    assert!(spec.trend_traces.iter().all(|t| t.points.len() == 1));
}

#[test]
fn nonexistent_ticker_renders_warning_path() {
    let ds = fixture();
    let selection = Selection::new(["NONEXISTENT"], ds.phases());

    let pass = render_pass(&ds, &selection, &ChartStyle::default());
    assert!(pass.is_empty());
    assert_eq!(pass.chart, Err(ChartError::EmptyResult));
    assert_eq!(
        ChartError::EmptyResult.to_string(),
        "No data available for the selected filters."
    );
    assert!(pass.view.to_records().is_empty());
}

#[test]
fn chart_spec_serializes_for_external_renderers() {
    let ds = fixture();
    let pass = render_pass(&ds, &Selection::new(["WU"], ["New"]), &ChartStyle::default());
    let json = serde_json::to_value(pass.chart.unwrap()).unwrap();

    assert_eq!(json["x_axis"]["title"], "Date");
    assert_eq!(json["y_axis"]["title"], "Close Price");
    assert_eq!(json["hover_mode"], "x_unified");
    assert_eq!(json["point_traces"][0]["marker"], "circle");
    assert_eq!(json["point_traces"][0]["points"][0]["x"], "2024-01-11");
    assert_eq!(json["point_traces"][0]["points"][0]["hover"]["Moon_Phase"], "New");
    assert_eq!(json["trend_traces"][0]["name"], "WU Trend");
}
