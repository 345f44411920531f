//! Chart building: the faceted scatter plus trend overlay, as a plain data
//! structure that renderers (terminal, JSON) consume.

pub mod builder;
pub mod hover;
pub mod palette;
pub mod spec;

pub use builder::{build_chart, build_chart_with, ChartError, ChartStyle};
pub use hover::HoverEntry;
pub use palette::{MarkerSymbol, Rgb};
pub use spec::{
    AxisSpec, ChartPoint, ChartSpec, Facet, HoverData, HoverMode, LegendEntry, LegendGlyph,
    LinePoint, PointTrace, TrendTrace, HOVER_COLUMNS,
};
