//! MoonLab Core: the filter-and-render pipeline behind the moon-phase
//! stock dashboard.
//!
//! - Dataset loading from CSV or Parquet (polars), with required-column checks
//! - Selection state: sorted option lists, ticker and phase sets
//! - Filter engine: stable, pure row filter
//! - Chart builder: facet per ticker, points encoded by phase, trend per
//!   selected ticker
//! - Dashboard configuration (TOML)

pub mod chart;
pub mod config;
pub mod data;
pub mod dataset;
pub mod domain;
pub mod filter;
pub mod pipeline;
pub mod selection;

pub use chart::{build_chart, build_chart_with, ChartError, ChartSpec, ChartStyle};
pub use config::{ConfigError, DashboardConfig};
pub use data::{load_dataset, LoadError};
pub use dataset::Dataset;
pub use domain::Record;
pub use filter::{filter, FilteredView};
pub use pipeline::{render_pass, RenderPass};
pub use selection::{Selection, SelectionOptions};
