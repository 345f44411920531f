//! MoonLab TUI - terminal dashboard over the moon-phase stock dataset
//!
//! Provides interactive exploration of closing prices with:
//! - Ticker and moon-phase multiselects
//! - Faceted scatter chart with per-ticker trend lines
//! - Unified hover readout across facets
//! - Collapsible filtered data table

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;

#[cfg(test)]
mod test_helpers;
