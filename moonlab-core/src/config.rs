//! Dashboard configuration: TOML file with built-in defaults.
//!
//! Lookup order: an explicit path, then `<config_dir>/moonlab/config.toml`,
//! then defaults. A missing file is not an error; a malformed one is.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chart::ChartStyle;
use crate::selection::DEFAULT_TICKERS;

pub const DEFAULT_DATA_PATH: &str = "filtered_stock_data_moon_cycle.csv";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Dataset file (CSV or Parquet).
    pub data_path: PathBuf,
    /// Tickers preselected at startup; ones missing from the dataset are skipped.
    pub default_tickers: Vec<String>,
    pub page_title: String,
    pub chart_title: String,
    pub chart_height: u32,
    pub trend_line_width: f64,
    /// Log destination for the terminal UI.
    pub log_file: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let style = ChartStyle::default();
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            default_tickers: DEFAULT_TICKERS.iter().map(|t| t.to_string()).collect(),
            page_title: "Interactive Stock Analysis by Moon Phase".into(),
            chart_title: style.title,
            chart_height: style.height,
            trend_line_width: style.trend_line_width,
            log_file: PathBuf::from("moonlab.log"),
        }
    }
}

impl DashboardConfig {
    /// Default per-user config location, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("moonlab").join("config.toml"))
    }

    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Resolve configuration. An explicit path must exist; the per-user
    /// path is used only if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle {
            title: self.chart_title.clone(),
            height: self.chart_height,
            trend_line_width: self.trend_line_width,
            ..ChartStyle::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(cfg.default_tickers, vec!["WU", "ZSL"]);
        assert_eq!(cfg.chart_height, 600);
        assert_eq!(cfg.chart_style(), ChartStyle::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = DashboardConfig::from_toml(
            "data_path = \"prices.csv\"\ndefault_tickers = [\"AAPL\"]\n",
            Path::new("inline.toml"),
        )
        .unwrap();
        assert_eq!(cfg.data_path, PathBuf::from("prices.csv"));
        assert_eq!(cfg.default_tickers, vec!["AAPL"]);
        assert_eq!(cfg.trend_line_width, 1.5);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = DashboardConfig::from_toml("chart_height = \"tall\"", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = DashboardConfig::load(Some(Path::new("/nonexistent/moonlab.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "chart_title = \"Lunar\"\nchart_height = 400\n").unwrap();

        let cfg = DashboardConfig::from_file(&path).unwrap();
        assert_eq!(cfg.chart_style().title, "Lunar");
        assert_eq!(cfg.chart_style().height, 400);
    }
}
