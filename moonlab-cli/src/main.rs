//! MoonLab CLI: inspect the moon-phase dataset without the dashboard.
//!
//! Commands:
//! - `options`: list the tickers and moon phases the dataset offers
//! - `filter`: print filtered rows as CSV, or export them to CSV/Parquet
//! - `chart`: print the faceted chart spec as JSON

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use moonlab_core::data::{export_records, RecordSchema};
use moonlab_core::{
    filter, load_dataset, render_pass, DashboardConfig, Dataset, FilteredView, Selection,
    SelectionOptions,
};

#[derive(Parser)]
#[command(
    name = "moonlab",
    version,
    about = "MoonLab CLI: stock closing prices by moon phase"
)]
struct Cli {
    /// Dataset to load (CSV or Parquet); overrides `data_path` in the config.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config file; defaults to the per-user moonlab/config.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the distinct tickers and moon phases in the dataset.
    Options,
    /// Print the filtered rows as CSV, or export them with --output.
    Filter {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Write to this file instead of stdout (.csv or .parquet).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the chart spec for the selection as JSON.
    Chart {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Pretty-print the JSON.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

#[derive(clap::Args, Debug, Default)]
struct SelectionArgs {
    /// Ticker to include; repeatable. Defaults to the configured default tickers.
    #[arg(long = "ticker", short = 't')]
    tickers: Vec<String>,

    /// Moon phase to include; repeatable. Defaults to every phase.
    #[arg(long = "phase", short = 'p')]
    phases: Vec<String>,
}

impl SelectionArgs {
    /// Explicit values are taken as given, even when absent from the dataset.
    fn resolve(&self, options: &SelectionOptions, config: &DashboardConfig) -> Selection {
        let mut selection = Selection::with_defaults(options, &config.default_tickers);
        if !self.tickers.is_empty() {
            selection.set_tickers(self.tickers.iter().cloned());
        }
        if !self.phases.is_empty() {
            selection.set_phases(self.phases.iter().cloned());
        }
        selection
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = DashboardConfig::load(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }

    let dataset = load_dataset(&config.data_path)
        .with_context(|| format!("failed to load dataset {}", config.data_path.display()))?;
    let options = SelectionOptions::from_dataset(&dataset);

    match cli.command {
        Commands::Options => run_options(&options),
        Commands::Filter { selection, output } => {
            let selection = selection.resolve(&options, &config);
            run_filter(&dataset, &selection, output)
        }
        Commands::Chart { selection, pretty } => {
            let selection = selection.resolve(&options, &config);
            run_chart(&dataset, &selection, &config, pretty)
        }
    }
}

fn run_options(options: &SelectionOptions) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "Tickers ({}):", options.tickers.len())?;
    for ticker in &options.tickers {
        writeln!(out, "  {ticker}")?;
    }
    writeln!(out, "Moon phases ({}):", options.phases.len())?;
    for phase in &options.phases {
        writeln!(out, "  {phase}")?;
    }
    Ok(())
}

fn run_filter(dataset: &Dataset, selection: &Selection, output: Option<PathBuf>) -> Result<()> {
    let view = filter(dataset, selection);
    tracing::info!(rows = view.len(), "filtered rows");

    match output {
        Some(path) => {
            let written = export_records(view.iter(), &path)
                .with_context(|| format!("failed to export to {}", path.display()))?;
            eprintln!("Wrote {written} rows to {}", path.display());
        }
        None => write_csv(&view, io::stdout().lock())?,
    }
    Ok(())
}

/// Header first, so an empty view still prints the column names.
fn write_csv<W: Write>(view: &FilteredView<'_>, sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);
    writer.write_record(RecordSchema::REQUIRED_COLUMNS)?;
    for record in view.iter() {
        writer.write_record([
            record.date.format("%Y-%m-%d").to_string(),
            record.ticker.clone(),
            record.moon_phase.clone(),
            format_number(record.open),
            format_number(record.high),
            format_number(record.low),
            format_number(record.close),
            format_number(record.volume),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Whole numbers print without a fraction and missing values print blank,
/// matching how the dataset itself is written.
fn format_number(value: f64) -> String {
    if !value.is_finite() {
        String::new()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn run_chart(
    dataset: &Dataset,
    selection: &Selection,
    config: &DashboardConfig,
    pretty: bool,
) -> Result<()> {
    let pass = render_pass(dataset, selection, &config.chart_style());
    match pass.chart {
        Ok(spec) => {
            let json = if pretty {
                serde_json::to_string_pretty(&spec)?
            } else {
                serde_json::to_string(&spec)?
            };
            println!("{json}");
        }
        Err(e) => {
            tracing::warn!(tickers = ?selection.tickers, phases = ?selection.phases, "empty chart");
            println!("{e}");
        }
    }
    Ok(())
}
