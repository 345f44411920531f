//! MoonLab TUI: moon-phase stock dashboard in the terminal.
//!
//! Layout:
//! 1. Header: page title
//! 2. Sidebar: ticker and moon-phase multiselects
//! 3. Chart: one facet per ticker, phase-colored points, trend lines
//! 4. Table: collapsible filtered rows
//! 5. Status bar: key hints and the last status message

use std::fs::OpenOptions;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use moonlab_core::{load_dataset, DashboardConfig};
use moonlab_tui::{handle_key, ui, AppState};

/// Interactive stock analysis by moon phase.
#[derive(Parser, Debug)]
#[command(name = "moonlab-tui", version, about)]
struct Args {
    /// Dataset to load (CSV or Parquet); overrides `data_path` in the config.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Config file; defaults to the per-user moonlab/config.toml when present.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = DashboardConfig::load(args.config.as_deref())?;
    if let Some(data) = args.data {
        config.data_path = data;
    }

    init_logging(&config.log_file);

    // Load before touching the terminal: a bad file is fatal and should print plainly.
    let dataset = load_dataset(&config.data_path)
        .with_context(|| format!("failed to load dataset {}", config.data_path.display()))?;
    let mut app = AppState::new(dataset, &config);

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    tracing::info!("dashboard closed");
    Ok(())
}

/// Send tracing output to `path`; stdout belongs to the terminal UI.
fn init_logging(path: &Path) {
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("warning: logging disabled, cannot open {}: {e}", path.display());
            return;
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}
