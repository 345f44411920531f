//! Full-frame rendering against ratatui's TestBackend.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use moonlab_core::{DashboardConfig, Dataset, Record};
use moonlab_tui::app::Focus;
use moonlab_tui::{handle_key, ui, AppState};

fn record(date: (i32, u32, u32), ticker: &str, phase: &str, close: f64) -> Record {
    Record {
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        ticker: ticker.into(),
        moon_phase: phase.into(),
        open: close,
        high: close + 0.5,
        low: close - 0.5,
        close,
        volume: 900_000.0,
    }
}

fn dataset() -> Dataset {
    Dataset::from_records(vec![
        record((2024, 1, 1), "WU", "Full", 12.0),
        record((2024, 1, 2), "WU", "New", 12.3),
        record((2024, 1, 1), "ZSL", "Full", 22.0),
        record((2024, 1, 3), "ZSL", "Waxing", 21.4),
        record((2024, 1, 2), "AAPL", "New", 185.0),
    ])
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn draw(app: &AppState) -> String {
    let backend = TestBackend::new(140, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

fn press(app: &mut AppState, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn default_view_shows_sidebar_and_both_facets() {
    let app = AppState::new(dataset(), &DashboardConfig::default());
    let text = draw(&app);

    assert!(text.contains("Interactive Stock Analysis by Moon Phase"));
    assert!(text.contains("Filter Options"));
    assert!(text.contains("Select Ticker(s):"));
    assert!(text.contains("Select Moon Phase(s):"));
    assert!(text.contains("[x] WU"));
    assert!(text.contains("[x] ZSL"));
    assert!(text.contains("[ ] AAPL"));

    assert!(text.contains("Stock Closing Price vs Moon Phase"));
    assert!(text.contains("Ticker=WU"));
    assert!(text.contains("Ticker=ZSL"));
    assert!(!text.contains("Ticker=AAPL"));
    assert!(text.contains("Moon Phase:"));
    assert!(text.contains("WU Trend"));
    assert!(text.contains("Close Price"));
}

#[test]
fn empty_selection_shows_warning_instead_of_chart() {
    let mut app = AppState::new(dataset(), &DashboardConfig::default());
    press(&mut app, KeyCode::Char('d'));
    let text = draw(&app);

    assert!(text.contains("No data available for the selected filters."));
    assert!(!text.contains("Ticker=WU"));
    assert!(text.contains("Show Filtered Data Table (0 rows)"));
}

#[test]
fn expanded_table_lists_filtered_rows() {
    let mut app = AppState::new(dataset(), &DashboardConfig::default());
    press(&mut app, KeyCode::Char('t'));
    let text = draw(&app);

    assert!(text.contains("Show Filtered Data Table (4 rows)"));
    assert!(text.contains("Moon_Phase"));
    assert!(text.contains("2024-01-03"));
    assert!(text.contains("21.40"));
    assert!(!text.contains("185.00"));
}

#[test]
fn hover_readout_lists_every_facet_at_the_date() {
    let mut app = AppState::new(dataset(), &DashboardConfig::default());
    app.focus = Focus::Chart;
    press(&mut app, KeyCode::Char('l'));
    let text = draw(&app);

    assert!(text.contains("Date: 2024-01-01"));
    assert!(text.contains("Close Price: 12.00"));
    assert!(text.contains("Close Price: 22.00"));
    assert!(text.contains("ZSL Trend"));
}

#[test]
fn help_overlay_renders() {
    let mut app = AppState::new(dataset(), &DashboardConfig::default());
    press(&mut app, KeyCode::Char('?'));
    let text = draw(&app);
    assert!(text.contains("Toggle option under cursor"));
}
