//! Top-level UI layout: header, filter sidebar, chart, table expander, status bar.

pub mod chart_panel;
pub mod help_panel;
pub mod sidebar;
pub mod status_bar;
pub mod table_panel;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, Focus};
use crate::theme;

/// Sidebar width in columns.
const SIDEBAR_WIDTH: u16 = 30;

/// Height of the collapsed table expander (border plus one hint line).
const COLLAPSED_TABLE_HEIGHT: u16 = 3;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: header + body + 1-line status bar.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, rows[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(rows[1]);

    sidebar::render(f, body[0], app);
    draw_main(f, body[1], app);
    status_bar::render(f, rows[2], app);

    // Overlay on top.
    if app.show_help {
        help_panel::render(f, rows[1]);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &AppState) {
    let line = Line::from(vec![
        Span::styled(format!(" {} ", app.page_title), theme::accent_bold()),
        Span::styled(format!("· {} rows loaded", app.dataset.len()), theme::muted()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_main(f: &mut Frame, area: Rect, app: &AppState) {
    let table_height = if app.table_expanded {
        Constraint::Percentage(40)
    } else {
        Constraint::Length(COLLAPSED_TABLE_HEIGHT)
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), table_height])
        .split(area);

    let chart_active = app.focus == Focus::Chart;
    let block = panel_block(&app.style.title, chart_active);
    let inner = block.inner(chunks[0]);
    f.render_widget(block, chunks[0]);
    chart_panel::render(f, inner, app);

    table_panel::render(f, chunks[1], app);
}

/// Bordered block with the focus-dependent border and title styles.
pub fn panel_block(title: &str, active: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(active))
        .title(format!(" {title} "))
        .title_style(theme::panel_title(active))
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// First row to draw so that `cursor` stays within a window of `height` rows.
pub fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        0
    } else {
        cursor.saturating_sub(height - 1)
    }
}
