//! Collapsible "Show Filtered Data Table" section.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use moonlab_core::data::RecordSchema;
use moonlab_core::Record;

use crate::app::{AppState, Focus};
use crate::theme;
use crate::ui::panel_block;

pub const TABLE_TITLE: &str = "Show Filtered Data Table";

const COLUMN_WIDTHS: [Constraint; 8] = [
    Constraint::Length(10),
    Constraint::Length(8),
    Constraint::Length(14),
    Constraint::Length(9),
    Constraint::Length(9),
    Constraint::Length(9),
    Constraint::Length(9),
    Constraint::Min(10),
];

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let active = app.focus == Focus::Table;
    let arrow = if app.table_expanded { "▾" } else { "▸" };
    let block = panel_block(
        &format!("{arrow} {TABLE_TITLE} ({} rows)", app.filtered.len()),
        active,
    );
    let inner = block.inner(area);
    f.render_widget(block, area);

    if !app.table_expanded {
        let hint = Line::from(Span::styled("Press t to expand", theme::muted()));
        f.render_widget(Paragraph::new(hint), inner);
        return;
    }

    let header = Row::new(
        RecordSchema::REQUIRED_COLUMNS
            .iter()
            .map(|name| Cell::from(*name)),
    )
    .style(theme::neutral().add_modifier(Modifier::BOLD));

    // Header row takes one line.
    let visible = (inner.height as usize).saturating_sub(1);
    let rows: Vec<Row> = app
        .filtered_records()
        .skip(app.table_scroll)
        .take(visible)
        .map(record_row)
        .collect();

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .column_spacing(1);
    f.render_widget(table, inner);
}

fn record_row(record: &Record) -> Row<'static> {
    Row::new(vec![
        Cell::from(record.date.format("%Y-%m-%d").to_string()),
        Cell::from(record.ticker.clone()),
        Cell::from(record.moon_phase.clone()),
        Cell::from(format!("{:.2}", record.open)),
        Cell::from(format!("{:.2}", record.high)),
        Cell::from(format!("{:.2}", record.low)),
        Cell::from(format!("{:.2}", record.close)),
        Cell::from(format!("{:.0}", record.volume)),
    ])
    .style(theme::text())
}
