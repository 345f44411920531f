//! Filter sidebar: ticker and moon-phase multiselects.

use std::collections::BTreeSet;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, Focus};
use crate::theme;
use crate::ui::{panel_block, scroll_offset};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let active = matches!(app.focus, Focus::Tickers | Focus::Phases);
    let block = panel_block("Filter Options", active);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    render_multiselect(
        f,
        halves[0],
        MultiSelect {
            label: "Select Ticker(s):",
            options: &app.options.tickers,
            selected: &app.selection.tickers,
            cursor: app.ticker_cursor.row,
            focused: app.focus == Focus::Tickers,
        },
    );
    render_multiselect(
        f,
        halves[1],
        MultiSelect {
            label: "Select Moon Phase(s):",
            options: &app.options.phases,
            selected: &app.selection.phases,
            cursor: app.phase_cursor.row,
            focused: app.focus == Focus::Phases,
        },
    );
}

struct MultiSelect<'a> {
    label: &'a str,
    options: &'a [String],
    selected: &'a BTreeSet<String>,
    cursor: usize,
    focused: bool,
}

fn render_multiselect(f: &mut Frame, area: Rect, list: MultiSelect<'_>) {
    let label_style = if list.focused {
        theme::accent_bold()
    } else {
        theme::neutral()
    };
    let mut lines: Vec<Line> = vec![Line::from(vec![
        Span::styled(list.label, label_style),
        Span::styled(
            format!(" {}/{}", list.selected.len(), list.options.len()),
            theme::muted(),
        ),
    ])];

    let visible = (area.height as usize).saturating_sub(1);
    let offset = scroll_offset(list.cursor, visible);

    for (i, option) in list
        .options
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
    {
        let checked = list.selected.contains(option);
        let (mark, style) = if checked {
            ("[x]", theme::positive())
        } else {
            ("[ ]", theme::muted())
        };
        let row_style = if i == list.cursor {
            theme::cursor(list.focused)
        } else {
            style
        };
        let prefix = if i == list.cursor { "▸ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(prefix, theme::accent()),
            Span::styled(format!("{mark} {option}"), row_style),
        ]));
    }

    if list.options.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (no options)",
            theme::muted().add_modifier(Modifier::ITALIC),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}
