//! Help overlay: keyboard shortcuts.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};

use crate::theme;
use crate::ui::{centered_rect, panel_block};

pub fn render(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global");
    key(&mut lines, "Tab / Shift+Tab", "Cycle focus forward / back");
    key(&mut lines, "t", "Show / hide the filtered data table");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Tickers / Moon Phases");
    key(&mut lines, "j / k", "Move cursor down / up");
    key(&mut lines, "Space", "Toggle option under cursor");
    key(&mut lines, "a", "Select all options");
    key(&mut lines, "d", "Deselect all options");
    lines.push(Line::from(""));

    section(&mut lines, "Chart");
    key(&mut lines, "h / l", "Move hover cursor to previous / next date");
    key(&mut lines, "H / L", "Jump to first / last date");
    key(&mut lines, "Esc", "Hide hover cursor");
    lines.push(Line::from(""));

    section(&mut lines, "Table");
    key(&mut lines, "j / k", "Scroll rows");
    key(&mut lines, "g / G", "First / last row");
    key(&mut lines, "Enter", "Expand / collapse");

    let para = Paragraph::new(lines)
        .block(panel_block("Help", true))
        .wrap(Wrap { trim: false });
    f.render_widget(para, popup);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
