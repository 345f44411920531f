//! Bottom status bar: focus, key hints, last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, Focus, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        format!(" [{}] ", app.focus.label()),
        theme::accent_bold(),
    ));

    // Focus hints
    spans.push(Span::styled(hints(app.focus), theme::muted()));

    // Separator
    spans.push(Span::raw(" | "));

    // Status message
    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    let line = Line::from(spans);
    let para = Paragraph::new(line);
    f.render_widget(para, area);
}

fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Tickers | Focus::Phases => "j/k move  Space toggle  a all  d none  Tab next  ? help  q quit",
        Focus::Chart => "h/l hover  Esc clear  t table  Tab next  ? help  q quit",
        Focus::Table => "j/k scroll  t table  Tab next  ? help  q quit",
    }
}
