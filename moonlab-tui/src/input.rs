//! Keyboard input dispatch: help overlay → global keys → focus-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Focus};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. The help overlay swallows everything except its own dismiss keys.
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Char('t') => {
            app.table_expanded = !app.table_expanded;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.focus = app.focus.prev();
            } else {
                app.focus = app.focus.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return;
        }
        _ => {}
    }

    // 3. Focus-specific keys.
    match app.focus {
        Focus::Tickers => handle_tickers_key(app, key),
        Focus::Phases => handle_phases_key(app, key),
        Focus::Chart => handle_chart_key(app, key),
        Focus::Table => handle_table_key(app, key),
    }
}

fn handle_tickers_key(app: &mut AppState, key: KeyEvent) {
    let len = app.options.tickers.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.ticker_cursor.down(len),
        KeyCode::Char('k') | KeyCode::Up => app.ticker_cursor.up(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_ticker_at_cursor(),
        KeyCode::Char('a') => {
            app.selection.select_all_tickers(&app.options);
            app.refresh();
        }
        KeyCode::Char('d') => {
            app.selection.clear_tickers();
            app.refresh();
        }
        _ => {}
    }
}

fn handle_phases_key(app: &mut AppState, key: KeyEvent) {
    let len = app.options.phases.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.phase_cursor.down(len),
        KeyCode::Char('k') | KeyCode::Up => app.phase_cursor.up(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_phase_at_cursor(),
        KeyCode::Char('a') => {
            app.selection.select_all_phases(&app.options);
            app.refresh();
        }
        KeyCode::Char('d') => {
            app.selection.clear_phases();
            app.refresh();
        }
        _ => {}
    }
}

fn handle_chart_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('l') | KeyCode::Right => app.move_hover(1),
        KeyCode::Char('h') | KeyCode::Left => app.move_hover(-1),
        KeyCode::Char('L') | KeyCode::End => app.move_hover(isize::MAX),
        KeyCode::Char('H') | KeyCode::Home => app.move_hover(isize::MIN),
        KeyCode::Esc => app.hover = None,
        _ => {}
    }
}

fn handle_table_key(app: &mut AppState, key: KeyEvent) {
    let rows = app.filtered.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.table_scroll + 1 < rows {
                app.table_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.table_scroll = app.table_scroll.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.table_scroll = 0,
        KeyCode::Char('G') | KeyCode::End => app.table_scroll = rows.saturating_sub(1),
        KeyCode::Enter | KeyCode::Char(' ') => app.table_expanded = !app.table_expanded,
        _ => {}
    }
}
