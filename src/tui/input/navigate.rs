use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

/// Rows moved by PageUp/PageDown
const PAGE_ROWS: usize = 10;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    let last = app.visible_tasks().len().saturating_sub(1);
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        KeyCode::Char('j') | KeyCode::Down => {
            app.list.cursor = (app.list.cursor + 1).min(last);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.list.cursor = app.list.cursor.saturating_sub(1);
        }
        KeyCode::PageDown => {
            app.list.cursor = (app.list.cursor + PAGE_ROWS).min(last);
        }
        KeyCode::PageUp => {
            app.list.cursor = app.list.cursor.saturating_sub(PAGE_ROWS);
        }
        KeyCode::Char('g') | KeyCode::Home => app.list.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.list.cursor = last,

        KeyCode::Char('/') => app.mode = Mode::Search,
        KeyCode::Char('s') => {
            app.scan_input.clear();
            app.mode = Mode::Scan;
        }
        KeyCode::Char('r') => app.request_load(),

        // Esc clears an active search
        KeyCode::Esc => {
            if app.board.is_searching() {
                app.set_query("");
            }
        }
        _ => {}
    }
}
