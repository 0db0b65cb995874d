mod navigate;
mod scan;
mod search;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use navigate::*;
use scan::*;
use search::*;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl-C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Search => handle_search(app, key),
        Mode::Scan => handle_scan(app, key),
    }
}

/// Handle a bracketed paste event (terminal sends pasted text as a single string).
/// Goes to whichever prompt is open; ignored while navigating.
pub fn handle_paste(app: &mut App, text: &str) {
    let clean = text.replace(['\r', '\n'], "");
    match app.mode {
        Mode::Search => {
            let mut query = app.board.query().to_string();
            query.push_str(&clean);
            app.set_query(&query);
        }
        Mode::Scan => {
            // Scanners and pastes deliver the whole payload at once
            app.scan_input.push_str(&clean);
            finish_scan(app);
        }
        Mode::Navigate => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Task;
    use crate::tui::render::test_helpers::app_with_tasks;

    pub(super) fn loaded_app() -> App {
        app_with_tasks(vec![
            Task::new("T1", "Paint wall", "", "#fff"),
            Task::new("T2", "Fix door", "Hinge", "#f00"),
            Task::new("T3", "Order paint", "", "#0f0"),
        ])
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        for mode in [Mode::Navigate, Mode::Search, Mode::Scan] {
            let mut app = loaded_app();
            app.mode = mode;
            handle_key(
                &mut app,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            );
            assert!(app.should_quit, "{mode:?}");
        }
    }

    #[test]
    fn paste_in_search_appends_to_query() {
        let mut app = loaded_app();
        app.mode = Mode::Search;
        app.set_query("pa");
        handle_paste(&mut app, "int\n");
        assert_eq!(app.board.query(), "paint");
        assert_eq!(app.visible_tasks().len(), 2);
    }

    #[test]
    fn paste_in_scan_applies_payload() {
        let mut app = loaded_app();
        app.mode = Mode::Scan;
        handle_paste(&mut app, "T2\r\n");
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.board.query(), "T2");
        assert_eq!(app.visible_tasks()[0].title, "Fix door");
    }

    #[test]
    fn paste_while_navigating_is_ignored() {
        let mut app = loaded_app();
        handle_paste(&mut app, "door");
        assert_eq!(app.board.query(), "");
        assert_eq!(app.visible_tasks().len(), 3);
    }
}
