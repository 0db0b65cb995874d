use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Cancel: clear the query and show everything again
        (_, KeyCode::Esc) => {
            app.set_query("");
            app.mode = Mode::Navigate;
        }

        // Keep the query and return to the list
        (_, KeyCode::Enter) => {
            app.mode = Mode::Navigate;
        }

        // Ctrl-U clears the field
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            app.set_query("");
        }

        (_, KeyCode::Backspace) => {
            let mut query = app.board.query().to_string();
            if query.pop().is_some() {
                app.set_query(&query);
            }
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            let mut query = app.board.query().to_string();
            query.push(c);
            app.set_query(&query);
        }

        _ => {}
    }
}
