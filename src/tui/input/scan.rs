use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Keystrokes while the QR prompt is open. Handheld scanners type the payload
/// and finish with Enter, so this is also how a physical scan arrives.
pub(super) fn handle_scan(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.scan_input.clear();
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Enter) => finish_scan(app),
        (_, KeyCode::Backspace) => {
            app.scan_input.pop();
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.scan_input.push(c);
        }
        _ => {}
    }
}

/// Close the prompt and hand the payload to the board as a query.
pub(super) fn finish_scan(app: &mut App) {
    let payload = std::mem::take(&mut app.scan_input);
    app.mode = Mode::Navigate;
    app.apply_scan(&payload);
}
