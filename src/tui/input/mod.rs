mod edit;
mod navigate;
mod rearrange;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use edit::handle_edit;
use navigate::handle_navigate;
use rearrange::handle_rearrange;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Status messages last for one render
    app.status_message = None;

    // The file under the cursor is about to be replaced
    if app.loading {
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Edit | Mode::Create => handle_edit(app, key),
        Mode::Rearrange => handle_rearrange(app, key),
    }
}

/// Handle a bracketed paste. Only meaningful while typing.
pub fn handle_paste(app: &mut App, text: &str) {
    if matches!(app.mode, Mode::Edit | Mode::Create) && !app.loading {
        app.edit.insert_str(text);
    }
}

#[cfg(test)]
pub(crate) mod test_keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::tui::app::App;

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn press(app: &mut App, code: KeyCode) {
        super::handle_key(app, key(code));
    }

    pub fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }
}
