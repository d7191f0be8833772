use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::todo_ops;
use crate::tui::app::{App, Mode};

/// j/k drag the item under the cursor; the cursor follows it
pub(super) fn handle_rearrange(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < app.todo_count() {
                todo_ops::swap_todos(&mut app.file, app.cursor, app.cursor + 1);
                app.save();
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.cursor > 0 {
                todo_ops::swap_todos(&mut app.file, app.cursor, app.cursor - 1);
                app.save();
                app.cursor -= 1;
            }
        }
        KeyCode::Char('r') | KeyCode::Esc => app.mode = Mode::Navigate,
        _ => {}
    }
}
