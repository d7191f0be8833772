use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::todo_ops;
use crate::tui::app::{App, Mode};
use crate::tui::edit_buffer::EditBuffer;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Second `d` confirms; anything else disarms and is handled normally
    if app.pending_delete {
        app.pending_delete = false;
        if key.modifiers == KeyModifiers::NONE && key.code == KeyCode::Char('d') {
            delete_at_cursor(app);
            return;
        }
    }

    let count = app.todo_count();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.go_back(),
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < count {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.cursor = count.saturating_sub(1),
        KeyCode::Char(' ') | KeyCode::Enter => activate(app),
        KeyCode::Char('x') => {
            if count > 0 {
                todo_ops::toggle_todo(&mut app.file, app.cursor);
                app.save();
            }
        }
        KeyCode::Char('e') => {
            if count > 0 {
                let item = app.file.get_todo(app.cursor);
                app.edit = EditBuffer::new(&item.text);
                app.mode = Mode::Edit;
            }
        }
        KeyCode::Char('c') => {
            app.edit = EditBuffer::default();
            app.mode = Mode::Create;
        }
        KeyCode::Char('r') => {
            if count > 0 {
                app.mode = Mode::Rearrange;
            }
        }
        KeyCode::Char('d') => {
            if count > 0 {
                app.pending_delete = true;
            }
        }
        _ => {}
    }
}

/// Space/Enter: follow a link, otherwise toggle
fn activate(app: &mut App) {
    if app.todo_count() == 0 {
        return;
    }
    let item = app.file.get_todo(app.cursor);
    if let Some(target) = item.link_target() {
        app.open_link(target);
        return;
    }
    todo_ops::toggle_todo(&mut app.file, app.cursor);
    app.save();
}

fn delete_at_cursor(app: &mut App) {
    todo_ops::delete_todo(&mut app.file, app.cursor);
    app.save();
    if app.cursor >= app.todo_count() && app.cursor > 0 {
        app.cursor -= 1;
    }
}
