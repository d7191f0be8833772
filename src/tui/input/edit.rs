use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::TodoItem;
use crate::ops::todo_ops;
use crate::tui::app::{App, Mode};

/// Text input for both Edit and Create modes
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Enter => confirm_edit(app),
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Left if ctrl || alt => app.edit.word_left(),
        KeyCode::Right if ctrl || alt => app.edit.word_right(),
        KeyCode::Left => app.edit.move_left(),
        KeyCode::Right => app.edit.move_right(),
        KeyCode::Home => app.edit.home(),
        KeyCode::End => app.edit.end(),
        KeyCode::Backspace if ctrl || alt => app.edit.delete_word_before(),
        KeyCode::Backspace => app.edit.backspace(),
        KeyCode::Delete => app.edit.delete(),
        KeyCode::Char('a') if ctrl => app.edit.home(),
        KeyCode::Char('e') if ctrl => app.edit.end(),
        KeyCode::Char('w') if ctrl => app.edit.delete_word_before(),
        KeyCode::Char('u') if ctrl => app.edit.clear_to_start(),
        KeyCode::Char(c) if !ctrl => app.edit.insert_char(c),
        _ => {}
    }
}

fn confirm_edit(app: &mut App) {
    match app.mode {
        Mode::Edit => {
            if app.todo_count() > 0 {
                let text = app.edit.text().to_string();
                todo_ops::set_todo_text(&mut app.file, app.cursor, &text);
                app.save();
            }
        }
        Mode::Create => {
            let text = app.edit.text().trim();
            if !text.is_empty() {
                let item = TodoItem::new(text);
                app.cursor = todo_ops::insert_todo(&mut app.file, Some(app.cursor), &item);
                app.save();
            }
        }
        Mode::Navigate | Mode::Rearrange => {}
    }
    app.mode = Mode::Navigate;
}
