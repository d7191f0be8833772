pub mod header;
pub mod help_row;
pub mod status_row;
pub mod todo_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use super::app::App;

/// Main render function: header | status | list | key hints
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let status_height = if app.status_message.is_some() { 1 } else { 0 };
    let help_height = if app.ui.show_key_hints { 2 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header + spacer
            Constraint::Length(status_height),
            Constraint::Min(1), // todo list
            Constraint::Length(help_height),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    status_row::render_status_row(frame, app, chunks[1]);
    todo_list::render_todo_list(frame, app, chunks[2]);
    if app.ui.show_key_hints {
        help_row::render_help_row(frame, app, chunks[3]);
    }
}
