use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Key hints for the current mode
pub fn help_text(app: &App) -> String {
    if app.loading {
        return "  loading...".to_string();
    }
    match app.mode {
        Mode::Navigate if app.pending_delete => {
            "  press d again to delete  |  any other key to cancel".to_string()
        }
        Mode::Navigate => {
            let back = if app.nav.is_empty() {
                "esc/q: quit"
            } else {
                "esc/q: back"
            };
            format!(
                "  j/k: navigate  space/enter: toggle/open  x: toggle  e: edit  c: create  r: rearrange  d: delete  {}",
                back
            )
        }
        Mode::Edit => "  enter: save  esc: cancel".to_string(),
        Mode::Create => "  enter: create  esc: cancel".to_string(),
        Mode::Rearrange => "  j/k: swap items  r/esc: done rearranging".to_string(),
    }
}

/// Blank spacer row, then the hints
pub fn render_help_row(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![Line::from(""), Line::from(help_text(app))];
    let paragraph = Paragraph::new(lines).style(Style::default().fg(app.theme.help));
    frame.render_widget(paragraph, area);
}
