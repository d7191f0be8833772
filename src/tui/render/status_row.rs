use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Transient error line under the header
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = &app.status_message {
        let paragraph =
            Paragraph::new(format!("  {}", message)).style(Style::default().fg(app.theme.red));
        frame.render_widget(paragraph, area);
    }
}
