use std::fmt::Write;

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

const FALLBACK_DATE_FORMAT: &str = "%b %-d, %Y";

/// Icon repeated once per nesting level, file stem, today's date
pub fn header_text(app: &App, date: &str) -> String {
    let icons = app.header_icon.repeat(app.nav.depth() + 1);
    format!("{} {} [{}]", icons, app.file_stem(), date)
}

/// Format today's date, falling back when the configured pattern is invalid
pub fn today(pattern: &str) -> String {
    let now = Local::now();
    let mut out = String::new();
    if write!(out, "{}", now.format(pattern)).is_err() {
        out.clear();
        let _ = write!(out, "{}", now.format(FALLBACK_DATE_FORMAT));
    }
    out
}

pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let text = header_text(app, &today(&app.ui.date_format));
    let style = Style::default()
        .fg(app.theme.title)
        .add_modifier(Modifier::BOLD);
    let paragraph = Paragraph::new(Line::from(Span::styled(text, style)));
    frame.render_widget(paragraph, area);
}
