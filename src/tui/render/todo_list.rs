use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::TodoItem;
use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, truncate_to_width};

const CURSOR_MARK: &str = " > ";
const NO_MARK: &str = "   ";

/// 1-based number right-aligned to the width of `total`, then two spaces
fn line_number(one_based: usize, total: usize) -> String {
    let width = total.to_string().len();
    format!("{:>width$}  ", one_based, width = width)
}

/// Build the visible list rows and the row the view should keep on screen
pub fn build_lines<'a>(app: &'a App, width: usize) -> (Vec<Line<'a>>, usize) {
    let count = app.todo_count();
    let mut lines = Vec::new();
    let mut focus_row = 0;

    if count == 0 && app.mode != Mode::Create {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  No todos. Press 'c' to create one.",
            Style::default().fg(app.theme.dim),
        )));
        return (lines, 0);
    }

    for i in 0..count {
        let is_cursor = i == app.cursor;
        if is_cursor {
            focus_row = lines.len();
        }

        if is_cursor && app.mode == Mode::Edit {
            lines.push(input_line(app, i + 1, count));
        } else {
            lines.push(todo_line(app, i, &app.file.get_todo(i), is_cursor, count, width));
        }

        if is_cursor && app.mode == Mode::Create {
            focus_row = lines.len();
            lines.push(input_line(app, i + 2, count + 1));
        }
    }

    if count == 0 && app.mode == Mode::Create {
        lines.push(input_line(app, 1, 1));
    }

    (lines, focus_row)
}

fn todo_line<'a>(
    app: &App,
    idx: usize,
    item: &TodoItem,
    is_cursor: bool,
    total: usize,
    width: usize,
) -> Line<'a> {
    let theme = &app.theme;
    let mark = if is_cursor { CURSOR_MARK } else { NO_MARK };
    let number = line_number(idx + 1, total);
    let room = width.saturating_sub(display_width(mark) + display_width(&number));
    let text = truncate_to_width(&item.text, room);

    let text_style = if is_cursor && app.pending_delete {
        Style::default().fg(theme.red).add_modifier(Modifier::BOLD)
    } else if is_cursor && app.mode == Mode::Rearrange {
        Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD)
    } else if is_cursor {
        let mut style = Style::default().fg(theme.highlight);
        if item.checked {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        if item.is_linked() {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    } else if item.is_linked() {
        let style = Style::default().fg(theme.link);
        if item.checked {
            style.add_modifier(Modifier::CROSSED_OUT)
        } else {
            style
        }
    } else if item.checked {
        Style::default()
            .fg(theme.dim)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(theme.text)
    };

    // The cursor mark shares the row's emphasis, minus decorations
    let mark_style = if is_cursor {
        text_style.remove_modifier(Modifier::CROSSED_OUT | Modifier::UNDERLINED)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(mark, mark_style),
        Span::styled(number, Style::default().fg(theme.number)),
        Span::styled(text, text_style),
    ])
}

/// The text input row, with a block cursor over the grapheme under it
fn input_line<'a>(app: &App, one_based: usize, total: usize) -> Line<'a> {
    let theme = &app.theme;
    let (before, after) = app.edit.split();
    let mut rest = after.chars();
    let under = rest.next().map_or(" ".to_string(), |c| c.to_string());

    Line::from(vec![
        Span::styled(CURSOR_MARK, Style::default().fg(theme.highlight)),
        Span::styled(line_number(one_based, total), Style::default().fg(theme.number)),
        Span::raw(before.to_string()),
        Span::styled(under, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(rest.as_str().to_string()),
    ])
}

pub fn render_todo_list(frame: &mut Frame, app: &App, area: Rect) {
    let (lines, focus_row) = build_lines(app, area.width as usize);
    let height = area.height as usize;
    let scroll = if height > 0 && focus_row >= height {
        focus_row + 1 - height
    } else {
        0
    };
    let paragraph = Paragraph::new(lines).scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);
}
