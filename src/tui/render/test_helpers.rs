use std::path::PathBuf;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::model::{TodoFile, UiConfig};
use crate::ops::navigation::NavStack;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 16;

/// Render the whole app into an in-memory buffer and return plain text.
pub fn render_app(app: &App, w: u16, h: u16) -> String {
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| super::render(frame, app)).unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An App over in-memory markdown with a fixed header icon
pub fn app_with(md: &str) -> App {
    let file = TodoFile::from_content(PathBuf::from("/tmp/todomd-test/weekend.md"), md);
    let mut app = App::new(file, NavStack::new(), UiConfig::default());
    app.header_icon = "◆";
    app
}

pub const WEEKEND_MD: &str = "\
# Weekend Tasks

Some notes about this weekend.

- [x] Clean the kitchen
- [ ] Buy groceries
- [ ] todo:garden.md

## Later

- [ ] Fix the fence
";
