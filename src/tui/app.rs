use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::seq::IndexedRandom;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::recovery::{RecoveryCategory, RecoveryEntry, log_recovery};
use crate::io::todo_io::{TodoFileError, load_todo_file, save_todo_file};
use crate::model::{TodoFile, UiConfig};
use crate::ops::navigation::{NavError, NavStack, clamp_cursor};

use super::edit_buffer::EditBuffer;
use super::input;
use super::render;
use super::theme::Theme;

/// Icons for the header; one is picked per session
pub const HEADER_ICONS: &[&str] = &[
    "◆", "◇", "●", "○", "■", "□", "▲", "△", "★", "☆", "✦", "※", "›", "»", "→", "•", "‣", "⌘",
    "⌬", "⌭", "⏚", "⎈", "⌖", "⌑", "⏏", "⏍", "☊", "⚀", "⚁", "⚂", "⚃", "⚄", "⚅", "☽", "☿", "♃",
    "♄", "♅", "⚶", "⚷",
];

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the list
    Navigate,
    /// Editing the text of the todo under the cursor
    Edit,
    /// Typing a new todo to insert after the cursor
    Create,
    /// Moving the todo under the cursor with j/k
    Rearrange,
}

/// Why a file is being loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    /// Following a link; a nav entry was pushed for it
    Forward,
    /// Returning to a popped entry with its saved cursor
    Back { cursor: usize },
}

/// Result of a background file load, delivered to the event loop
#[derive(Debug)]
pub struct LoadEvent {
    pub path: PathBuf,
    pub kind: LoadKind,
    pub result: Result<TodoFile, TodoFileError>,
}

/// Main application state
pub struct App {
    pub file: TodoFile,
    pub cursor: usize,
    pub mode: Mode,
    pub nav: NavStack,
    pub theme: Theme,
    pub ui: UiConfig,
    pub header_icon: &'static str,
    /// Text input for Edit and Create modes
    pub edit: EditBuffer,
    /// First `d` pressed; a second `d` deletes
    pub pending_delete: bool,
    /// Transient message shown until the next key press
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// Where failed saves are logged; `None` disables the recovery log
    pub recovery_dir: Option<PathBuf>,
    /// A background load is in flight
    pub loading: bool,
    load_tx: mpsc::Sender<LoadEvent>,
    load_rx: mpsc::Receiver<LoadEvent>,
}

impl App {
    pub fn new(file: TodoFile, nav: NavStack, ui: UiConfig) -> Self {
        let theme = Theme::from_config(&ui);
        let header_icon = HEADER_ICONS
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or("◆");
        let (load_tx, load_rx) = mpsc::channel();

        App {
            file,
            cursor: 0,
            mode: Mode::Navigate,
            nav,
            theme,
            ui,
            header_icon,
            edit: EditBuffer::default(),
            pending_delete: false,
            status_message: None,
            should_quit: false,
            recovery_dir: None,
            loading: false,
            load_tx,
            load_rx,
        }
    }

    pub fn todo_count(&self) -> usize {
        self.file.todo_count()
    }

    /// Write the current file, reporting failure in the status row
    pub fn save(&mut self) {
        if let Err(e) = save_todo_file(&self.file) {
            if let Some(dir) = &self.recovery_dir {
                log_recovery(
                    dir,
                    RecoveryEntry::new(RecoveryCategory::Write, "save failed")
                        .field("Target", self.file.path.display().to_string())
                        .field("Error", e.to_string())
                        .body(self.file.content()),
                );
            }
            self.status_message = Some(format!("Error saving: {}", e));
        }
    }

    pub fn set_error(&mut self, message: impl std::fmt::Display) {
        self.status_message = Some(format!("Error: {}", message));
    }

    /// Follow the link at the cursor. Validation errors are reported and
    /// leave the stack untouched; on success the load runs in the background.
    pub fn open_link(&mut self, raw_target: &str) {
        match self
            .nav
            .begin_navigation(&self.file.path, self.cursor, raw_target)
        {
            Ok(target) => self.request_load(target, LoadKind::Forward),
            Err(e) => self.set_error(e),
        }
    }

    /// Pop the back stack and reload that file, or quit if it is empty
    pub fn go_back(&mut self) {
        match self.nav.pop() {
            Some(entry) => self.request_load(
                entry.path,
                LoadKind::Back {
                    cursor: entry.cursor,
                },
            ),
            None => self.should_quit = true,
        }
    }

    /// Parse `path` on a worker thread; the result arrives via [`poll_loads`](Self::poll_loads)
    pub fn request_load(&mut self, path: PathBuf, kind: LoadKind) {
        self.loading = true;
        let tx = self.load_tx.clone();
        std::thread::spawn(move || {
            let result = load_todo_file(&path);
            let _ = tx.send(LoadEvent { path, kind, result });
        });
    }

    /// Apply any finished loads. Returns true if something was applied.
    pub fn poll_loads(&mut self) -> bool {
        let mut applied = false;
        while let Ok(event) = self.load_rx.try_recv() {
            self.handle_load(event);
            applied = true;
        }
        applied
    }

    /// Block until the in-flight load finishes or `timeout` passes
    pub fn wait_for_load(&mut self, timeout: Duration) -> bool {
        match self.load_rx.recv_timeout(timeout) {
            Ok(event) => {
                self.handle_load(event);
                true
            }
            Err(_) => false,
        }
    }

    pub fn handle_load(&mut self, event: LoadEvent) {
        self.loading = false;
        match event.result {
            Ok(file) => {
                self.file = file;
                self.cursor = match event.kind {
                    LoadKind::Forward => 0,
                    LoadKind::Back { cursor } => clamp_cursor(cursor, self.file.todo_count()),
                };
                self.mode = Mode::Navigate;
                self.pending_delete = false;
                self.status_message = None;
            }
            Err(e) => {
                if event.kind == LoadKind::Forward {
                    self.nav.abort_navigation();
                }
                if let Some(dir) = &self.recovery_dir {
                    log_recovery(
                        dir,
                        RecoveryEntry::new(RecoveryCategory::Load, "load failed")
                            .field("Target", event.path.display().to_string())
                            .field("Error", e.to_string()),
                    );
                }
                self.set_error(NavError::from(e));
            }
        }
    }

    /// File name without directory or extension, for the header
    pub fn file_stem(&self) -> String {
        file_stem(&self.file.path)
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Run the TUI on an already-loaded file
pub fn run(
    file: TodoFile,
    nav: NavStack,
    ui: UiConfig,
    recovery_dir: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(file, nav, ui);
    app.recovery_dir = recovery_dir;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        app.poll_loads();

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
