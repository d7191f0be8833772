use std::path::{Component, Path, PathBuf};

use crate::io::todo_io::{TodoFileError, load_todo_file};
use crate::model::todo_file::TodoFile;

/// Maximum number of files that can be stacked behind the current one
pub const MAX_NAV_DEPTH: usize = 50;

/// Error type for following linked todos
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("cannot link to current file")]
    SelfLink { path: PathBuf },
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("maximum navigation depth ({max}) reached")]
    MaxDepthExceeded { max: usize },
    #[error(transparent)]
    Load(#[from] TodoFileError),
}

/// Where to return to: the file that was left and its cursor at the time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub path: PathBuf,
    pub cursor: usize,
}

/// Bounded back-navigation stack
#[derive(Debug, Clone, Default)]
pub struct NavStack {
    entries: Vec<NavEntry>,
}

impl NavStack {
    pub fn new() -> Self {
        NavStack::default()
    }

    /// Seed the stack from prior files, oldest first, each at cursor 0.
    /// Only the last [`MAX_NAV_DEPTH`] paths are kept.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut entries: Vec<NavEntry> = paths
            .into_iter()
            .map(|p| NavEntry {
                path: p.into(),
                cursor: 0,
            })
            .collect();
        let excess = entries.len().saturating_sub(MAX_NAV_DEPTH);
        entries.drain(..excess);
        NavStack { entries }
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Push an entry, refusing once the stack is full
    pub fn push(&mut self, entry: NavEntry) -> Result<(), NavError> {
        if self.entries.len() >= MAX_NAV_DEPTH {
            return Err(NavError::MaxDepthExceeded { max: MAX_NAV_DEPTH });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Pop the most recent entry. `None` means there is nowhere to go back to.
    pub fn pop(&mut self) -> Option<NavEntry> {
        self.entries.pop()
    }

    /// Validate a link from `current_path` and push the departure point.
    ///
    /// Returns the resolved target. On error nothing is pushed.
    pub fn begin_navigation(
        &mut self,
        current_path: &Path,
        cursor: usize,
        raw_target: &str,
    ) -> Result<PathBuf, NavError> {
        let target = resolve_link_target(current_path, raw_target);

        if absolute_clean(&target) == absolute_clean(current_path) {
            return Err(NavError::SelfLink { path: target });
        }
        if !target.exists() {
            return Err(NavError::NotFound { path: target });
        }
        self.push(NavEntry {
            path: current_path.to_path_buf(),
            cursor,
        })?;
        Ok(target)
    }

    /// Undo the push made by [`begin_navigation`](Self::begin_navigation)
    /// after the target failed to load.
    pub fn abort_navigation(&mut self) {
        self.entries.pop();
    }
}

/// Follow a linked todo synchronously: validate, push, load.
///
/// If loading fails the pushed entry is removed again, so a failed
/// navigation never changes the stack.
pub fn navigate_to_link(
    nav: &mut NavStack,
    current: &TodoFile,
    cursor: usize,
    raw_target: &str,
) -> Result<TodoFile, NavError> {
    let target = nav.begin_navigation(&current.path, cursor, raw_target)?;
    match load_todo_file(&target) {
        Ok(file) => Ok(file),
        Err(e) => {
            nav.abort_navigation();
            Err(e.into())
        }
    }
}

/// Clamp a restored cursor to a reloaded file with `count` todos
pub fn clamp_cursor(cursor: usize, count: usize) -> usize {
    if count == 0 { 0 } else { cursor.min(count - 1) }
}

/// Resolve a link target relative to the directory of the current file.
/// Absolute targets are only cleaned.
pub fn resolve_link_target(current_path: &Path, raw_target: &str) -> PathBuf {
    let target = Path::new(raw_target);
    if target.is_absolute() {
        return clean_path(target);
    }
    let dir = current_path.parent().unwrap_or(Path::new(""));
    clean_path(&dir.join(target))
}

/// Lexically collapse `.` and `..` segments.
///
/// `..` at the root is dropped; leading `..` in a relative path is kept.
/// An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        PathBuf::from(".")
    } else {
        out.iter().collect()
    }
}

/// Absolute, cleaned form of a path, used for self-link comparison
fn absolute_clean(path: &Path) -> PathBuf {
    match std::path::absolute(path) {
        Ok(abs) => clean_path(&abs),
        Err(_) => clean_path(path),
    }
}
