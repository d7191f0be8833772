use std::path::PathBuf;

use crate::model::todo::TodoItem;
use crate::parse::{is_todo_line, join_lines, parse_todo_line, split_lines};

/// A markdown file held as raw lines plus the positions of its checklist items.
///
/// `lines` is the source of truth. `todo_indices` is a projection of it: one
/// ascending line index per checklist line, recomputed whenever the line count
/// changes. Logical todo `i` lives at `lines[todo_indices[i]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoFile {
    pub path: PathBuf,
    pub(crate) lines: Vec<String>,
    pub(crate) todo_indices: Vec<usize>,
}

impl TodoFile {
    /// Build from already-read file content
    pub fn from_content(path: impl Into<PathBuf>, content: &str) -> Self {
        let mut file = TodoFile {
            path: path.into(),
            lines: split_lines(content),
            todo_indices: Vec::new(),
        };
        file.rebuild_indices();
        file
    }

    /// Raw lines, including non-todo content
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line index of every checklist item, ascending
    pub fn todo_indices(&self) -> &[usize] {
        &self.todo_indices
    }

    /// Number of checklist items
    pub fn todo_count(&self) -> usize {
        self.todo_indices.len()
    }

    /// The item at logical position `idx`.
    ///
    /// A line that no longer parses reads as an empty unchecked item.
    pub fn get_todo(&self, idx: usize) -> TodoItem {
        let line = &self.lines[self.todo_indices[idx]];
        parse_todo_line(line).unwrap_or_default()
    }

    /// All items in order
    pub fn todos(&self) -> Vec<TodoItem> {
        (0..self.todo_count()).map(|i| self.get_todo(i)).collect()
    }

    /// Serialized file content
    pub fn content(&self) -> String {
        join_lines(&self.lines)
    }

    /// Rescan every line against the checklist pattern
    pub(crate) fn rebuild_indices(&mut self) {
        self.todo_indices = self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| is_todo_line(line))
            .map(|(i, _)| i)
            .collect();
    }
}
