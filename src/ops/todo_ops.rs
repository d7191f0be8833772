use crate::model::todo::TodoItem;
use crate::model::todo_file::TodoFile;
use crate::parse::{
    format_todo_line, format_todo_line_with_indent, parse_todo_line, todo_line_indent,
};

// ---------------------------------------------------------------------------
// In-place edits (line count unchanged, index table untouched)
// ---------------------------------------------------------------------------

/// Rewrite the line behind logical todo `idx` with `f` applied to its item.
/// The line's indentation is kept. No-op if the line no longer parses.
fn rewrite_todo(file: &mut TodoFile, idx: usize, f: impl FnOnce(&mut TodoItem)) {
    let line_idx = file.todo_indices[idx];
    let line = &file.lines[line_idx];
    let (Some(mut item), Some(indent)) = (parse_todo_line(line), todo_line_indent(line)) else {
        return;
    };
    let indent = indent.to_string();
    f(&mut item);
    file.lines[line_idx] = format_todo_line_with_indent(&indent, &item);
}

/// Replace the text of a todo, keeping its checked state
pub fn set_todo_text(file: &mut TodoFile, idx: usize, text: &str) {
    rewrite_todo(file, idx, |item| item.text = text.to_string());
}

/// Flip the checked state of a todo
pub fn toggle_todo(file: &mut TodoFile, idx: usize) {
    rewrite_todo(file, idx, |item| item.checked = !item.checked);
}

/// Exchange the contents of the lines behind logical todos `a` and `b`
pub fn swap_todos(file: &mut TodoFile, a: usize, b: usize) {
    let line_a = file.todo_indices[a];
    let line_b = file.todo_indices[b];
    file.lines.swap(line_a, line_b);
}

// ---------------------------------------------------------------------------
// Structural edits (index table rebuilt from scratch)
// ---------------------------------------------------------------------------

/// Remove the line behind logical todo `idx`
pub fn delete_todo(file: &mut TodoFile, idx: usize) {
    let line_idx = file.todo_indices[idx];
    file.lines.remove(line_idx);
    file.rebuild_indices();
}

/// Insert a new checklist line and return its logical position.
///
/// With `after = Some(i)` (and at least one todo) the line goes right after
/// todo `i`, so the new item lands at `i + 1`. With `None`, or when the file
/// has no todos, it is appended at the end of the file, ahead of the empty
/// line left by a trailing newline.
pub fn insert_todo(file: &mut TodoFile, after: Option<usize>, item: &TodoItem) -> usize {
    let new_line = format_todo_line(item);

    let insert_at = match after {
        Some(i) if file.todo_count() > 0 => file.todo_indices[i] + 1,
        _ => {
            let mut at = file.lines.len();
            if at > 0 && file.lines[at - 1].is_empty() {
                at -= 1;
            }
            at
        }
    };

    file.lines.insert(insert_at, new_line);
    file.rebuild_indices();

    file.todo_indices
        .iter()
        .position(|&line_idx| line_idx == insert_at)
        .unwrap_or(0)
}
