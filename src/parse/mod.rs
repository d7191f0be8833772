pub mod todo_line;

pub use todo_line::{
    format_todo_line, format_todo_line_with_indent, is_todo_line, join_lines, parse_todo_line,
    split_lines, todo_line_indent,
};
