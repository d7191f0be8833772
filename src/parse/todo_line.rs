use std::sync::LazyLock;

use regex::Regex;

use crate::model::todo::TodoItem;

/// `<indent>- [<mark>] <text>` where mark is one of ` `, `x`, `X`.
///
/// Indent is `[\t\n\f\r ]` only. A line indented with NBSP or a vertical
/// tab stays prose.
static TODO_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\t\n\f\r ]*)- \[([ xX])\] (.*)$").expect("checklist pattern compiles")
});

/// Whether a raw line is a checklist item
pub fn is_todo_line(line: &str) -> bool {
    TODO_LINE_RE.is_match(line)
}

/// Parse a raw line into a todo item. Returns `None` for ordinary content.
pub fn parse_todo_line(line: &str) -> Option<TodoItem> {
    let caps = TODO_LINE_RE.captures(line)?;
    Some(TodoItem {
        text: caps[3].to_string(),
        checked: &caps[2] != " ",
    })
}

/// Leading whitespace of a checklist line, or `None` if the line doesn't match
pub fn todo_line_indent(line: &str) -> Option<&str> {
    TODO_LINE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Encode a todo item as an unindented checklist line
pub fn format_todo_line(item: &TodoItem) -> String {
    format_todo_line_with_indent("", item)
}

/// Encode a todo item, keeping the indentation of the line it replaces
pub fn format_todo_line_with_indent(indent: &str, item: &TodoItem) -> String {
    let mark = if item.checked { 'x' } else { ' ' };
    format!("{}- [{}] {}", indent, mark, item.text)
}

/// Split file content into raw lines on `\n` only.
///
/// A trailing newline yields a final empty line, and `\r` stays part of the
/// line content, so `join_lines(split_lines(s)) == s` for every input.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split('\n').map(|l| l.to_string()).collect()
}

/// Inverse of [`split_lines`]
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unchecked_and_checked() {
        let item = parse_todo_line("- [ ] Buy milk").unwrap();
        assert_eq!(item.text, "Buy milk");
        assert!(!item.checked);

        let item = parse_todo_line("- [x] Done thing").unwrap();
        assert_eq!(item.text, "Done thing");
        assert!(item.checked);

        let item = parse_todo_line("- [X] Also done").unwrap();
        assert!(item.checked);
    }

    #[test]
    fn parses_indented_line() {
        let item = parse_todo_line("  - [ ] Indented").unwrap();
        assert_eq!(item.text, "Indented");
        assert_eq!(todo_line_indent("  - [ ] Indented"), Some("  "));
        assert_eq!(todo_line_indent("\t- [x] Tab"), Some("\t"));
    }

    #[test]
    fn empty_text_after_marker_is_a_todo() {
        let item = parse_todo_line("- [ ] ").unwrap();
        assert_eq!(item.text, "");
    }

    #[test]
    fn rejects_non_checklist_lines() {
        for line in [
            "Not a todo",
            "## Heading",
            "- Regular list item",
            "- [ ]",
            "- [y] Unknown mark",
            "* [ ] Star bullet",
            "-[ ] Missing space",
            "\u{A0}- [ ] No-break space indent",
            "\u{B}- [ ] Vertical tab indent",
            "\u{2003}- [ ] Em space indent",
            "",
        ] {
            assert!(parse_todo_line(line).is_none(), "{:?} should not match", line);
            assert!(!is_todo_line(line));
        }
    }

    #[test]
    fn carriage_return_stays_in_text() {
        let item = parse_todo_line("- [ ] Windows line\r").unwrap();
        assert_eq!(item.text, "Windows line\r");
    }

    #[test]
    fn format_lines() {
        let mut item = TodoItem::new("Buy milk");
        assert_eq!(format_todo_line(&item), "- [ ] Buy milk");
        item.checked = true;
        assert_eq!(format_todo_line(&item), "- [x] Buy milk");
        assert_eq!(
            format_todo_line_with_indent("    ", &item),
            "    - [x] Buy milk"
        );
    }

    #[test]
    fn split_and_join_are_inverse() {
        for content in ["", "\n", "a", "a\n", "a\n\nb\r\n", "# T\n- [ ] x\n\n"] {
            assert_eq!(join_lines(&split_lines(content)), content);
        }
        assert_eq!(split_lines("a\n"), vec!["a".to_string(), String::new()]);
    }
}
