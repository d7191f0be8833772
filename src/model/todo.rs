/// Prefix marking a todo whose text points at another markdown file
pub const LINK_PREFIX: &str = "todo:";

/// A single checklist item, parsed from one line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoItem {
    /// Everything after the `] ` marker
    pub text: String,
    /// `[x]` or `[X]`
    pub checked: bool,
}

impl TodoItem {
    /// A new unchecked item
    pub fn new(text: impl Into<String>) -> Self {
        TodoItem {
            text: text.into(),
            checked: false,
        }
    }

    /// True when the text starts with `todo:` (case-sensitive)
    pub fn is_linked(&self) -> bool {
        self.text.starts_with(LINK_PREFIX)
    }

    /// The trimmed link target, or `None` when the item isn't linked or the
    /// target is empty.
    pub fn link_target(&self) -> Option<&str> {
        let target = self.text.strip_prefix(LINK_PREFIX)?.trim();
        if target.is_empty() { None } else { Some(target) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linked_detection() {
        let cases = [
            ("todo:/path/to/file.md", true),
            ("todo:work.md", true),
            ("todo: spaced.md", true),
            ("todo:", true),
            ("Regular item", false),
            ("TODO:uppercase", false),
            ("not a todo:link", false),
            ("", false),
        ];
        for (text, expected) in cases {
            assert_eq!(TodoItem::new(text).is_linked(), expected, "{:?}", text);
        }
    }

    #[test]
    fn link_target_is_trimmed() {
        let cases = [
            ("todo:/path/to/file.md", Some("/path/to/file.md")),
            ("todo:work.md", Some("work.md")),
            ("todo: spaced.md", Some("spaced.md")),
            ("todo:  extra-spaces.md  ", Some("extra-spaces.md")),
            ("todo:", None),
            ("todo:   ", None),
            ("Regular item", None),
            ("", None),
        ];
        for (text, expected) in cases {
            assert_eq!(TodoItem::new(text).link_target(), expected, "{:?}", text);
        }
    }

    #[test]
    fn empty_link_is_still_linked() {
        let item = TodoItem::new("todo:  ");
        assert!(item.is_linked());
        assert!(item.link_target().is_none());
    }
}
