use crate::util::unicode::{next_boundary, prev_boundary, word_start_after, word_start_before};

/// Maximum number of characters accepted in a todo text input
pub const INPUT_CHAR_LIMIT: usize = 500;

/// Single-line text input with a grapheme-aware byte cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
    cursor: usize,
}

impl EditBuffer {
    /// Start editing `text` with the cursor at the end
    pub fn new(text: &str) -> Self {
        EditBuffer {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text before and after the cursor
    pub fn split(&self) -> (&str, &str) {
        self.text.split_at(self.cursor)
    }

    pub fn insert_char(&mut self, c: char) {
        if self.text.chars().count() >= INPUT_CHAR_LIMIT {
            return;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text; line breaks become spaces
    pub fn insert_str(&mut self, s: &str) {
        let room = INPUT_CHAR_LIMIT.saturating_sub(self.text.chars().count());
        let clean: String = s
            .replace("\r\n", " ")
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .take(room)
            .collect();
        self.text.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = prev_boundary(&self.text, self.cursor) {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = next_boundary(&self.text, self.cursor) {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    pub fn delete_word_before(&mut self) {
        let start = word_start_before(&self.text, self.cursor);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    /// Delete everything left of the cursor
    pub fn clear_to_start(&mut self) {
        self.text.replace_range(..self.cursor, "");
        self.cursor = 0;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = prev_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = next_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn word_left(&mut self) {
        self.cursor = word_start_before(&self.text, self.cursor);
    }

    pub fn word_right(&mut self) {
        self.cursor = word_start_after(&self.text, self.cursor);
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }
}
