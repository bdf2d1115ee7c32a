//! Minimal single-line text field for form inputs.
//!
//! Supports the subset of editing operations the onboarding forms need:
//! char insert, backspace/delete, horizontal motion, paste. The cursor is
//! tracked in char units; byte indices are derived at the edit site.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Default)]
pub struct TextField {
    text: String,
    /// Cursor position in char units, 0..=char_len.
    cursor: usize,
}

impl TextField {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replaces the contents, moving the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    /// Inserts a string at the cursor. Newlines are flattened to spaces
    /// since fields are single-line.
    pub fn insert_str(&mut self, s: &str) {
        let s = s.replace(['\n', '\r'], " ");
        if s.is_empty() {
            return;
        }
        let byte_idx = self.byte_index(self.cursor);
        self.text.insert_str(byte_idx, &s);
        self.cursor += s.chars().count();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    fn delete_prev_char(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = self.byte_index(self.cursor - 1);
        let end = self.byte_index(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    fn delete_next_char(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }

    /// Handles a key press. Returns true if the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if matches!(key.kind, KeyEventKind::Release) {
            return false;
        }

        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_char(ch);
                true
            }
            KeyCode::Backspace => self.delete_prev_char(),
            KeyCode::Delete => self.delete_next_char(),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                false
            }
            _ => false,
        }
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, col: usize) -> usize {
        if col == 0 {
            return 0;
        }
        self.text
            .char_indices()
            .nth(col)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut field = TextField::default();
        for ch in "ada".chars() {
            assert!(field.input(key(KeyCode::Char(ch))));
        }
        assert_eq!(field.text(), "ada");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn backspace_and_delete_edit_around_cursor() {
        let mut field = TextField::new("abc");
        assert!(field.input(key(KeyCode::Backspace)));
        assert_eq!(field.text(), "ab");

        field.input(key(KeyCode::Home));
        assert!(field.input(key(KeyCode::Delete)));
        assert_eq!(field.text(), "b");
    }

    #[test]
    fn motion_does_not_report_a_change() {
        let mut field = TextField::new("abc");
        assert!(!field.input(key(KeyCode::Left)));
        assert!(!field.input(key(KeyCode::Home)));
        assert!(!field.input(key(KeyCode::End)));
        assert_eq!(field.text(), "abc");
    }

    #[test]
    fn insert_in_the_middle_respects_char_boundaries() {
        let mut field = TextField::new("país");
        field.input(key(KeyCode::Left));
        field.input(key(KeyCode::Left));
        field.insert_char('x');
        assert_eq!(field.text(), "paxís");
    }

    #[test]
    fn paste_flattens_newlines() {
        let mut field = TextField::default();
        field.insert_str("one\ntwo");
        assert_eq!(field.text(), "one two");
    }

    #[test]
    fn control_chars_are_ignored() {
        let mut field = TextField::new("abc");
        assert!(!field.input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert_eq!(field.text(), "abc");
    }
}
