//! Codepoint buffer with a cursor.
//!
//! Pure editing operations with no terminal access. Every method keeps
//! `0 <= cursor <= len` and returns whether anything changed, so the caller
//! can skip redundant redraws.

use crate::error::Result;

/// The line under edit, stored as codepoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    chars: Vec<char>,
    cursor: usize,
}

/// Words are runs of anything but the space character; a Tab is part of
/// a word.
fn is_word_char(ch: char) -> bool {
    ch != ' '
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    /// Replace the whole contents, cursor at end.
    pub fn set(&mut self, chars: &[char]) {
        self.chars.clear();
        self.chars.extend_from_slice(chars);
        self.cursor = self.chars.len();
    }

    /// Insert at the cursor and advance it.
    pub fn insert(&mut self, ch: char) -> Result<()> {
        self.chars.try_reserve(1)?;
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
        Ok(())
    }

    /// Delete the codepoint under the cursor.
    pub fn delete_at(&mut self) -> bool {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
            true
        } else {
            false
        }
    }

    /// Delete the codepoint before the cursor.
    pub fn delete_before(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn move_home(&mut self) -> bool {
        let moved = self.cursor != 0;
        self.cursor = 0;
        moved
    }

    pub fn move_end(&mut self) -> bool {
        let moved = self.cursor != self.chars.len();
        self.cursor = self.chars.len();
        moved
    }

    /// Start of the word before the cursor, skipping whitespace first.
    fn prev_word_start(&self) -> usize {
        let mut pos = self.cursor;
        while pos > 0 && !is_word_char(self.chars[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && is_word_char(self.chars[pos - 1]) {
            pos -= 1;
        }
        pos
    }

    /// One past the end of the word at or after the cursor.
    fn next_word_end(&self) -> usize {
        let len = self.chars.len();
        let mut pos = self.cursor;
        while pos < len && !is_word_char(self.chars[pos]) {
            pos += 1;
        }
        while pos < len && is_word_char(self.chars[pos]) {
            pos += 1;
        }
        pos
    }

    pub fn move_word_start(&mut self) -> bool {
        let target = self.prev_word_start();
        let moved = target != self.cursor;
        self.cursor = target;
        moved
    }

    pub fn move_word_end(&mut self) -> bool {
        let target = self.next_word_end();
        let moved = target != self.cursor;
        self.cursor = target;
        moved
    }

    /// Delete from the cursor to the end of the line (Ctrl-K).
    pub fn kill_line_forward(&mut self) -> bool {
        if self.cursor < self.chars.len() {
            self.chars.truncate(self.cursor);
            true
        } else {
            false
        }
    }

    /// Delete from the start of the line to the cursor (Ctrl-U).
    pub fn kill_line_backward(&mut self) -> bool {
        if self.cursor > 0 {
            self.chars.drain(..self.cursor);
            self.cursor = 0;
            true
        } else {
            false
        }
    }

    /// Delete the word before the cursor (Ctrl-W).
    pub fn delete_prev_word(&mut self) -> bool {
        let start = self.prev_word_start();
        if start == self.cursor {
            return false;
        }
        self.chars.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    /// Transpose the two codepoints before the cursor and step right
    /// (Ctrl-T). At the end of the line the cursor stays put.
    pub fn swap_prev(&mut self) -> bool {
        if self.cursor < 2 {
            return false;
        }
        self.chars.swap(self.cursor - 2, self.cursor - 1);
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
        true
    }
}
