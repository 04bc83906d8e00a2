//! Session-scoped command history.
//!
//! Entries are stored oldest first. While a line is being edited, the
//! newest entry is a placeholder holding the in-progress text, and
//! [`History::navigate`] writes the live buffer back into the slot it is
//! leaving so edits survive browsing up and down.

use std::collections::VecDeque;

use crate::error::Result;

/// Default maximum number of entries kept.
pub const DEFAULT_MAX_LEN: usize = 100;

/// Direction of a history step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards older entries (Up / Ctrl-P)
    Prev,
    /// Towards newer entries (Down / Ctrl-N)
    Next,
}

/// Ordered history of codepoint lines with a navigation cursor.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Vec<char>>,
    max_len: usize,
    current: usize,
}

impl History {
    /// Create an empty history bounded to [`DEFAULT_MAX_LEN`] entries.
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_LEN)
    }

    /// Create an empty history bounded to `max_len` entries.
    ///
    /// A bound of zero is raised to one so the editing placeholder always
    /// has a slot.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_len: max_len.max(1),
            current: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Index of the entry navigation currently points at.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Entry at `index` (0 is the oldest).
    pub fn get(&self, index: usize) -> Option<&[char]> {
        self.entries.get(index).map(Vec::as_slice)
    }

    /// Iterate entries as strings, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|entry| entry.iter().collect())
    }

    /// Change the bound, evicting the oldest entries if needed.
    pub fn set_max_len(&mut self, max_len: usize) {
        self.max_len = max_len.max(1);
        while self.entries.len() > self.max_len {
            self.entries.pop_front();
        }
        self.clamp_current();
    }

    /// Append `entry` to the tail, evicting the oldest entry when the bound
    /// is exceeded. No deduplication is done.
    pub fn add(&mut self, entry: Vec<char>) -> Result<()> {
        self.entries.try_reserve(1)?;
        self.entries.push_back(entry);
        if self.entries.len() > self.max_len {
            self.entries.pop_front();
        }
        self.clamp_current();
        Ok(())
    }

    /// Remove and return the tail entry.
    pub fn pop(&mut self) -> Option<Vec<char>> {
        let entry = self.entries.pop_back();
        self.clamp_current();
        entry
    }

    /// Point navigation at the newest entry.
    pub fn reset_cursor(&mut self) {
        self.current = self.entries.len().saturating_sub(1);
    }

    /// Store `live` in the current slot, then step in `direction`.
    ///
    /// Returns the entry now pointed at, or `None` when already at the
    /// boundary (the live contents are still stored).
    pub fn navigate(&mut self, direction: Direction, live: &[char]) -> Option<&[char]> {
        let slot = self.entries.get_mut(self.current)?;
        slot.clear();
        slot.extend_from_slice(live);

        match direction {
            Direction::Prev if self.current > 0 => self.current -= 1,
            Direction::Next if self.current + 1 < self.entries.len() => self.current += 1,
            _ => return None,
        }
        self.get(self.current)
    }

    fn clamp_current(&mut self) {
        let last = self.entries.len().saturating_sub(1);
        if self.current > last {
            self.current = last;
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
