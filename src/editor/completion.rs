//! Completion provider and the completion ring.
//!
//! Pressing Tab asks the [`Completer`] for full-line candidates. The
//! [`CompletionRing`] then tracks which candidate is on display while the
//! real buffer stays untouched until one is accepted.

/// Supplies full-line completion candidates for the current buffer.
pub trait Completer {
    fn complete(&self, line: &str) -> Vec<String>;

    /// Whether Tab should start completion at all. When false, Tab is
    /// inserted like any other character.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Completion is not configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCompletions;

impl Completer for NoCompletions {
    fn complete(&self, _line: &str) -> Vec<String> {
        Vec::new()
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

impl<F> Completer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn complete(&self, line: &str) -> Vec<String> {
        self(line)
    }
}

/// Candidates being browsed, with the index of the one on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRing {
    candidates: Vec<Vec<char>>,
    index: usize,
}

impl CompletionRing {
    /// Build a ring showing the first candidate, or `None` when there is
    /// nothing to browse.
    pub fn new(candidates: Vec<String>) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }
        Some(Self {
            candidates: candidates.iter().map(|c| c.chars().collect()).collect(),
            index: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The candidate on display.
    pub fn current(&self) -> &[char] {
        &self.candidates[self.index]
    }

    /// Step to the next candidate, wrapping around.
    pub fn advance(&mut self) -> &[char] {
        self.index = (self.index + 1) % self.candidates.len();
        tracing::trace!(index = self.index, "completion ring advanced");
        self.current()
    }
}
