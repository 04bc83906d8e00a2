//! Hint provider.
//!
//! A hint is display-only text drawn to the right of the buffer. It is
//! never part of the committed line.

/// Hint text plus its styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub text: String,
    /// SGR color code (e.g. 35 for magenta); `None` keeps the default color
    pub color: Option<u8>,
    pub bold: bool,
}

impl Hint {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    pub fn color(mut self, color: u8) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Append the styled hint to `out`, limited to `max_cols` codepoints.
    pub(crate) fn write_styled(&self, max_cols: usize, out: &mut String) {
        let text: String = self.text.chars().take(max_cols).collect();
        if text.is_empty() {
            return;
        }
        if self.bold {
            out.push_str("\x1b[1m");
        }
        if let Some(color) = self.color {
            out.push_str(&format!("\x1b[{}m", color));
        }
        out.push_str(&text);
        out.push_str("\x1b[0m");
    }
}

/// Supplies hints for the current buffer contents.
pub trait Hinter {
    fn hint(&self, line: &str) -> Option<Hint>;

    /// Whether hints can ever be shown. When false the editor may append
    /// typed glyphs without redrawing the line.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// No hints are ever shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHints;

impl Hinter for NoHints {
    fn hint(&self, _line: &str) -> Option<Hint> {
        None
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

impl<F> Hinter for F
where
    F: Fn(&str) -> Option<Hint>,
{
    fn hint(&self, line: &str) -> Option<Hint> {
        self(line)
    }
}
