//! Escape-sequence rendering of the edit line.
//!
//! Rendering is a pure function of a [`Frame`] (plus, for multi-line mode,
//! the rows drawn last time), producing the bytes to send to the terminal.
//!
//! Sequences used:
//! - `\r`: carriage return to column 0
//! - `ESC [0K`: erase to end of line
//! - `ESC [nC`: cursor forward n columns
//! - `ESC [nA` / `ESC [nB`: cursor up / down n rows

use unicode_width::UnicodeWidthChar;

use super::hints::Hint;

/// Glyph drawn for every codepoint in mask mode.
pub const MASK_GLYPH: char = '*';

/// Everything needed to draw one refresh.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub prompt: &'a str,
    pub chars: &'a [char],
    pub cursor: usize,
    pub columns: usize,
    pub mask: bool,
    pub hint: Option<&'a Hint>,
}

/// What multi-line mode remembers between refreshes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderState {
    /// Column offset of the cursor (prompt excluded) at the last refresh
    old_cursor: usize,
    /// Most rows the edit area has occupied during this read
    max_rows: usize,
}

impl RenderState {
    pub fn max_rows(&self) -> usize {
        self.max_rows
    }
}

pub(crate) fn glyph_width(ch: char, mask: bool) -> usize {
    if mask {
        1
    } else {
        ch.width().unwrap_or(0)
    }
}

pub(crate) fn glyph(ch: char, mask: bool) -> char {
    if mask {
        MASK_GLYPH
    } else {
        ch
    }
}

/// Display width of the prompt.
pub fn prompt_width(prompt: &str) -> usize {
    prompt.chars().map(|ch| glyph_width(ch, false)).sum()
}

fn push_glyphs(chars: &[char], mask: bool, out: &mut String) {
    out.extend(chars.iter().map(|&ch| glyph(ch, mask)));
}

fn push_hint(frame: &Frame<'_>, used: usize, out: &mut String) {
    if let Some(hint) = frame.hint {
        if used < frame.columns {
            hint.write_styled(frame.columns - used, out);
        }
    }
}

/// Draw the line on a single row, scrolling horizontally so the cursor
/// stays visible.
pub fn single_line(frame: &Frame<'_>) -> String {
    let cols = frame.columns.max(1);
    let plen = prompt_width(frame.prompt);
    let widths: Vec<usize> = frame
        .chars
        .iter()
        .map(|&ch| glyph_width(ch, frame.mask))
        .collect();

    let mut start = 0;
    let mut cursor_w: usize = widths[..frame.cursor].iter().sum();
    while plen + cursor_w >= cols && start < frame.cursor {
        cursor_w -= widths[start];
        start += 1;
    }

    let mut end = frame.chars.len();
    let mut content_w: usize = widths[start..end].iter().sum();
    while plen + content_w > cols && end > frame.cursor {
        end -= 1;
        content_w -= widths[end];
    }

    let mut out = String::from("\r");
    out.push_str(frame.prompt);
    push_glyphs(&frame.chars[start..end], frame.mask, &mut out);
    push_hint(frame, plen + content_w, &mut out);
    out.push_str("\x1b[0K");
    out.push('\r');
    if plen + cursor_w > 0 {
        out.push_str(&format!("\x1b[{}C", plen + cursor_w));
    }
    out
}

/// Draw the line wrapped over as many rows as it needs.
///
/// Every row used so far is cleared before rewriting so a shrinking line
/// leaves no stale glyphs behind.
pub fn multi_line(frame: &Frame<'_>, state: &mut RenderState) -> String {
    let cols = frame.columns.max(1);
    let plen = prompt_width(frame.prompt);
    let content_w: usize = frame
        .chars
        .iter()
        .map(|&ch| glyph_width(ch, frame.mask))
        .sum();
    let cursor_w: usize = frame.chars[..frame.cursor]
        .iter()
        .map(|&ch| glyph_width(ch, frame.mask))
        .sum();

    let mut rows = ((plen + content_w + cols - 1) / cols).max(1);
    let old_row = (plen + state.old_cursor + cols) / cols;
    let old_rows = state.max_rows;
    state.max_rows = state.max_rows.max(rows);

    let mut out = String::new();

    // Go to the last row drawn, then clear upwards
    if old_rows > old_row {
        out.push_str(&format!("\x1b[{}B", old_rows - old_row));
    }
    for _ in 1..old_rows {
        out.push_str("\r\x1b[0K\x1b[1A");
    }
    out.push_str("\r\x1b[0K");

    out.push_str(frame.prompt);
    push_glyphs(frame.chars, frame.mask, &mut out);
    push_hint(frame, plen + content_w, &mut out);

    // Cursor at the very end on a row boundary needs a fresh row
    if frame.cursor > 0 && frame.cursor == frame.chars.len() && (plen + cursor_w) % cols == 0 {
        out.push_str("\n\r");
        rows += 1;
        state.max_rows = state.max_rows.max(rows);
    }

    let cursor_row = (plen + cursor_w + cols) / cols;
    if rows > cursor_row {
        out.push_str(&format!("\x1b[{}A", rows - cursor_row));
    }

    let col = (plen + cursor_w) % cols;
    if col > 0 {
        out.push_str(&format!("\r\x1b[{}C", col));
    } else {
        out.push('\r');
    }

    state.old_cursor = cursor_w;
    out
}
