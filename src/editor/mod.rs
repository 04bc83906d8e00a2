//! Edit buffer engine.
//!
//! [`Editor`] owns the line under edit, its cursor and the render state for
//! one read. Every mutating operation redraws the line afterwards through
//! the [`Terminal`]; operations that change nothing skip the redraw.
//!
//! # Architecture
//!
//! - `buffer`: [`LineBuffer`], the codepoint vector and cursor (pure)
//! - `render`: escape-sequence output for single- and multi-line modes
//! - `hints`: [`Hinter`] provider for display-only hints
//! - `completion`: [`Completer`] provider and the [`CompletionRing`]

pub mod buffer;
pub mod completion;
pub mod hints;
pub mod render;

pub use buffer::LineBuffer;
pub use completion::{Completer, CompletionRing, NoCompletions};
pub use hints::{Hint, Hinter, NoHints};
pub use render::{Frame, RenderState};

use crate::codec;
use crate::error::Result;
use crate::terminal::{Terminal, CLEAR_SCREEN};

/// Display options for an edit session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorOptions {
    /// Wrap long lines over several rows instead of scrolling horizontally
    pub multiline: bool,
    /// Draw a mask glyph instead of the typed text (passwords)
    pub mask: bool,
}

/// Which text a redraw shows.
#[derive(Clone, Copy)]
enum Source<'c> {
    /// The real buffer
    Buffer,
    /// A completion candidate on display; the buffer is untouched
    Candidate(&'c [char]),
}

/// Line buffer plus rendering for a single read.
pub struct Editor<'a, T: Terminal> {
    term: &'a mut T,
    prompt: &'a str,
    buffer: LineBuffer,
    options: EditorOptions,
    hinter: &'a dyn Hinter,
    render: RenderState,
}

impl<'a, T: Terminal> Editor<'a, T> {
    pub fn new(
        term: &'a mut T,
        prompt: &'a str,
        options: EditorOptions,
        hinter: &'a dyn Hinter,
    ) -> Self {
        Self {
            term,
            prompt,
            buffer: LineBuffer::new(),
            options,
            hinter,
            render: RenderState::default(),
        }
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn line(&self) -> String {
        self.buffer.as_string()
    }

    /// Read the next input byte from the terminal.
    pub fn read_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.term.read_byte()?)
    }

    /// Print the prompt before the first keypress.
    pub fn start(&mut self) -> Result<()> {
        self.term.write_all(self.prompt.as_bytes())?;
        Ok(())
    }

    /// Redraw the buffer with hints.
    pub fn refresh(&mut self) -> Result<()> {
        self.draw(Source::Buffer, true)
    }

    /// Show a completion candidate without touching the buffer.
    pub fn show_candidate(&mut self, candidate: &[char]) -> Result<()> {
        self.draw(Source::Candidate(candidate), false)
    }

    /// Final redraw before the line is returned: cursor to the end in
    /// multi-line mode and hints removed.
    pub fn finish(&mut self) -> Result<()> {
        if self.options.multiline {
            self.buffer.move_end();
        }
        self.draw(Source::Buffer, false)
    }

    fn refresh_if(&mut self, changed: bool) -> Result<()> {
        if changed {
            self.refresh()
        } else {
            Ok(())
        }
    }

    pub fn insert(&mut self, ch: char) -> Result<()> {
        self.buffer.insert(ch)?;
        if self.can_append() {
            let glyph = render::glyph(ch, self.options.mask);
            self.term.write_all(&codec::encode(glyph))?;
            return Ok(());
        }
        self.refresh()
    }

    /// A codepoint typed at the end of a single-row line with no hints
    /// only needs its own glyph written.
    fn can_append(&mut self) -> bool {
        if self.options.multiline
            || self.hinter.is_enabled()
            || self.buffer.cursor() != self.buffer.len()
        {
            return false;
        }
        let width: usize = render::prompt_width(self.prompt)
            + self
                .buffer
                .chars()
                .iter()
                .map(|&ch| render::glyph_width(ch, self.options.mask))
                .sum::<usize>();
        width < self.term.columns()
    }

    /// Replace the whole line, cursor at the end.
    pub fn set_line(&mut self, chars: &[char]) -> Result<()> {
        self.buffer.set(chars);
        self.refresh()
    }

    pub fn delete_at(&mut self) -> Result<()> {
        let changed = self.buffer.delete_at();
        self.refresh_if(changed)
    }

    pub fn delete_before(&mut self) -> Result<()> {
        let changed = self.buffer.delete_before();
        self.refresh_if(changed)
    }

    pub fn move_left(&mut self) -> Result<()> {
        let changed = self.buffer.move_left();
        self.refresh_if(changed)
    }

    pub fn move_right(&mut self) -> Result<()> {
        let changed = self.buffer.move_right();
        self.refresh_if(changed)
    }

    pub fn move_home(&mut self) -> Result<()> {
        let changed = self.buffer.move_home();
        self.refresh_if(changed)
    }

    pub fn move_end(&mut self) -> Result<()> {
        let changed = self.buffer.move_end();
        self.refresh_if(changed)
    }

    pub fn move_word_start(&mut self) -> Result<()> {
        let changed = self.buffer.move_word_start();
        self.refresh_if(changed)
    }

    pub fn move_word_end(&mut self) -> Result<()> {
        let changed = self.buffer.move_word_end();
        self.refresh_if(changed)
    }

    pub fn kill_line_forward(&mut self) -> Result<()> {
        let changed = self.buffer.kill_line_forward();
        self.refresh_if(changed)
    }

    pub fn kill_line_backward(&mut self) -> Result<()> {
        let changed = self.buffer.kill_line_backward();
        self.refresh_if(changed)
    }

    pub fn delete_prev_word(&mut self) -> Result<()> {
        let changed = self.buffer.delete_prev_word();
        self.refresh_if(changed)
    }

    pub fn swap_prev(&mut self) -> Result<()> {
        let changed = self.buffer.swap_prev();
        self.refresh_if(changed)
    }

    /// Clear the screen and redraw the line at the top.
    pub fn clear_screen(&mut self) -> Result<()> {
        self.term.write_all(CLEAR_SCREEN)?;
        self.render = RenderState::default();
        self.refresh()
    }

    fn draw(&mut self, source: Source<'_>, with_hints: bool) -> Result<()> {
        let Self {
            term,
            prompt,
            buffer,
            options,
            hinter,
            render,
        } = self;

        let (chars, cursor) = match source {
            Source::Buffer => (buffer.chars(), buffer.cursor()),
            Source::Candidate(candidate) => (candidate, candidate.len()),
        };
        let hint = if with_hints {
            hinter.hint(&chars.iter().collect::<String>())
        } else {
            None
        };

        let frame = Frame {
            prompt: *prompt,
            chars,
            cursor,
            columns: term.columns(),
            mask: options.mask,
            hint: hint.as_ref(),
        };
        let out = if options.multiline {
            render::multi_line(&frame, render)
        } else {
            render::single_line(&frame)
        };
        term.write_all(out.as_bytes())?;
        Ok(())
    }
}
