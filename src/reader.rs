//! Public entry point: [`LineReader`].
//!
//! Chooses how to read a line:
//! - stdin is not a tty: read a plain `\n`-terminated line (no prompt)
//! - `$TERM` is a known-unsupported terminal: print the prompt, read a
//!   cooked line
//! - otherwise: raw mode plus the byte-level dispatcher
//!
//! # Usage
//!
//! ```no_run
//! use rawline::{LineReader, ReadResult};
//!
//! let mut reader = LineReader::new();
//! loop {
//!     match reader.read_line("> ").unwrap() {
//!         ReadResult::Line(line) => {
//!             println!("got: {}", line);
//!             reader.add_history(&line).unwrap();
//!         }
//!         ReadResult::Interrupted | ReadResult::EndOfInput => break,
//!     }
//! }
//! ```

use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::editor::{Completer, Editor, EditorOptions, Hinter, NoCompletions, NoHints};
use crate::error::Result;
use crate::history::History;
use crate::terminal::{self, IoTerminal, RawMode, Terminal};

/// Result of a single line read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadResult {
    /// The user pressed Enter
    Line(String),
    /// The user pressed Ctrl-C
    Interrupted,
    /// The input closed, or Ctrl-D on an empty line
    EndOfInput,
}

impl ReadResult {
    /// The committed line, if any.
    pub fn line(self) -> Option<String> {
        match self {
            Self::Line(line) => Some(line),
            Self::Interrupted | Self::EndOfInput => None,
        }
    }
}

/// Interactive line reader with session history.
pub struct LineReader {
    history: History,
    options: EditorOptions,
    hinter: Box<dyn Hinter>,
    completer: Box<dyn Completer>,
}

impl LineReader {
    pub fn new() -> Self {
        Self {
            history: History::new(),
            options: EditorOptions::default(),
            hinter: Box::new(NoHints),
            completer: Box::new(NoCompletions),
        }
    }

    /// Create a reader configured from `config`.
    pub fn with_config(config: &Config) -> Self {
        let mut reader = Self::new();
        reader.set_multiline(config.editor.multiline);
        reader.set_mask(config.editor.mask);
        reader.set_history_max_len(config.editor.history_max_len);
        reader
    }

    pub fn options(&self) -> EditorOptions {
        self.options
    }

    pub fn set_multiline(&mut self, multiline: bool) {
        self.options.multiline = multiline;
    }

    pub fn set_mask(&mut self, mask: bool) {
        self.options.mask = mask;
    }

    pub fn set_hinter(&mut self, hinter: impl Hinter + 'static) {
        self.hinter = Box::new(hinter);
    }

    pub fn set_completer(&mut self, completer: impl Completer + 'static) {
        self.completer = Box::new(completer);
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn set_history_max_len(&mut self, max_len: usize) {
        self.history.set_max_len(max_len);
    }

    /// Record a committed line in history.
    ///
    /// Empty lines and an exact repeat of the newest entry are skipped.
    /// Returns whether the line was added.
    pub fn add_history(&mut self, line: &str) -> Result<bool> {
        let entry: Vec<char> = line.chars().collect();
        if entry.is_empty() {
            return Ok(false);
        }
        let newest = self.history.len().checked_sub(1);
        if newest.and_then(|i| self.history.get(i)) == Some(entry.as_slice()) {
            return Ok(false);
        }
        self.history.add(entry)?;
        Ok(true)
    }

    /// Read a line from the process's terminal.
    pub fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        if !terminal::is_tty() {
            tracing::debug!("stdin is not a tty, reading plain line");
            return read_plain_line(&mut io::stdin().lock());
        }

        if terminal::is_unsupported_terminal() {
            tracing::debug!("unsupported terminal, reading cooked line");
            let mut stdout = io::stdout();
            stdout.write_all(prompt.as_bytes())?;
            stdout.flush()?;
            return read_plain_line(&mut io::stdin().lock());
        }

        let result = {
            let _raw = RawMode::enable()?;
            let mut term = IoTerminal::stdio();
            self.read_line_with(&mut term, prompt)
        };

        let mut stdout = io::stdout();
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        result
    }

    /// Run the editor on `term`. The caller owns terminal mode.
    pub fn read_line_with<T: Terminal>(&mut self, term: &mut T, prompt: &str) -> Result<ReadResult> {
        let editor = Editor::new(term, prompt, self.options, &*self.hinter);
        Dispatcher::new(editor, &mut self.history, &*self.completer).run()
    }

    /// Clear the screen of the process's terminal.
    pub fn clear_screen(&self) -> Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(terminal::CLEAR_SCREEN)?;
        stdout.flush()?;
        Ok(())
    }
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Read one `\n`-terminated line, dropping the terminator (and a `\r`
/// before it). Invalid UTF-8 is replaced rather than rejected.
pub fn read_plain_line<R: BufRead>(input: &mut R) -> Result<ReadResult> {
    let mut bytes = Vec::new();
    if input.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(ReadResult::EndOfInput);
    }
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
    }
    Ok(ReadResult::Line(String::from_utf8_lossy(&bytes).into_owned()))
}
