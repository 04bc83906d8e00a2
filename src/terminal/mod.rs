//! Terminal boundary for the line editor.
//!
//! The editor only needs three primitives from the outside world: read one
//! byte, write a byte sequence, and know how wide the screen is. These are
//! captured by the [`Terminal`] trait so the dispatcher can run against the
//! real tty or against scripted bytes in tests.
//!
//! Terminal-wide state (raw mode) lives in [`raw_mode`] and is owned by the
//! outermost entry point, never by the dispatcher.

pub mod keycodes;
pub mod raw_mode;

pub use raw_mode::RawMode;

use std::io::{self, Read, Write};

/// Width used when the terminal size cannot be determined.
pub const DEFAULT_COLUMNS: usize = 80;

/// Terminals known not to understand the escape sequences we emit.
const UNSUPPORTED_TERMS: &[&str] = &["dumb", "cons25", "emacs"];

/// Clear the screen and move the cursor home.
pub const CLEAR_SCREEN: &[u8] = b"\x1b[H\x1b[2J";

/// Byte-oriented terminal I/O.
pub trait Terminal {
    /// Read exactly one byte, blocking.
    ///
    /// Returns `Ok(None)` when the stream has ended.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Write `bytes` and flush them.
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Current terminal width in columns.
    fn columns(&mut self) -> usize;
}

/// [`Terminal`] over any reader/writer pair.
///
/// With a fixed column count this is the scripted terminal used by tests;
/// without one it queries the controlling terminal on every call so
/// resizes are picked up on the next redraw.
#[derive(Debug)]
pub struct IoTerminal<R, W> {
    input: R,
    output: W,
    columns: Option<usize>,
}

impl<R: Read, W: Write> IoTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            columns: None,
        }
    }

    /// Pin the reported width instead of querying the terminal.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns.max(1));
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl IoTerminal<io::Stdin, io::Stdout> {
    /// Terminal over the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: Read, W: Write> Terminal for IoTerminal<R, W> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.output.write_all(bytes)?;
        self.output.flush()
    }

    fn columns(&mut self) -> usize {
        self.columns.unwrap_or_else(query_columns)
    }
}

/// Query the width of the controlling terminal, falling back to
/// [`DEFAULT_COLUMNS`].
pub fn query_columns() -> usize {
    match terminal_size::terminal_size() {
        Some((terminal_size::Width(w), _)) if w > 0 => w as usize,
        _ => DEFAULT_COLUMNS,
    }
}

/// Whether stdin is attached to a terminal.
pub fn is_tty() -> bool {
    atty::is(atty::Stream::Stdin)
}

/// Whether `$TERM` names a terminal that cannot do escape-sequence editing.
pub fn is_unsupported_terminal() -> bool {
    std::env::var("TERM")
        .map(|term| is_unsupported_term_name(&term))
        .unwrap_or(false)
}

/// Case-insensitive lookup of `term` in the unsupported terminal list.
pub fn is_unsupported_term_name(term: &str) -> bool {
    UNSUPPORTED_TERMS
        .iter()
        .any(|unsupported| term.eq_ignore_ascii_case(unsupported))
}
