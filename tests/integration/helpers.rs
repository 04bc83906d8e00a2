//! Shared helpers for integration tests

use rawline::terminal::IoTerminal;
use rawline::{LineReader, ReadResult};

/// Width of the scripted terminal.
pub const COLUMNS: usize = 80;

/// Terminal that replays `input` and records everything written.
pub fn scripted(input: &[u8]) -> IoTerminal<&[u8], Vec<u8>> {
    IoTerminal::new(input, Vec::new()).with_columns(COLUMNS)
}

/// Run one read over `input` and return the result plus the raw output.
pub fn read_with(reader: &mut LineReader, prompt: &str, input: &[u8]) -> (ReadResult, String) {
    read_with_columns(reader, prompt, input, COLUMNS)
}

pub fn read_with_columns(
    reader: &mut LineReader,
    prompt: &str,
    input: &[u8],
    columns: usize,
) -> (ReadResult, String) {
    let mut term = IoTerminal::new(input, Vec::new()).with_columns(columns);
    let result = reader
        .read_line_with(&mut term, prompt)
        .expect("read should not fail on scripted input");
    let output = String::from_utf8_lossy(&term.into_output()).into_owned();
    (result, output)
}

/// Shorthand for a committed line.
pub fn line(text: &str) -> ReadResult {
    ReadResult::Line(text.to_string())
}
