//! Key code inspection mode.
//!
//! Prints the raw bytes produced by each key press. Useful for finding out
//! what a terminal actually sends for keys the dispatcher ignores.

use std::io;

use super::{RawMode, Terminal};

const QUIT_WORD: &[u8; 4] = b"quit";

/// Format one input byte as `'c' 0xNN (NNN)`.
pub fn describe_byte(byte: u8) -> String {
    let shown = if byte.is_ascii_graphic() || byte == b' ' {
        byte as char
    } else {
        '?'
    };
    format!("'{}' {:#04x} ({})", shown, byte, byte)
}

/// Echo key codes from `term` until the user types `quit` or input ends.
///
/// The caller is responsible for raw mode; see [`print_key_codes`].
pub fn echo_key_codes<T: Terminal>(term: &mut T) -> io::Result<()> {
    term.write_all(
        b"Key codes debugging mode.\r\nPress keys to see scan codes. Type 'quit' at any time to exit.\r\n",
    )?;

    let mut recent = [b' '; 4];
    while let Some(byte) = term.read_byte()? {
        recent.rotate_left(1);
        recent[3] = byte;
        if &recent == QUIT_WORD {
            break;
        }
        let line = format!("{}\r\n", describe_byte(byte));
        term.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// Run [`echo_key_codes`] on stdio with the terminal in raw mode.
#[cfg(not(tarpaulin_include))]
pub fn print_key_codes() -> io::Result<()> {
    let _raw = RawMode::enable()?;
    let mut term = super::IoTerminal::stdio();
    echo_key_codes(&mut term)
}
