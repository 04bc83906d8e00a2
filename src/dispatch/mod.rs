//! Input dispatcher: the byte-level protocol state machine.
//!
//! Bytes are read one at a time from the terminal. Each byte is fed to the
//! transition function of the current [`State`], which edits the line,
//! moves through history, or moves to another state. Multi-byte input
//! (escape sequences, UTF-8, completion browsing) is represented by states
//! rather than nested reads, so every transition consumes exactly one byte.
//!
//! States:
//! - `Normal`: control keys, printable ASCII, UTF-8 leading bytes
//! - `EscapeSeen`: after ESC (`b`, `f`, `[`, `O`/`0`)
//! - `Ss3Seen`: after `ESC O` (`H`, `F`)
//! - `CsiSeen`: after `ESC [` (arrows, Home/End, digit)
//! - `CsiParam`: after `ESC [ <digit>` (only `3~`, Delete, is recognized)
//! - `Utf8`: collecting continuation bytes
//! - `CompletionBrowsing`: cycling through completion candidates
//!
//! Numeric CSI tails other than `3~` (e.g. `ESC [1~` Home) are consumed and
//! ignored.

pub mod keys;

use crate::codec::{self, PartialChar};
use crate::editor::{Completer, CompletionRing, Editor};
use crate::error::Result;
use crate::history::{Direction, History};
use crate::reader::ReadResult;
use crate::terminal::Terminal;

/// Dispatcher state between two bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Normal,
    EscapeSeen,
    Ss3Seen,
    CsiSeen,
    CsiParam(u8),
    Utf8(PartialChar),
    CompletionBrowsing(CompletionRing),
}

/// Outcome of feeding one byte to a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Wait for the next byte in this state
    Next(State),
    /// Leave the current state and handle this byte again in `Normal`
    Redispatch(u8),
    /// The read is over
    Done(ReadResult),
}

/// Drives an [`Editor`] and [`History`] from terminal input.
pub struct Dispatcher<'a, T: Terminal> {
    editor: Editor<'a, T>,
    history: &'a mut History,
    completer: &'a dyn Completer,
}

impl<'a, T: Terminal> Dispatcher<'a, T> {
    pub fn new(
        editor: Editor<'a, T>,
        history: &'a mut History,
        completer: &'a dyn Completer,
    ) -> Self {
        Self {
            editor,
            history,
            completer,
        }
    }

    pub fn editor(&self) -> &Editor<'a, T> {
        &self.editor
    }

    /// Read and dispatch bytes until the line is committed, interrupted or
    /// the input ends.
    ///
    /// A placeholder history entry holds the in-progress line for the
    /// duration of the read and is removed on every exit.
    pub fn run(mut self) -> Result<ReadResult> {
        self.history.add(Vec::new())?;
        self.history.reset_cursor();

        let result = self.edit();
        if result.is_err() {
            self.history.pop();
        }
        result
    }

    fn edit(&mut self) -> Result<ReadResult> {
        self.editor.start()?;

        let mut state = State::Normal;
        loop {
            let Some(byte) = self.editor.read_byte()? else {
                self.history.pop();
                return Ok(ReadResult::EndOfInput);
            };

            let mut transition = self.step(state, byte)?;
            state = loop {
                match transition {
                    Transition::Next(next) => break next,
                    Transition::Redispatch(byte) => transition = self.normal(byte)?,
                    Transition::Done(result) => return Ok(result),
                }
            };
        }
    }

    /// Feed one byte to `state`.
    pub fn step(&mut self, state: State, byte: u8) -> Result<Transition> {
        match state {
            State::Normal => self.normal(byte),
            State::EscapeSeen => self.escape(byte),
            State::Ss3Seen => self.ss3(byte),
            State::CsiSeen => self.csi(byte),
            State::CsiParam(digit) => self.csi_param(digit, byte),
            State::Utf8(partial) => self.utf8(partial, byte),
            State::CompletionBrowsing(ring) => self.browse(ring, byte),
        }
    }

    fn normal(&mut self, byte: u8) -> Result<Transition> {
        match byte {
            keys::ENTER | keys::LINE_FEED => {
                self.history.pop();
                self.editor.finish()?;
                return Ok(Transition::Done(ReadResult::Line(self.editor.line())));
            }
            keys::CTRL_C => {
                self.history.pop();
                return Ok(Transition::Done(ReadResult::Interrupted));
            }
            keys::CTRL_D if self.editor.buffer().is_empty() => {
                self.history.pop();
                return Ok(Transition::Done(ReadResult::EndOfInput));
            }
            keys::CTRL_D => self.editor.delete_at()?,
            keys::TAB if self.completer.is_enabled() => return self.start_completion(),
            keys::ESC => return Ok(Transition::Next(State::EscapeSeen)),
            keys::CTRL_A => self.editor.move_home()?,
            keys::CTRL_B => self.editor.move_left()?,
            keys::CTRL_E => self.editor.move_end()?,
            keys::CTRL_F => self.editor.move_right()?,
            keys::CTRL_K => self.editor.kill_line_forward()?,
            keys::CTRL_L => self.editor.clear_screen()?,
            keys::CTRL_N => self.navigate(Direction::Next)?,
            keys::CTRL_P => self.navigate(Direction::Prev)?,
            keys::CTRL_T => self.editor.swap_prev()?,
            keys::CTRL_U => self.editor.kill_line_backward()?,
            keys::CTRL_W => self.editor.delete_prev_word()?,
            keys::BACKSPACE | keys::CTRL_H => self.editor.delete_before()?,
            0x20..=0x7E => self.editor.insert(byte as char)?,
            _ => return self.utf8_lead(byte),
        }
        Ok(Transition::Next(State::Normal))
    }

    fn utf8_lead(&mut self, byte: u8) -> Result<Transition> {
        match codec::expected_len(byte) {
            Some(1) => self.editor.insert(byte as char)?,
            Some(len) => return Ok(Transition::Next(State::Utf8(PartialChar::new(byte, len)))),
            None => tracing::debug!(byte, "dropped invalid UTF-8 leading byte"),
        }
        Ok(Transition::Next(State::Normal))
    }

    fn utf8(&mut self, mut partial: PartialChar, byte: u8) -> Result<Transition> {
        if !codec::is_continuation(byte) {
            tracing::debug!(byte, "dropped truncated UTF-8 sequence");
            return Ok(Transition::Next(State::Normal));
        }
        partial.push(byte);
        if !partial.is_complete() {
            return Ok(Transition::Next(State::Utf8(partial)));
        }
        match codec::decode(partial.as_bytes()) {
            Ok(ch) => self.editor.insert(ch)?,
            Err(e) => tracing::debug!(error = %e, "dropped malformed UTF-8 sequence"),
        }
        Ok(Transition::Next(State::Normal))
    }

    fn escape(&mut self, byte: u8) -> Result<Transition> {
        match byte {
            b'b' => self.editor.move_word_start()?,
            b'f' => self.editor.move_word_end()?,
            b'[' => return Ok(Transition::Next(State::CsiSeen)),
            b'O' | b'0' => return Ok(Transition::Next(State::Ss3Seen)),
            _ => tracing::trace!(byte, "ignored escape sequence"),
        }
        Ok(Transition::Next(State::Normal))
    }

    fn ss3(&mut self, byte: u8) -> Result<Transition> {
        match byte {
            b'H' => self.editor.move_home()?,
            b'F' => self.editor.move_end()?,
            _ => tracing::trace!(byte, "ignored SS3 sequence"),
        }
        Ok(Transition::Next(State::Normal))
    }

    fn csi(&mut self, byte: u8) -> Result<Transition> {
        match byte {
            b'0'..=b'9' => return Ok(Transition::Next(State::CsiParam(byte))),
            b'A' => self.navigate(Direction::Prev)?,
            b'B' => self.navigate(Direction::Next)?,
            b'C' => self.editor.move_right()?,
            b'D' => self.editor.move_left()?,
            b'H' => self.editor.move_home()?,
            b'F' => self.editor.move_end()?,
            _ => tracing::trace!(byte, "ignored CSI sequence"),
        }
        Ok(Transition::Next(State::Normal))
    }

    fn csi_param(&mut self, digit: u8, byte: u8) -> Result<Transition> {
        if digit == b'3' && byte == b'~' {
            self.editor.delete_at()?;
        } else {
            tracing::trace!(digit, byte, "ignored numeric CSI sequence");
        }
        Ok(Transition::Next(State::Normal))
    }

    fn start_completion(&mut self) -> Result<Transition> {
        let candidates = self.completer.complete(&self.editor.line());
        match CompletionRing::new(candidates) {
            Some(ring) => {
                self.editor.show_candidate(ring.current())?;
                Ok(Transition::Next(State::CompletionBrowsing(ring)))
            }
            None => Ok(Transition::Next(State::Normal)),
        }
    }

    fn browse(&mut self, mut ring: CompletionRing, byte: u8) -> Result<Transition> {
        match byte {
            keys::TAB => {
                ring.advance();
                self.editor.show_candidate(ring.current())?;
                Ok(Transition::Next(State::CompletionBrowsing(ring)))
            }
            keys::ENTER | keys::LINE_FEED => {
                self.editor.set_line(ring.current())?;
                Ok(Transition::Redispatch(byte))
            }
            _ => {
                self.editor.refresh()?;
                Ok(Transition::Redispatch(byte))
            }
        }
    }

    fn navigate(&mut self, direction: Direction) -> Result<()> {
        if let Some(entry) = self.history.navigate(direction, self.editor.buffer().chars()) {
            self.editor.set_line(entry)?;
        }
        Ok(())
    }
}
