//! rawline - byte-level readline-style line editor
//!
//! Reads one line from a raw-mode terminal with cursor movement, word and
//! line kills, in-memory history, tab completion and inline hints. Input is
//! read one blocking byte at a time and decoded through an explicit state
//! machine: a partial escape sequence or UTF-8 character is a state to
//! return to, not a nested read.
//!
//! Non-interactive input (pipes, redirected files) and terminals that do
//! not understand ANSI escapes fall back to plain line reads.

pub mod codec;
pub mod config;
pub mod dispatch;
pub mod editor;
pub mod error;
pub mod history;
pub mod reader;
pub mod terminal;

pub use config::Config;
pub use editor::{Completer, EditorOptions, Hint, Hinter, NoCompletions, NoHints};
pub use error::{Error, Result};
pub use history::History;
pub use reader::{LineReader, ReadResult};
