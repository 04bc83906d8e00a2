//! Scoped raw-mode acquisition.
//!
//! Raw mode is process-wide terminal state. [`RawMode`] enables it on
//! construction and restores the previous settings when dropped, so every
//! exit path out of a read (success, interrupt, `?` error) leaves the
//! terminal as it was found.

use std::io;

/// Guard holding the terminal in raw mode.
#[derive(Debug)]
pub struct RawMode {
    _private: (),
}

impl RawMode {
    /// Switch the terminal to raw mode (no echo, no line buffering, no
    /// signal keys).
    pub fn enable() -> io::Result<Self> {
        crossterm::terminal::enable_raw_mode()?;
        tracing::debug!("raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        match crossterm::terminal::disable_raw_mode() {
            Ok(()) => tracing::debug!("raw mode disabled"),
            Err(e) => tracing::warn!(error = %e, "failed to restore terminal mode"),
        }
    }
}
