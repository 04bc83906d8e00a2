//! Error types for line reading.
//!
//! Interrupts and end-of-input are not errors; they are reported through
//! [`ReadResult`](crate::ReadResult). Everything here is fatal to the
//! current read.

use std::collections::TryReserveError;
use std::path::PathBuf;

/// Errors that can occur while reading a line or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Out of memory while growing the line buffer or history")]
    OutOfMemory(#[from] TryReserveError),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result type for rawline operations.
pub type Result<T> = std::result::Result<T, Error>;
