//! UTF-8 encoding and decoding of single codepoints.
//!
//! The dispatcher reads input one byte at a time, so it needs to know how
//! many continuation bytes to expect before it reads any of them.
//! [`expected_len`] answers that from the leading byte alone; [`decode`]
//! then validates the collected sequence.

/// Errors produced when a byte sequence is not a single valid codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("invalid UTF-8 leading byte {0:#04x}")]
    InvalidLeadByte(u8),

    #[error("truncated UTF-8 sequence: expected {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("malformed UTF-8 sequence (bad continuation, overlong, or surrogate)")]
    Malformed,
}

/// Total length of the sequence introduced by `lead`, or `None` if `lead`
/// can never start a valid sequence.
///
/// Continuation bytes (`0x80..=0xBF`), the overlong-only leads `0xC0`/`0xC1`
/// and anything above `0xF4` are rejected here, before any further read.
pub fn expected_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Whether `byte` has the `10xxxxxx` continuation shape.
pub fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Encode a codepoint as UTF-8.
pub fn encode(ch: char) -> Vec<u8> {
    let mut buf = [0u8; 4];
    ch.encode_utf8(&mut buf).as_bytes().to_vec()
}

/// Decode exactly one codepoint from `bytes`.
///
/// The sequence must be complete: its length has to match what the
/// leading byte announces.
pub fn decode(bytes: &[u8]) -> Result<char, CodecError> {
    let lead = *bytes.first().ok_or(CodecError::Truncated {
        expected: 1,
        found: 0,
    })?;
    let expected = expected_len(lead).ok_or(CodecError::InvalidLeadByte(lead))?;
    if bytes.len() != expected {
        return Err(CodecError::Truncated {
            expected,
            found: bytes.len(),
        });
    }

    // std rejects overlong forms, surrogates and values past U+10FFFF
    let text = std::str::from_utf8(bytes).map_err(|_| CodecError::Malformed)?;
    text.chars().next().ok_or(CodecError::Malformed)
}

/// Bytes of a multi-byte sequence collected so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialChar {
    bytes: [u8; 4],
    len: usize,
    expected: usize,
}

impl PartialChar {
    /// Start a sequence from its leading byte.
    pub fn new(lead: u8, expected: usize) -> Self {
        let mut bytes = [0u8; 4];
        bytes[0] = lead;
        Self {
            bytes,
            len: 1,
            expected: expected.clamp(1, 4),
        }
    }

    pub fn push(&mut self, byte: u8) {
        if self.len < self.expected {
            self.bytes[self.len] = byte;
            self.len += 1;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.len == self.expected
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}
