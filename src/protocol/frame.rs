//! Framing for the NAD control protocol.
//!
//! Requests and replies are ASCII text framed by carriage returns:
//! ```text
//! ┌──────┬──────────────────────────┬──────┐
//! │ 0x0d │  command text (ASCII)    │ 0x0d │
//! └──────┴──────────────────────────┴──────┘
//! ```
//! The receiver echoes the command before its reply payload, and the reply
//! ends with a carriage return.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::ReplyError;
use crate::protocol::{Command, Operator};

/// Frame delimiter (carriage return).
pub const DELIMITER: u8 = 0x0d;

/// Upper bound on buffered reply bytes.
pub const MAX_REPLY_SIZE: usize = 4096;

/// Encodes command text into a delimited request frame.
///
/// The caller is responsible for passing ASCII text; the client validates
/// values before they get here.
#[must_use]
pub fn encode(text: &str) -> Bytes {
    let mut buf = BytesMut::with_capacity(text.len() + 2);
    buf.put_u8(DELIMITER);
    buf.put_slice(text.as_bytes());
    buf.put_u8(DELIMITER);
    buf.freeze()
}

/// Accumulates reply bytes until the trailing delimiter arrives.
#[derive(Debug, Default)]
pub struct ReplyBuffer {
    buffer: BytesMut,
}

impl ReplyBuffer {
    /// Creates an empty reply buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::new(),
        }
    }

    /// Appends received bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ReplyError::TooLarge`] if the buffer would exceed
    /// [`MAX_REPLY_SIZE`].
    pub fn feed(&mut self, data: &[u8]) -> Result<(), ReplyError> {
        let size = self.buffer.len() + data.len();
        if size > MAX_REPLY_SIZE {
            return Err(ReplyError::TooLarge {
                size,
                max: MAX_REPLY_SIZE,
            });
        }
        self.buffer.extend_from_slice(data);
        Ok(())
    }

    /// Returns true once the buffer is non-empty and ends with the delimiter.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.buffer.last() == Some(&DELIMITER)
    }

    /// Returns the number of bytes currently buffered.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Takes the buffered bytes, leaving the buffer empty.
    pub fn take(&mut self) -> Bytes {
        self.buffer.split().freeze()
    }
}

/// Decodes a complete reply to `command` into its payload.
///
/// The reply may hold several delimited segments (an echo line followed by
/// the answer); the last non-empty one is the answer. It must start with
/// either the full echoed command (`Main.Power?On`) or the variable name and
/// an operator character (`Main.Volume=-11`).
///
/// # Errors
///
/// Returns [`ReplyError::NotAscii`] for non-ASCII bytes and
/// [`ReplyError::MissingEcho`] when the echo is absent.
pub fn decode_reply(raw: &[u8], command: &Command) -> Result<String, ReplyError> {
    if !raw.is_ascii() {
        return Err(ReplyError::NotAscii);
    }
    // ASCII is valid UTF-8
    let text = std::str::from_utf8(raw).map_err(|_| ReplyError::NotAscii)?;

    let segment = text
        .split(DELIMITER as char)
        .map(str::trim)
        .rfind(|s| !s.is_empty())
        .unwrap_or_default();

    let echo = command.to_string();
    if let Some(rest) = segment.strip_prefix(echo.as_str()) {
        if !rest.trim().is_empty() {
            return Ok(rest.trim().to_owned());
        }
    }

    segment
        .strip_prefix(command.name())
        .and_then(|rest| {
            let mut chars = rest.chars();
            chars
                .next()
                .and_then(Operator::from_char)
                .map(|_| chars.as_str().trim().to_owned())
        })
        .ok_or_else(|| ReplyError::MissingEcho {
            command: echo,
            reply: segment.to_owned(),
        })
}
