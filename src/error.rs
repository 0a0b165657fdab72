//! Error types for the nad-tseries library.

use thiserror::Error;

use crate::protocol::{Operator, OperatorSet};
use crate::registry::AllowedValues;

/// The main error type for receiver operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The variable name is not part of the model's registry.
    #[error("unknown variable '{name}'")]
    UnknownVariable { name: String },

    /// The variable does not accept the requested operator.
    #[error("variable '{name}' does not support '{operator}', allowed operators: {allowed}")]
    OperatorNotSupported {
        name: String,
        operator: Operator,
        allowed: OperatorSet,
    },

    /// The value is not legal for the variable.
    #[error("invalid value '{value}' for '{name}', allowed values: {allowed}")]
    InvalidValue {
        name: String,
        value: String,
        allowed: AllowedValues,
    },

    /// No complete reply arrived before the deadline.
    #[error("command timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// The reply could not be decoded.
    #[error("malformed reply: {0}")]
    MalformedReply(#[from] ReplyError),

    /// The transaction was cancelled by the caller.
    #[error("transaction cancelled")]
    Cancelled,

    /// Connection is not established.
    #[error("not connected")]
    NotConnected,

    /// Serial port error.
    #[error("serial port error: {0}")]
    Serial(#[from] tokio_serial::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reply decoding errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplyError {
    /// The reply contains bytes outside the ASCII range.
    #[error("reply is not ASCII text")]
    NotAscii,

    /// The reply does not start with the echoed command.
    #[error("reply '{reply}' does not echo command '{command}'")]
    MissingEcho { command: String, reply: String },

    /// A query was answered without a value.
    #[error("empty reply to '{command}'")]
    EmptyPayload { command: String },

    /// The payload does not match the variable's value type.
    #[error("unexpected value '{payload}' for '{name}'")]
    UnexpectedValue { name: String, payload: String },

    /// The reply grew past the buffer limit without a delimiter.
    #[error("reply too large: {size} bytes exceeds maximum {max}")]
    TooLarge { size: usize, max: usize },
}

/// Result type alias for receiver operations.
pub type Result<T> = std::result::Result<T, Error>;
