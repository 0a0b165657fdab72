//! Protocol definitions for NAD receiver communication.
//!
//! This module contains the low-level protocol types including:
//! - Operators and operator sets
//! - Command text
//! - Request framing and reply decoding

pub mod command;
pub mod frame;
pub mod operator;

pub use command::Command;
pub use frame::{DELIMITER, MAX_REPLY_SIZE, ReplyBuffer, decode_reply, encode as encode_frame};
pub use operator::{Operator, OperatorSet};
