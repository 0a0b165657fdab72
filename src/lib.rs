//! # nad-tseries
//!
//! A Rust client library for the RS-232 control protocol of NAD T-series
//! surround receivers (T777, T787, T187).
//!
//! The receiver exposes its state as named variables such as `Main.Power` or
//! `Zone2.Volume`. Each command is a line of ASCII text, `<name><operator>[value]`,
//! framed by carriage returns. The receiver answers with an echo of the
//! command followed by the current value.
//!
//! ## Features
//!
//! - Async/await based API using Tokio
//! - Per-model command registries with operator and value validation
//! - Bounded, cancellable transactions that never interleave
//! - Comprehensive error handling
//!
//! ## Quick Start
//!
//! ```no_run
//! use nad_tseries::{Model, Receiver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nad_tseries::Error> {
//!     let receiver = Receiver::serial("/dev/ttyUSB0", Model::T777);
//!     receiver.connect().await?;
//!
//!     if receiver.get("Main.Power").await? == "Off" {
//!         receiver.set("Main.Power", "On").await?;
//!     }
//!     let volume = receiver.set("Main.Volume", -30).await?;
//!     println!("Volume: {volume} dB");
//!
//!     receiver.disconnect().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`protocol`] - Operators, command text, framing and reply decoding
//! - [`registry`] - Variable descriptors and per-model registries
//! - [`transport`] - Transport implementations (currently RS-232/USB serial)
//! - [`commands`] - Transaction engine
//! - [`client`] - High-level [`Receiver`] client

pub mod client;
pub mod commands;
pub mod error;
pub mod protocol;
pub mod registry;
pub mod transport;

// Re-exports for convenience
pub use client::Receiver;
pub use commands::{CommandHandler, TransactionConfig};
pub use error::{Error, ReplyError, Result};
pub use protocol::{Command, Operator, OperatorSet};
pub use registry::{AllowedValues, Model, Registry, UnknownModel, Value, ValueRange, Variable};
pub use tokio_util::sync::CancellationToken;
pub use transport::{SerialTransport, Transport, serial::{SerialConfig, list_ports}};
