//! Transport layer for receiver communication.
//!
//! The transaction engine only needs a byte duplex with poll-style reads:
//! write a frame, ask how many bytes are waiting, read up to that many.
//! Currently only RS-232/USB serial is implemented.

#[cfg(test)]
pub(crate) mod mock;
pub mod serial;

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;

use crate::error::Result;

/// Trait for transport implementations.
pub trait Transport: Send + Sync {
    /// Connects to the device.
    fn connect(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;

    /// Disconnects from the device.
    fn disconnect(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;

    /// Writes raw bytes to the device.
    fn write(&mut self, data: Bytes) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;

    /// Returns the number of bytes waiting to be read.
    fn bytes_available(&self) -> Result<usize>;

    /// Reads up to `max` bytes. May return fewer, or none.
    fn read(&mut self, max: usize) -> Pin<Box<dyn Future<Output = Result<Bytes>> + Send + '_>>;

    /// Returns true if connected.
    fn is_connected(&self) -> bool;
}

pub use serial::SerialTransport;
