//! RS-232 transport.
//!
//! This module provides RS-232 communication for NAD receivers, either on a
//! native port or through a USB-serial adapter.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_serial::{SerialPort, SerialPortBuilderExt, SerialStream};

use crate::error::{Error, Result};
use crate::transport::Transport;

/// Default baud rate for NAD receivers.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Time the receiver needs after the port opens.
pub const DEFAULT_CONNECTION_DELAY: Duration = Duration::from_millis(100);

/// Serial port settings for a receiver connection.
#[derive(Debug, Clone)]
pub struct SerialConfig {
    /// Device path, `/dev/ttyS0` on Linux or `COM1` on Windows.
    pub port: String,
    /// Baud rate. Data bits, parity and stop bits are fixed at 8N1.
    pub baud_rate: u32,
    /// Delay after opening the port before sending commands.
    pub connection_delay: Duration,
}

impl SerialConfig {
    /// Creates a configuration for `port` at 115200 baud.
    #[must_use]
    pub fn new(port: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            baud_rate: DEFAULT_BAUD_RATE,
            connection_delay: DEFAULT_CONNECTION_DELAY,
        }
    }

    /// Sets the baud rate.
    #[must_use]
    pub const fn baud_rate(mut self, rate: u32) -> Self {
        self.baud_rate = rate;
        self
    }

    /// Sets how long to wait after opening the port.
    #[must_use]
    pub const fn connection_delay(mut self, delay: Duration) -> Self {
        self.connection_delay = delay;
        self
    }
}

/// [`Transport`] over a serial port.
pub struct SerialTransport {
    config: SerialConfig,
    stream: Option<SerialStream>,
}

impl SerialTransport {
    /// Creates an unopened transport.
    #[must_use]
    pub const fn new(config: SerialConfig) -> Self {
        Self {
            config,
            stream: None,
        }
    }

    /// Creates an unopened transport for `port` with default settings.
    #[must_use]
    pub fn with_port(port: impl Into<String>) -> Self {
        Self::new(SerialConfig::new(port))
    }

    /// Returns the transport configuration.
    #[must_use]
    pub const fn config(&self) -> &SerialConfig {
        &self.config
    }
}

impl Transport for SerialTransport {
    fn connect(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            if self.stream.is_some() {
                return Ok(());
            }

            tracing::info!(
                "connecting to serial port: {} at {} baud",
                self.config.port,
                self.config.baud_rate
            );

            let stream = tokio_serial::new(&self.config.port, self.config.baud_rate)
                .data_bits(tokio_serial::DataBits::Eight)
                .parity(tokio_serial::Parity::None)
                .stop_bits(tokio_serial::StopBits::One)
                .open_native_async()
                .map_err(Error::Serial)?;

            // Let the receiver's UART settle before the first command
            tokio::time::sleep(self.config.connection_delay).await;

            // Anything already waiting is stale and would corrupt the first reply
            if let Err(e) = stream.clear(tokio_serial::ClearBuffer::Input) {
                tracing::warn!("failed to clear input buffer: {}", e);
            }

            self.stream = Some(stream);
            tracing::info!("serial port {} open", self.config.port);
            Ok(())
        })
    }

    fn disconnect(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            if self.stream.take().is_some() {
                tracing::info!("disconnected from serial port {}", self.config.port);
            }
            Ok(())
        })
    }

    fn write(&mut self, data: Bytes) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            let stream = self.stream.as_mut().ok_or(Error::NotConnected)?;
            tracing::trace!("writing {} bytes", data.len());
            stream.write_all(&data).await.map_err(Error::Io)?;
            stream.flush().await.map_err(Error::Io)?;
            Ok(())
        })
    }

    fn bytes_available(&self) -> Result<usize> {
        let stream = self.stream.as_ref().ok_or(Error::NotConnected)?;
        let waiting = stream.bytes_to_read().map_err(Error::Serial)?;
        Ok(usize::try_from(waiting).unwrap_or(usize::MAX))
    }

    fn read(&mut self, max: usize) -> Pin<Box<dyn Future<Output = Result<Bytes>> + Send + '_>> {
        Box::pin(async move {
            let stream = self.stream.as_mut().ok_or(Error::NotConnected)?;
            if max == 0 {
                return Ok(Bytes::new());
            }
            let mut buf = BytesMut::zeroed(max);
            let n = stream.read(&mut buf).await.map_err(Error::Io)?;
            buf.truncate(n);
            Ok(buf.freeze())
        })
    }

    fn is_connected(&self) -> bool {
        self.stream.is_some()
    }
}

/// Returns the names of the serial ports present on this machine.
pub fn list_ports() -> Result<Vec<String>> {
    let ports = tokio_serial::available_ports().map_err(Error::Serial)?;
    Ok(ports.into_iter().map(|p| p.port_name).collect())
}
