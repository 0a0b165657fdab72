//! Transaction engine for the NAD control protocol.
//!
//! A transaction writes one framed command and, unless it is fire-and-forget,
//! polls the transport until a reply ending in the delimiter arrives. The
//! transport lock is held for the whole exchange so replies from concurrent
//! callers can never interleave.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};
use crate::protocol::{Command, MAX_REPLY_SIZE, ReplyBuffer, decode_reply, encode_frame};
use crate::transport::Transport;

/// Default time to wait for a complete reply.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Default delay between polls of the transport.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Delay after a fire-and-forget write to let the receiver process it.
const SETTLE_DELAY: Duration = Duration::from_millis(50);

/// Timing configuration for transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionConfig {
    /// Maximum time to wait for the reply delimiter.
    pub timeout: Duration,
    /// Sleep between polls when no bytes are waiting.
    pub poll_interval: Duration,
}

impl TransactionConfig {
    /// Creates a configuration with default timings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Sets the reply timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the poll interval.
    #[must_use]
    pub const fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Executes command transactions over a shared transport.
pub struct CommandHandler<T> {
    transport: Arc<Mutex<T>>,
    config: TransactionConfig,
}

impl<T: Transport> CommandHandler<T> {
    /// Creates a new command handler.
    #[must_use]
    pub fn new(transport: Arc<Mutex<T>>, config: TransactionConfig) -> Self {
        Self { transport, config }
    }

    /// Returns the timing configuration.
    #[must_use]
    pub const fn config(&self) -> TransactionConfig {
        self.config
    }

    /// Sets the reply timeout.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.config.timeout = timeout;
    }

    /// Sends a command and waits for its decoded reply payload.
    pub async fn transact(&self, command: &Command) -> Result<String> {
        self.transact_with_cancel(command, &CancellationToken::new())
            .await
    }

    /// Sends a command and waits for its reply, aborting if `cancel` fires.
    ///
    /// Cancellation is observed between polls; bytes read so far are dropped.
    pub async fn transact_with_cancel(
        &self,
        command: &Command,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let text = command.to_string();
        let raw = {
            let mut transport = self.transport.lock().await;
            discard_stale(&mut *transport).await?;
            tracing::debug!("sending command: {}", text);
            transport.write(encode_frame(&text)).await?;
            self.receive(&mut *transport, cancel).await
        }
        .inspect_err(|e| tracing::warn!("command {} failed: {}", text, e))?;

        let payload = decode_reply(&raw, command).inspect_err(|e| {
            tracing::warn!("undecodable reply to {}: {}", text, e);
        })?;
        tracing::debug!("reply to {}: {:?}", text, payload);
        Ok(payload)
    }

    /// Sends a command without waiting for a reply.
    ///
    /// Use this for assignments where the confirmation is not needed.
    pub async fn send_fire_and_forget(&self, command: &Command) -> Result<()> {
        let text = command.to_string();
        {
            let mut transport = self.transport.lock().await;
            discard_stale(&mut *transport).await?;
            tracing::debug!("sending command without reply: {}", text);
            transport.write(encode_frame(&text)).await?;
        }
        // Small delay to let device process
        tokio::time::sleep(SETTLE_DELAY).await;
        Ok(())
    }

    /// Polls the transport until the buffer ends with the delimiter.
    async fn receive(&self, transport: &mut T, cancel: &CancellationToken) -> Result<Bytes> {
        let deadline = Instant::now() + self.config.timeout;
        let mut reply = ReplyBuffer::new();

        loop {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }

            let mut progressed = false;
            let available = transport.bytes_available()?;
            if available > 0 {
                let chunk = transport.read(available).await?;
                if !chunk.is_empty() {
                    tracing::trace!("received {} bytes", chunk.len());
                    reply.feed(&chunk)?;
                    if reply.is_complete() {
                        return Ok(reply.take());
                    }
                    progressed = true;
                }
            }

            if Instant::now() >= deadline {
                tracing::trace!("discarding {} partial bytes", reply.buffered());
                let timeout_ms = u64::try_from(self.config.timeout.as_millis()).unwrap_or(u64::MAX);
                return Err(Error::Timeout { timeout_ms });
            }
            if progressed {
                continue;
            }

            tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(Error::Cancelled),
                () = tokio::time::sleep(self.config.poll_interval) => {}
            }
        }
    }
}

/// Reads and drops anything left over from an earlier transaction, such as
/// a late reply to a command that timed out.
async fn discard_stale<T: Transport>(transport: &mut T) -> Result<()> {
    let mut discarded = 0usize;
    while discarded < MAX_REPLY_SIZE {
        let available = transport.bytes_available()?;
        if available == 0 {
            break;
        }
        let chunk = transport.read(available).await?;
        if chunk.is_empty() {
            break;
        }
        discarded += chunk.len();
    }
    if discarded > 0 {
        tracing::trace!("discarded {} stale bytes", discarded);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::pin::Pin;

    use super::*;
    use crate::error::ReplyError;
    use crate::transport::mock::{MockTransport, Reply};

    /// Claims a byte is waiting but never delivers one.
    struct EmptyReads;

    impl Transport for EmptyReads {
        fn connect(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
            Box::pin(async { Ok(()) })
        }

        fn disconnect(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
            Box::pin(async { Ok(()) })
        }

        fn write(&mut self, _data: Bytes) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
            Box::pin(async { Ok(()) })
        }

        fn bytes_available(&self) -> Result<usize> {
            Ok(1)
        }

        fn read(&mut self, _max: usize) -> Pin<Box<dyn Future<Output = Result<Bytes>> + Send + '_>> {
            Box::pin(async { Ok(Bytes::new()) })
        }

        fn is_connected(&self) -> bool {
            true
        }
    }

    fn handler(mock: &MockTransport) -> CommandHandler<MockTransport> {
        CommandHandler::new(
            Arc::new(Mutex::new(mock.clone())),
            TransactionConfig::new().timeout(Duration::from_millis(500)),
        )
    }

    #[test]
    fn test_transaction_config_builder() {
        let config = TransactionConfig::default();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.poll_interval, DEFAULT_POLL_INTERVAL);

        let config = config
            .timeout(Duration::from_secs(1))
            .poll_interval(Duration::from_millis(25));
        assert_eq!(config.timeout, Duration::from_secs(1));
        assert_eq!(config.poll_interval, Duration::from_millis(25));
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_round_trip() {
        let mock = MockTransport::new();
        mock.reply(Reply::Echo("On"));

        let payload = handler(&mock)
            .transact(&Command::query("Main.Power"))
            .await
            .unwrap();

        assert_eq!(payload, "On");
        assert_eq!(mock.writes(), vec![Bytes::from_static(b"\rMain.Power?\r")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_assignment_round_trip() {
        let mock = MockTransport::new();
        mock.reply_bytes(b"\rMain.Volume=-11\r");

        let payload = handler(&mock)
            .transact(&Command::assign("Main.Volume", "-11"))
            .await
            .unwrap();

        assert_eq!(payload, "-11");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_in_chunks() {
        let mock = MockTransport::new();
        mock.reply(Reply::Chunks(vec![
            b"\rMain.Vol".to_vec(),
            b"ume?".to_vec(),
            b"\rMain.Volume=-20\r".to_vec(),
        ]));

        let payload = handler(&mock)
            .transact(&Command::query("Main.Volume"))
            .await
            .unwrap();

        assert_eq!(payload, "-20");
        assert_eq!(mock.reads(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_without_delimiter() {
        let mock = MockTransport::new();
        mock.reply(Reply::Stall(b"\rMain.Power?O"));

        let started = Instant::now();
        let err = handler(&mock)
            .transact(&Command::query("Main.Power"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Timeout { timeout_ms: 500 }));
        assert!(started.elapsed() < Duration::from_millis(600));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_on_silence() {
        let mock = MockTransport::new();
        let err = handler(&mock)
            .transact(&Command::query("Main.Power"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Timeout { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_when_reads_come_back_empty() {
        let handler = CommandHandler::new(
            Arc::new(Mutex::new(EmptyReads)),
            TransactionConfig::new().timeout(Duration::from_millis(100)),
        );

        let started = Instant::now();
        let err = handler
            .transact(&Command::query("Main.Power"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Timeout { timeout_ms: 100 }));
        assert!(started.elapsed() < Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_while_reads_come_back_empty() {
        let handler = CommandHandler::new(
            Arc::new(Mutex::new(EmptyReads)),
            TransactionConfig::new().timeout(Duration::from_secs(60)),
        );
        let cancel = CancellationToken::new();

        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(30)).await;
            canceller.cancel();
        });

        let err = handler
            .transact_with_cancel(&Command::query("Main.Power"), &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_after_timeout_reads_its_own_reply() {
        let mock = MockTransport::new();
        mock.reply(Reply::SlowEcho("-20"));
        mock.reply(Reply::Echo("-11"));
        mock.reply(Reply::Echo("On"));
        let handler = CommandHandler::new(
            Arc::new(Mutex::new(mock.clone())),
            TransactionConfig::new().timeout(Duration::from_millis(15)),
        );

        let err = handler
            .transact(&Command::query("Main.Volume"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Timeout { timeout_ms: 15 }));

        // The late "-20" arrives after the deadline and must not answer the retry
        let volume = handler
            .transact(&Command::query("Main.Volume"))
            .await
            .unwrap();
        assert_eq!(volume, "-11");

        let power = handler
            .transact(&Command::query("Main.Power"))
            .await
            .unwrap();
        assert_eq!(power, "On");
        assert_eq!(mock.writes().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_aborts_polling() {
        let mock = MockTransport::new();
        let handler = handler(&mock);
        let cancel = CancellationToken::new();

        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            canceller.cancel();
        });

        let err = handler
            .transact_with_cancel(&Command::query("Main.Power"), &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_reply() {
        let mock = MockTransport::new();
        mock.reply_bytes(b"\rZone2.Power=On\r");

        let err = handler(&mock)
            .transact(&Command::query("Main.Power"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedReply(ReplyError::MissingEcho { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fire_and_forget_does_not_read() {
        let mock = MockTransport::new();
        mock.reply(Reply::Echo(""));

        handler(&mock)
            .send_fire_and_forget(&Command::assign("Main.Volume", "-11"))
            .await
            .unwrap();

        assert_eq!(mock.writes().len(), 1);
        assert_eq!(mock.reads(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_transactions_are_serialized() {
        let mock = MockTransport::new();
        mock.reply(Reply::SlowEcho("On"));
        mock.reply(Reply::SlowEcho("-30"));

        let handler = Arc::new(handler(&mock));
        let first = {
            let handler = Arc::clone(&handler);
            tokio::spawn(async move { handler.transact(&Command::query("Main.Power")).await })
        };
        let second = {
            let handler = Arc::clone(&handler);
            tokio::spawn(async move { handler.transact(&Command::query("Zone2.Volume")).await })
        };

        let (first, second) = tokio::join!(first, second);
        let mut payloads = vec![first.unwrap().unwrap(), second.unwrap().unwrap()];
        payloads.sort();
        assert_eq!(payloads, vec!["-30".to_owned(), "On".to_owned()]);
        assert_eq!(mock.writes().len(), 2);
        assert!(!mock.overlapped());
    }
}
