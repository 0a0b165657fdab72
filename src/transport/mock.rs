//! Scripted transport for exercising the transaction engine without hardware.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::transport::Transport;

/// How the mock answers a write.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Make these chunks readable, one chunk per `read` call.
    Chunks(Vec<Vec<u8>>),
    /// Echo the written frame followed by `payload` and a delimiter.
    Echo(&'static str),
    /// Like `Echo`, but stay silent for a few polls first.
    SlowEcho(&'static str),
    /// Produce bytes that never end with the delimiter.
    Stall(&'static [u8]),
}

/// Polls answered with zero bytes before a `SlowEcho` reply shows up.
const SLOW_POLLS: usize = 3;

#[derive(Debug, Default)]
struct State {
    replies: VecDeque<Reply>,
    pending: VecDeque<Bytes>,
    writes: Vec<Bytes>,
    reads: usize,
    silent_polls: usize,
    overlapped: bool,
}

/// A [`Transport`] that records writes and serves scripted replies.
///
/// Cloning shares the underlying state, so a test can keep a handle for
/// inspection after handing the transport to a client.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
    connected: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            state: Arc::default(),
            connected: true,
        }
    }

    /// Queues the reply to the next write.
    pub fn reply(&self, reply: Reply) -> &Self {
        self.state.lock().unwrap().replies.push_back(reply);
        self
    }

    /// Queues a literal reply to the next write.
    pub fn reply_bytes(&self, bytes: &[u8]) -> &Self {
        self.reply(Reply::Chunks(vec![bytes.to_vec()]))
    }

    /// All frames written so far.
    pub fn writes(&self) -> Vec<Bytes> {
        self.state.lock().unwrap().writes.clone()
    }

    /// Number of `read` calls that returned data.
    pub fn reads(&self) -> usize {
        self.state.lock().unwrap().reads
    }

    /// True if a frame was written while an earlier reply was still unread.
    pub fn overlapped(&self) -> bool {
        self.state.lock().unwrap().overlapped
    }
}

impl Transport for MockTransport {
    fn connect(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            self.connected = true;
            Ok(())
        })
    }

    fn disconnect(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            self.connected = false;
            Ok(())
        })
    }

    fn write(&mut self, data: Bytes) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            if !self.connected {
                return Err(Error::NotConnected);
            }
            let mut state = self.state.lock().unwrap();
            if !state.pending.is_empty() || state.silent_polls > 0 {
                state.overlapped = true;
            }
            match state.replies.pop_front() {
                Some(Reply::Chunks(chunks)) => {
                    state.pending.extend(chunks.into_iter().map(Bytes::from));
                }
                Some(Reply::Echo(payload)) => {
                    state.pending.push_back(echo(&data, payload));
                }
                Some(Reply::SlowEcho(payload)) => {
                    state.silent_polls = SLOW_POLLS;
                    state.pending.push_back(echo(&data, payload));
                }
                Some(Reply::Stall(bytes)) => {
                    state.pending.push_back(Bytes::from_static(bytes));
                }
                None => {}
            }
            state.writes.push(data);
            Ok(())
        })
    }

    fn bytes_available(&self) -> Result<usize> {
        if !self.connected {
            return Err(Error::NotConnected);
        }
        let mut state = self.state.lock().unwrap();
        if state.silent_polls > 0 {
            state.silent_polls -= 1;
            return Ok(0);
        }
        Ok(state.pending.front().map_or(0, Bytes::len))
    }

    fn read(&mut self, max: usize) -> Pin<Box<dyn Future<Output = Result<Bytes>> + Send + '_>> {
        Box::pin(async move {
            let mut state = self.state.lock().unwrap();
            let Some(mut chunk) = state.pending.pop_front() else {
                return Ok(Bytes::new());
            };
            if chunk.len() > max {
                let rest = chunk.split_off(max);
                state.pending.push_front(rest);
            }
            state.reads += 1;
            Ok(chunk)
        })
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

/// Builds the receiver's echo of `frame` followed by `payload`.
fn echo(frame: &[u8], payload: &str) -> Bytes {
    let mut reply = frame.to_vec();
    reply.pop();
    reply.extend_from_slice(payload.as_bytes());
    reply.push(b'\r');
    Bytes::from(reply)
}
