//! Mock transport session for testing

use crate::streaming::{SendOutcome, SessionStart, TransportSession};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// Mock session that records everything sent through it
///
/// Clones share state, so a test can hold one handle while the sampler
/// under test owns another.
#[derive(Clone, Default)]
pub struct MockSession {
    inner: Arc<Mutex<MockSessionInner>>,
}

#[derive(Default)]
struct MockSessionInner {
    sent: Vec<Vec<u8>>,
    opened_to: Option<SocketAddr>,
    degraded: bool,
    closed: bool,
}

impl MockSession {
    /// Create a new mock session
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `open` report a degraded session
    pub fn fail_setup(&self) {
        self.inner.lock().unwrap().degraded = true;
    }

    /// All payloads sent so far, in order
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.inner.lock().unwrap().sent.clone()
    }

    /// Destination passed to `open`, if any
    pub fn opened_to(&self) -> Option<SocketAddr> {
        self.inner.lock().unwrap().opened_to
    }

    /// Whether `close` has run
    pub fn is_closed(&self) -> bool {
        self.inner.lock().unwrap().closed
    }
}

impl TransportSession for MockSession {
    fn open(&mut self, dest: SocketAddr) -> SessionStart {
        let mut inner = self.inner.lock().unwrap();
        inner.opened_to = Some(dest);
        if inner.degraded {
            SessionStart::Degraded
        } else {
            SessionStart::Streaming
        }
    }

    fn send(&mut self, payload: &[u8]) -> SendOutcome {
        let mut inner = self.inner.lock().unwrap();
        if inner.degraded || inner.closed {
            return SendOutcome::Dropped;
        }
        inner.sent.push(payload.to_vec());
        SendOutcome::Delivered
    }

    fn close(&mut self) {
        self.inner.lock().unwrap().closed = true;
    }
}
