//! Non-blocking UDP session for record delivery
//!
//! The session owns one send-only datagram socket with a fixed default
//! destination. A navigation client that is not running yet is the
//! normal steady state, so "nobody listening" is not an error here, and
//! nothing in this module ever blocks the caller's frame.

use crate::streaming::{SendOutcome, SessionStart, TransportSession};
use std::io::ErrorKind;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};

/// Lifecycle state of a [`UdpSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No socket yet; `open` has not run
    Uninitialized,
    /// Socket is up and connected to the destination
    Ready,
    /// Setup failed; sends short-circuit until the session is closed
    Degraded,
    /// Socket released; the session is finished
    Closed,
}

/// UDP session owning one non-blocking, send-only socket
pub struct UdpSession {
    socket: Option<UdpSocket>,
    state: SessionState,
}

impl UdpSession {
    /// Create a session with no socket. `open` brings it up.
    pub fn new() -> Self {
        Self {
            socket: None,
            state: SessionState::Uninitialized,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    fn try_open(dest: SocketAddr) -> std::io::Result<UdpSocket> {
        // Ephemeral local port in the destination's address family; the
        // session only ever sends.
        let local: SocketAddr = if dest.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let socket = UdpSocket::bind(local)?;
        socket.set_nonblocking(true)?;
        // For datagram sockets connect only pins the default
        // destination; no traffic is exchanged.
        socket.connect(dest)?;
        Ok(socket)
    }
}

impl Default for UdpSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TransportSession for UdpSession {
    fn open(&mut self, dest: SocketAddr) -> SessionStart {
        match Self::try_open(dest) {
            Ok(socket) => {
                self.socket = Some(socket);
                self.state = SessionState::Ready;
                SessionStart::Streaming
            }
            Err(e) => {
                log::error!("Failed to open UDP session to {}: {}", dest, e);
                self.state = SessionState::Degraded;
                SessionStart::Degraded
            }
        }
    }

    fn send(&mut self, payload: &[u8]) -> SendOutcome {
        // Degraded and closed sessions have no socket to send on.
        let Some(socket) = self.socket.as_ref() else {
            return SendOutcome::Dropped;
        };

        match socket.send(payload) {
            Ok(_) => SendOutcome::Delivered,
            // The peer-not-listening error class; stay quiet and let the
            // next frame try again.
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::ConnectionRefused | ErrorKind::NotConnected
                ) =>
            {
                SendOutcome::Dropped
            }
            Err(e) => {
                log::error!("Failed to send location record: {}", e);
                SendOutcome::Dropped
            }
        }
    }

    fn close(&mut self) {
        // Dropping the handle releases it; repeated calls are no-ops.
        self.socket = None;
        self.state = SessionState::Closed;
    }
}
