//! UDP streaming module for the beacon

pub mod mock;
pub mod udp_session;
pub mod wire;

pub use mock::MockSession;
pub use udp_session::{SessionState, UdpSession};
pub use wire::{LocationRecord, RECORD_SIZE};

use std::net::SocketAddr;

/// Result of bringing a session up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStart {
    /// The socket is ready; records will flow
    Streaming,
    /// Setup failed; the session stays up but every record is dropped
    Degraded,
}

/// Result of one transmission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The payload left the socket
    Delivered,
    /// The payload went nowhere: no listener yet, a degraded or closed
    /// session, or a transmission error already reported to the log
    Dropped,
}

/// Transport session trait for datagram delivery
///
/// One implementor owns one socket. Nothing in this trait blocks, and
/// nothing here is fatal to the caller: setup and transmission failures
/// surface as [`SessionStart::Degraded`] and [`SendOutcome::Dropped`],
/// with details going to the log.
pub trait TransportSession: Send {
    /// Ready the socket and fix `dest` as the default destination.
    /// For datagrams this implies no handshake and no reachability check.
    fn open(&mut self, dest: SocketAddr) -> SessionStart;

    /// Transmit one payload as a single datagram, without blocking.
    fn send(&mut self, payload: &[u8]) -> SendOutcome;

    /// Release the socket. Callable at any point in the lifecycle, any
    /// number of times.
    fn close(&mut self);
}
