//! Per-frame sampling loop
//!
//! [`Sampler`] is the piece the host's lifecycle drives: `on_enter`
//! once, `on_update` every frame, `on_exit` once. Each frame it pulls a
//! pose from the provider, stamps it, encodes one record, and hands it
//! to the transport. At most one send attempt per frame, no retries, no
//! batching; control always returns to the host immediately.

use crate::clock;
use crate::provider::PoseProvider;
use crate::streaming::{LocationRecord, SendOutcome, SessionStart, TransportSession};
use std::net::SocketAddr;

/// Outcome of a single `on_update` frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A record left the socket this frame
    Sent,
    /// A record was produced but the transport dropped it
    Dropped,
    /// The entity could not be resolved; nothing was transmitted
    NoPose,
}

/// Per-frame driver that samples a pose and streams it as one record
///
/// Owns its transport session outright: the session comes up in
/// `on_enter` and goes away in `on_exit`, with no state shared outside
/// this struct.
pub struct Sampler<P, S> {
    provider: P,
    session: S,
    destination: SocketAddr,
}

impl<P: PoseProvider, S: TransportSession> Sampler<P, S> {
    /// Create a sampler streaming to `destination`
    pub fn new(provider: P, session: S, destination: SocketAddr) -> Self {
        Self {
            provider,
            session,
            destination,
        }
    }

    /// Host entry hook: bring up the transport.
    ///
    /// Returns [`SessionStart::Degraded`] when setup failed, but that is
    /// advisory only. The host keeps running its loop either way; a
    /// degraded session just drops every record.
    pub fn on_enter(&mut self) -> SessionStart {
        let start = self.session.open(self.destination);
        match start {
            SessionStart::Streaming => {
                log::info!("Streaming location records to {}", self.destination);
            }
            SessionStart::Degraded => {
                log::warn!("Location streaming degraded; records will be dropped");
            }
        }
        start
    }

    /// Host frame hook: sample, encode, and transmit at most once.
    ///
    /// [`FrameOutcome::NoPose`] means this frame was skipped and the
    /// next one should be attempted as usual; it is not a stop signal.
    pub fn on_update(&mut self) -> FrameOutcome {
        let pose = match self.provider.current_pose() {
            Ok(pose) => pose,
            Err(e) => {
                log::warn!("Failed to resolve tracked pose: {}", e);
                return FrameOutcome::NoPose;
            }
        };

        let record = LocationRecord::new(clock::now(), pose);
        match self.session.send(&record.encode()) {
            SendOutcome::Delivered => FrameOutcome::Sent,
            SendOutcome::Dropped => FrameOutcome::Dropped,
        }
    }

    /// Host exit hook: release the transport.
    ///
    /// Safe to call when `on_enter` never ran or came up degraded, and
    /// safe to call more than once.
    pub fn on_exit(&mut self) {
        self.session.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::streaming::{MockSession, RECORD_SIZE};
    use crate::types::{Pose, Quaternion, Vector3};

    struct FixedPose(Pose);

    impl PoseProvider for FixedPose {
        fn current_pose(&mut self) -> crate::error::Result<Pose> {
            Ok(self.0)
        }
    }

    struct NoEntity;

    impl PoseProvider for NoEntity {
        fn current_pose(&mut self) -> crate::error::Result<Pose> {
            Err(Error::PoseUnavailable("entity not spawned"))
        }
    }

    fn dest() -> SocketAddr {
        "127.0.0.1:52077".parse().unwrap()
    }

    fn fixed_pose() -> Pose {
        Pose::new(Vector3::new(1.0, 2.0, 3.0), Quaternion::identity())
    }

    #[test]
    fn test_frame_sends_one_record() {
        let session = MockSession::new();
        let mut sampler = Sampler::new(FixedPose(fixed_pose()), session.clone(), dest());

        assert_eq!(sampler.on_enter(), SessionStart::Streaming);
        assert_eq!(session.opened_to(), Some(dest()));

        assert_eq!(sampler.on_update(), FrameOutcome::Sent);

        let sent = session.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].len(), RECORD_SIZE);
    }

    #[test]
    fn test_missing_pose_skips_transport() {
        let session = MockSession::new();
        let mut sampler = Sampler::new(NoEntity, session.clone(), dest());

        sampler.on_enter();
        assert_eq!(sampler.on_update(), FrameOutcome::NoPose);
        assert_eq!(sampler.on_update(), FrameOutcome::NoPose);

        assert!(session.sent().is_empty());
    }

    #[test]
    fn test_degraded_session_drops_frames() {
        let session = MockSession::new();
        session.fail_setup();
        let mut sampler = Sampler::new(FixedPose(fixed_pose()), session.clone(), dest());

        assert_eq!(sampler.on_enter(), SessionStart::Degraded);
        assert_eq!(sampler.on_update(), FrameOutcome::Dropped);
        assert!(session.sent().is_empty());
    }

    #[test]
    fn test_exit_without_enter_is_safe() {
        let session = MockSession::new();
        let mut sampler = Sampler::new(FixedPose(fixed_pose()), session.clone(), dest());

        sampler.on_exit();
        assert!(session.is_closed());
    }

    #[test]
    fn test_records_carry_reserved_loc_type() {
        let session = MockSession::new();
        let mut sampler = Sampler::new(FixedPose(fixed_pose()), session.clone(), dest());

        sampler.on_enter();
        for _ in 0..3 {
            sampler.on_update();
        }

        for payload in session.sent() {
            let loc_type = u32::from_ne_bytes(payload[8..12].try_into().unwrap());
            assert_eq!(loc_type, 0);
        }
    }
}
