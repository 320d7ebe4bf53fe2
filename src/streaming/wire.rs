//! Location record wire format
//!
//! Each UDP datagram carries exactly one record with a fixed layout and
//! no header, magic, or version byte:
//!
//! ```text
//! ┌────────┬───────────────┬──────┐
//! │ offset │ field         │ type │
//! ├────────┼───────────────┼──────┤
//! │ 0      │ seconds       │ u32  │
//! │ 4      │ nanos         │ u32  │
//! │ 8      │ loc_type      │ u32  │
//! │ 12     │ position.x    │ f32  │
//! │ 16     │ position.y    │ f32  │
//! │ 20     │ position.z    │ f32  │
//! │ 24     │ orientation.i │ f32  │
//! │ 28     │ orientation.j │ f32  │
//! │ 32     │ orientation.k │ f32  │
//! │ 36     │ orientation.r │ f32  │
//! └────────┴───────────────┴──────┘
//! ```
//!
//! Fields are in native byte order: sender and receiver share a host.
//! Any change to field order or widths breaks every deployed client, and
//! there is no version byte to negotiate with.

use crate::clock::Timestamp;
use crate::types::Pose;

/// Serialized size of a location record in bytes
pub const RECORD_SIZE: usize = 40;

/// Record tag for entity pose samples. Reserved for future record
/// kinds; the only value emitted today.
pub const LOC_TYPE_POSE: u32 = 0;

/// A single pose sample as it travels on the wire
///
/// Built, encoded, and discarded within one frame; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationRecord {
    pub seconds: u32,
    pub nanos: u32,
    pub loc_type: u32,
    pub position: [f32; 3],
    pub orientation: [f32; 4],
}

impl LocationRecord {
    /// Build a pose record from a frame sample.
    ///
    /// `seconds` truncates to 32 bits on the wire; receivers widen it
    /// back against their own clock.
    pub fn new(timestamp: Timestamp, pose: Pose) -> Self {
        Self {
            seconds: timestamp.seconds as u32,
            nanos: timestamp.nanos,
            loc_type: LOC_TYPE_POSE,
            position: [pose.position.x, pose.position.y, pose.position.z],
            orientation: [
                pose.orientation.i,
                pose.orientation.j,
                pose.orientation.k,
                pose.orientation.r,
            ],
        }
    }

    /// Encode into the fixed 40-byte wire layout. Total: every record
    /// encodes, there is no failure mode.
    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        buf[0..4].copy_from_slice(&self.seconds.to_ne_bytes());
        buf[4..8].copy_from_slice(&self.nanos.to_ne_bytes());
        buf[8..12].copy_from_slice(&self.loc_type.to_ne_bytes());

        let mut offset = 12;
        for component in self.position {
            buf[offset..offset + 4].copy_from_slice(&component.to_ne_bytes());
            offset += 4;
        }
        for component in self.orientation {
            buf[offset..offset + 4].copy_from_slice(&component.to_ne_bytes());
            offset += 4;
        }

        buf
    }
}
