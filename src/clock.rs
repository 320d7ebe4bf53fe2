//! Wall-clock timestamps for location records
//!
//! The host platform reports wall-clock time as a count of 100 ns ticks
//! since 1601-01-01T00:00:00Z. Records carry Unix-epoch timestamps, so
//! every reading is rebased by the fixed offset between the two epochs
//! before it is split into seconds and nanoseconds.

use std::time::{SystemTime, UNIX_EPOCH};

/// Offset between the tick epoch (1601-01-01) and the Unix epoch, in ticks
const UNIX_TIME_START: i64 = 0x019D_B1DE_D53E_8000;

/// 100 ns ticks per second
const TICKS_PER_SECOND: i64 = 10_000_000;

/// Nanoseconds per tick
const NANOS_PER_TICK: i64 = 100;

/// Unix-epoch timestamp with nanosecond remainder
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    /// Whole seconds since the Unix epoch. Negative for host clocks set
    /// before 1970.
    pub seconds: i64,
    /// Nanosecond remainder, always in `[0, 1_000_000_000)`
    pub nanos: u32,
}

/// Convert a raw tick count (100 ns units since 1601-01-01) into a Unix
/// timestamp.
///
/// Euclidean division keeps `nanos` in range even when the tick count
/// predates the Unix epoch; `seconds` goes negative instead.
pub fn timestamp_from_ticks(ticks: i64) -> Timestamp {
    let since_epoch = ticks - UNIX_TIME_START;
    Timestamp {
        seconds: since_epoch.div_euclid(TICKS_PER_SECOND),
        nanos: (since_epoch.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK) as u32,
    }
}

/// Read the platform clock as ticks since 1601-01-01.
fn platform_ticks() -> i64 {
    // SystemTime counts from the Unix epoch, in either direction.
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => {
            UNIX_TIME_START
                + elapsed.as_secs() as i64 * TICKS_PER_SECOND
                + elapsed.subsec_nanos() as i64 / NANOS_PER_TICK
        }
        Err(e) => {
            let before = e.duration();
            UNIX_TIME_START
                - before.as_secs() as i64 * TICKS_PER_SECOND
                - before.subsec_nanos() as i64 / NANOS_PER_TICK
        }
    }
}

/// Current wall-clock time. Infallible: a platform clock reading always
/// succeeds, it may just lie about the date.
pub fn now() -> Timestamp {
    timestamp_from_ticks(platform_ticks())
}
