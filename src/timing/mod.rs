//! Timestamps and timed control points.
//!
//! Control curves are functions of absolute time, not of audio sample
//! position, so the whole crate shares one nanosecond-resolution clock
//! type instead of a sample counter.

/// Nanosecond-resolution timestamp arithmetic.
pub mod clock_time;

pub use clock_time::ClockTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One control point: the value a curve passes through at a timestamp.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedValue {
    pub timestamp: ClockTime,
    pub value: f64,
}

impl TimedValue {
    pub const fn new(timestamp: ClockTime, value: f64) -> Self {
        Self { timestamp, value }
    }
}
