use std::fmt;
use std::ops::{Add, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Absolute time as a count of nanoseconds.
///
/// All operations stay in integer nanoseconds—no floating point drift.
/// Additive arithmetic saturates at the representable bounds; use the
/// `checked_*` variants where overflow must be observed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(u64);

impl ClockTime {
    pub const ZERO: ClockTime = ClockTime(0);
    pub const NSECOND: ClockTime = ClockTime(1);
    pub const USECOND: ClockTime = ClockTime(1_000);
    pub const MSECOND: ClockTime = ClockTime(1_000_000);
    pub const SECOND: ClockTime = ClockTime(1_000_000_000);

    pub const fn from_nanos(nanos: u64) -> Self {
        ClockTime(nanos)
    }

    pub const fn from_micros(micros: u64) -> Self {
        ClockTime(micros.saturating_mul(Self::USECOND.0))
    }

    pub const fn from_millis(millis: u64) -> Self {
        ClockTime(millis.saturating_mul(Self::MSECOND.0))
    }

    pub const fn from_secs(secs: u64) -> Self {
        ClockTime(secs.saturating_mul(Self::SECOND.0))
    }

    /// Build a timestamp from fractional seconds. Negative and non-finite
    /// inputs collapse to zero.
    pub fn from_secs_f64(secs: f64) -> Self {
        if !secs.is_finite() || secs <= 0.0 {
            return Self::ZERO;
        }
        let nanos = secs * Self::SECOND.0 as f64;
        if nanos >= u64::MAX as f64 {
            ClockTime(u64::MAX)
        } else {
            ClockTime(nanos as u64)
        }
    }

    pub const fn nanos(self) -> u64 {
        self.0
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / Self::SECOND.0 as f64
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn checked_add(self, rhs: ClockTime) -> Option<ClockTime> {
        match self.0.checked_add(rhs.0) {
            Some(nanos) => Some(ClockTime(nanos)),
            None => None,
        }
    }

    pub const fn checked_sub(self, rhs: ClockTime) -> Option<ClockTime> {
        match self.0.checked_sub(rhs.0) {
            Some(nanos) => Some(ClockTime(nanos)),
            None => None,
        }
    }

    pub const fn saturating_add(self, rhs: ClockTime) -> ClockTime {
        ClockTime(self.0.saturating_add(rhs.0))
    }

    pub const fn saturating_sub(self, rhs: ClockTime) -> ClockTime {
        ClockTime(self.0.saturating_sub(rhs.0))
    }

    /// Absolute distance between two timestamps.
    pub const fn abs_diff(self, other: ClockTime) -> ClockTime {
        ClockTime(self.0.abs_diff(other.0))
    }

    /// Split an interval into `parts` equal steps (floor division).
    pub const fn step(self, parts: u64) -> ClockTime {
        if parts == 0 {
            return self;
        }
        ClockTime(self.0 / parts)
    }
}

impl Add for ClockTime {
    type Output = ClockTime;

    fn add(self, rhs: ClockTime) -> ClockTime {
        self.saturating_add(rhs)
    }
}

impl Sub for ClockTime {
    type Output = ClockTime;

    fn sub(self, rhs: ClockTime) -> ClockTime {
        self.saturating_sub(rhs)
    }
}

impl Mul<u64> for ClockTime {
    type Output = ClockTime;

    fn mul(self, rhs: u64) -> ClockTime {
        ClockTime(self.0.saturating_mul(rhs))
    }
}

impl fmt::Display for ClockTime {
    /// `H:MM:SS.nnnnnnnnn`, the conventional clock-time notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_secs = self.0 / Self::SECOND.0;
        let nanos = self.0 % Self::SECOND.0;
        let hours = total_secs / 3600;
        let minutes = (total_secs / 60) % 60;
        let secs = total_secs % 60;
        write!(f, "{}:{:02}:{:02}.{:09}", hours, minutes, secs, nanos)
    }
}
