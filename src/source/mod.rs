//! Control sources: a parameter value as a function of time.
//!
//! Sources wrap the curve math with the editing surface automation needs:
//! control-point management, waveform configuration, and block-based
//! sampling. Evaluation is allocation-free; anything that allocates
//! (point insertion, coefficient rebuilds) happens on the editing side.

/// Timed control points interpolated per a configurable mode.
pub mod interpolation;
/// Periodic modulation from a low-frequency oscillator.
pub mod lfo;
/// Shared sorted control-point store.
mod timed;
/// Points that only fire within a tolerance window.
pub mod trigger;

pub use interpolation::InterpolationControlSource;
pub use lfo::LfoControlSource;
pub use trigger::TriggerControlSource;

use crate::timing::ClockTime;

/// Core trait for anything that yields control values over time.
///
/// A source may be undefined for parts of the timeline (no control point
/// reached yet, outside a trigger window); `value` returns `None` there
/// and the consumer decides what a missing value means.
pub trait ControlSource: Send {
    /// The control value at `timestamp`, if the source defines one.
    fn value(&self, timestamp: ClockTime) -> Option<f64>;

    /// Sample the source every `interval` starting at `start`.
    ///
    /// Stops at the first undefined timestamp and returns `false`; slots
    /// before the gap keep the values already written.
    fn fill(&self, start: ClockTime, interval: ClockTime, out: &mut [f64]) -> bool {
        for (i, slot) in out.iter_mut().enumerate() {
            let ts = start.saturating_add(interval * i as u64);
            match self.value(ts) {
                Some(v) => *slot = v,
                None => return false,
            }
        }
        true
    }
}

/// Allow boxed sources to be used wherever a source is expected.
impl ControlSource for Box<dyn ControlSource> {
    fn value(&self, timestamp: ClockTime) -> Option<f64> {
        (**self).value(timestamp)
    }

    fn fill(&self, start: ClockTime, interval: ClockTime, out: &mut [f64]) -> bool {
        (**self).fill(start, interval, out)
    }
}
