use std::f64::consts::TAU;

use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
LFO Waveform Evaluation
=======================

Waveforms are evaluated as pure functions of phase, where phase 0.0 is
the start of a cycle and 1.0 the start of the next. Output is bipolar,
-1.0 to +1.0; the LFO source scales and offsets it afterwards.

Phase conventions (chosen once, relied on by presets):

  SINE          sin(2π·phase): 0 at phase 0, peak at 0.25.
  SQUARE        +1 for the first half cycle, -1 for the second.
  SAW           rises -1 → +1 across the cycle, snaps back.
  REVERSE SAW   falls +1 → -1 across the cycle, snaps back.
  TRIANGLE      0 at phase 0, +1 at 0.25, -1 at 0.75.

Phase outside [0, 1) wraps, so callers can hand in an unwrapped
cycle count and get periodic output.
*/

/// Shape of a low-frequency oscillator cycle.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum LfoWaveform {
    Sine = 0,
    Square = 1,
    Saw = 2,
    ReverseSaw = 3,
    Triangle = 4,
}

impl LfoWaveform {
    /// The raw integer this waveform serializes to. Part of the stable
    /// contract in [`crate::contract`]; never renumber.
    pub const fn to_raw(self) -> i32 {
        self as i32
    }

    pub fn try_from_raw(raw: i32) -> Result<Self, Error> {
        match raw {
            0 => Ok(Self::Sine),
            1 => Ok(Self::Square),
            2 => Ok(Self::Saw),
            3 => Ok(Self::ReverseSaw),
            4 => Ok(Self::Triangle),
            other => Err(Error::UnknownLfoWaveform(other)),
        }
    }

    /// Bipolar sample of this waveform at `phase` cycles.
    #[inline]
    pub fn sample(self, phase: f64) -> f64 {
        let p = phase.rem_euclid(1.0);
        match self {
            Self::Sine => (TAU * p).sin(),
            Self::Square => {
                if p < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Self::Saw => 2.0 * p - 1.0,
            Self::ReverseSaw => 1.0 - 2.0 * p,
            Self::Triangle => {
                if p < 0.25 {
                    4.0 * p
                } else if p < 0.75 {
                    2.0 - 4.0 * p
                } else {
                    4.0 * p - 4.0
                }
            }
        }
    }
}

impl TryFrom<i32> for LfoWaveform {
    type Error = Error;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::try_from_raw(raw)
    }
}

/// Convert a bipolar sample (-1.0 to +1.0) to unipolar (0.0 to 1.0).
///
/// Scaled parameter bindings consume unit-range control values, so this
/// is the usual bridge from a raw waveform to a bindable signal.
#[inline]
pub fn bipolar_to_unipolar(bipolar: f64) -> f64 {
    (bipolar + 1.0) * 0.5
}

/// Convert a unipolar signal (0.0 to 1.0) to bipolar (-1.0 to +1.0).
#[inline]
pub fn unipolar_to_bipolar(unipolar: f64) -> f64 {
    unipolar * 2.0 - 1.0
}
