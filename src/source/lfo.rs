use crate::{
    curve::waveform::LfoWaveform,
    error::Error,
    source::ControlSource,
    timing::ClockTime,
    MIN_FREQUENCY_HZ,
};

/*
LFO Control Source
==================

A periodic modulation source: value = offset + amplitude · shape(phase),
with phase advancing at `frequency` cycles per second of timeline.

Defaults are amplitude 0.5 and offset 0.5, so a fresh LFO sweeps exactly
the unit range that scaled parameter bindings consume. Set amplitude 1.0
and offset 0.0 for a bipolar signal instead.

`timeshift` delays the waveform: with a shift of a quarter period a sine
starts at its peak. The source is defined for every timestamp; `value`
never returns `None`.
*/

pub struct LfoControlSource {
    waveform: LfoWaveform,
    frequency_hz: f64,
    amplitude: f64,
    offset: f64,
    timeshift: ClockTime,
}

impl LfoControlSource {
    /// Create an LFO with the default unit-range amplitude and offset.
    ///
    /// The frequency must be finite and strictly positive.
    pub fn new(waveform: LfoWaveform, frequency_hz: f64) -> Result<Self, Error> {
        if !frequency_hz.is_finite() || frequency_hz < MIN_FREQUENCY_HZ {
            return Err(Error::FrequencyOutOfRange(frequency_hz));
        }
        Ok(Self {
            waveform,
            frequency_hz,
            amplitude: 0.5,
            offset: 0.5,
            timeshift: ClockTime::ZERO,
        })
    }

    pub fn sine(frequency_hz: f64) -> Result<Self, Error> {
        Self::new(LfoWaveform::Sine, frequency_hz)
    }

    pub fn square(frequency_hz: f64) -> Result<Self, Error> {
        Self::new(LfoWaveform::Square, frequency_hz)
    }

    pub fn saw(frequency_hz: f64) -> Result<Self, Error> {
        Self::new(LfoWaveform::Saw, frequency_hz)
    }

    pub fn reverse_saw(frequency_hz: f64) -> Result<Self, Error> {
        Self::new(LfoWaveform::ReverseSaw, frequency_hz)
    }

    pub fn triangle(frequency_hz: f64) -> Result<Self, Error> {
        Self::new(LfoWaveform::Triangle, frequency_hz)
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Result<Self, Error> {
        if !amplitude.is_finite() {
            return Err(Error::NonFiniteValue(amplitude));
        }
        self.amplitude = amplitude;
        Ok(self)
    }

    pub fn with_offset(mut self, offset: f64) -> Result<Self, Error> {
        if !offset.is_finite() {
            return Err(Error::NonFiniteValue(offset));
        }
        self.offset = offset;
        Ok(self)
    }

    pub fn with_timeshift(mut self, timeshift: ClockTime) -> Self {
        self.timeshift = timeshift;
        self
    }

    pub fn waveform(&self) -> LfoWaveform {
        self.waveform
    }

    pub fn set_waveform(&mut self, waveform: LfoWaveform) {
        self.waveform = waveform;
    }

    pub fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }

    pub fn set_frequency_hz(&mut self, frequency_hz: f64) -> Result<(), Error> {
        if !frequency_hz.is_finite() || frequency_hz < MIN_FREQUENCY_HZ {
            return Err(Error::FrequencyOutOfRange(frequency_hz));
        }
        self.frequency_hz = frequency_hz;
        Ok(())
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn timeshift(&self) -> ClockTime {
        self.timeshift
    }

    fn phase_at(&self, timestamp: ClockTime) -> f64 {
        // Shift delays the waveform: the cycle starts `timeshift` late.
        let shifted = timestamp.saturating_sub(self.timeshift);
        shifted.as_secs_f64() * self.frequency_hz
    }
}

impl ControlSource for LfoControlSource {
    fn value(&self, timestamp: ClockTime) -> Option<f64> {
        let wave = self.waveform.sample(self.phase_at(timestamp));
        Some(self.offset + self.amplitude * wave)
    }
}
