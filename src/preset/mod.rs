//! Serializable descriptors for automation setups.
//!
//! Descriptors are plain data: a preset names its lanes, each lane names
//! a parameter, a mapping, and a source configuration. `build` turns the
//! data into live bindings, which is where validation happens.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    binding::{DirectBinding, Mapping, ParamSpec},
    curve::{InterpolationMode, LfoWaveform},
    error::Error,
    source::{InterpolationControlSource, LfoControlSource, TriggerControlSource},
    timing::{ClockTime, TimedValue},
};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct AutomationPreset {
    pub name: String,
    pub description: Option<String>,
    pub lanes: Vec<AutomationLane>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct AutomationLane {
    pub param: ParamDescriptor,
    pub mapping: Mapping,
    pub source: SourceDescriptor,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct ParamDescriptor {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub enum SourceDescriptor {
    Interpolation {
        mode: InterpolationMode,
        points: Vec<TimedValue>,
    },
    Lfo {
        waveform: LfoWaveform,
        frequency_hz: f64,
        amplitude: f64,
        offset: f64,
        timeshift_ns: u64,
    },
    Trigger {
        tolerance_ns: u64,
        points: Vec<TimedValue>,
    },
}

impl AutomationLane {
    /// Validate this lane and wire it into a live binding.
    pub fn build(&self) -> Result<DirectBinding, Error> {
        let param = ParamSpec::new(
            self.param.name.clone(),
            self.param.min,
            self.param.max,
            self.param.default,
        )?;

        let binding = match &self.source {
            SourceDescriptor::Interpolation { mode, points } => {
                let mut source = InterpolationControlSource::new(*mode);
                source.set_many(points)?;
                DirectBinding::new(param, self.mapping, source)
            }
            SourceDescriptor::Lfo {
                waveform,
                frequency_hz,
                amplitude,
                offset,
                timeshift_ns,
            } => {
                let source = LfoControlSource::new(*waveform, *frequency_hz)?
                    .with_amplitude(*amplitude)?
                    .with_offset(*offset)?
                    .with_timeshift(ClockTime::from_nanos(*timeshift_ns));
                DirectBinding::new(param, self.mapping, source)
            }
            SourceDescriptor::Trigger {
                tolerance_ns,
                points,
            } => {
                let mut source =
                    TriggerControlSource::new(ClockTime::from_nanos(*tolerance_ns));
                for tv in points {
                    source.set(tv.timestamp, tv.value)?;
                }
                DirectBinding::new(param, self.mapping, source)
            }
        };
        Ok(binding)
    }
}

impl AutomationPreset {
    /// Build every lane, in order. Fails on the first invalid lane.
    pub fn build(&self) -> Result<Vec<DirectBinding>, Error> {
        log::info!(
            "building preset {:?} with {} lane(s)",
            self.name,
            self.lanes.len()
        );
        self.lanes.iter().map(AutomationLane::build).collect()
    }
}
