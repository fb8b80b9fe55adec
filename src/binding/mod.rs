//! Bind a control source to a concrete parameter.
//!
//! Sources speak in abstract values; a binding gives those values a
//! destination: a named parameter with a range and a default. The
//! binding owns the source, applies the mapping, and clamps the result
//! so automation can never push a parameter out of its range.

use crate::{error::Error, source::ControlSource, timing::ClockTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A controllable parameter: name, range, and the value it takes when
/// no automation is defined.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl ParamSpec {
    pub fn new(
        name: impl Into<String>,
        min: f64,
        max: f64,
        default: f64,
    ) -> Result<Self, Error> {
        let name = name.into();
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(Error::EmptyParamRange { name, min, max });
        }
        if !default.is_finite() || default < min || default > max {
            return Err(Error::DefaultOutOfRange {
                name,
                default,
                min,
                max,
            });
        }
        Ok(Self {
            name,
            min,
            max,
            default,
        })
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// How raw control values become parameter values.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
    /// Treat source output as 0.0–1.0 and stretch it over the range.
    Scaled,
    /// Use source output directly, clamped into the range.
    Absolute,
}

/// A control source wired to one parameter.
pub struct DirectBinding {
    param: ParamSpec,
    mapping: Mapping,
    source: Box<dyn ControlSource>,
}

impl DirectBinding {
    pub fn new(
        param: ParamSpec,
        mapping: Mapping,
        source: impl ControlSource + 'static,
    ) -> Self {
        log::debug!(
            "binding parameter {:?} ({}..{}) with {:?} mapping",
            param.name,
            param.min,
            param.max,
            mapping
        );
        Self {
            param,
            mapping,
            source: Box::new(source),
        }
    }

    pub fn scaled(param: ParamSpec, source: impl ControlSource + 'static) -> Self {
        Self::new(param, Mapping::Scaled, source)
    }

    pub fn absolute(param: ParamSpec, source: impl ControlSource + 'static) -> Self {
        Self::new(param, Mapping::Absolute, source)
    }

    pub fn param(&self) -> &ParamSpec {
        &self.param
    }

    pub fn mapping(&self) -> Mapping {
        self.mapping
    }

    fn map(&self, raw: f64) -> f64 {
        match self.mapping {
            Mapping::Scaled => self.param.min + raw.clamp(0.0, 1.0) * self.param.span(),
            Mapping::Absolute => self.param.clamp(raw),
        }
    }

    /// The parameter value at `timestamp`, if the source defines one.
    pub fn value(&self, timestamp: ClockTime) -> Option<f64> {
        self.source.value(timestamp).map(|raw| self.map(raw))
    }

    /// The parameter value at `timestamp`, falling back to the default
    /// where the source is undefined.
    pub fn value_or_default(&self, timestamp: ClockTime) -> f64 {
        self.value(timestamp).unwrap_or(self.param.default)
    }

    /// Sample the bound parameter every `interval` starting at `start`.
    ///
    /// Undefined timestamps take the parameter default; returns whether
    /// the source was defined for the entire block.
    pub fn fill(&self, start: ClockTime, interval: ClockTime, out: &mut [f64]) -> bool {
        let mut complete = true;
        for (i, slot) in out.iter_mut().enumerate() {
            let ts = start.saturating_add(interval * i as u64);
            match self.value(ts) {
                Some(v) => *slot = v,
                None => {
                    *slot = self.param.default;
                    complete = false;
                }
            }
        }
        complete
    }
}
