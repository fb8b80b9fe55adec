//! Library-wide error type.

/// Errors surfaced by fallible control-curve operations.
///
/// Evaluation paths never fail; errors occur only while decoding raw
/// values, validating descriptors, or editing control points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("unknown interpolation mode {0}")]
    UnknownInterpolationMode(i32),

    #[error("unknown LFO waveform {0}")]
    UnknownLfoWaveform(i32),

    #[error("LFO frequency {0} Hz out of range")]
    FrequencyOutOfRange(f64),

    #[error("non-finite control value {0}")]
    NonFiniteValue(f64),

    #[error("parameter {name}: empty range {min}..{max}")]
    EmptyParamRange { name: String, min: f64, max: f64 },

    #[error("parameter {name}: default {default} outside {min}..{max}")]
    DefaultOutOfRange {
        name: String,
        default: f64,
        min: f64,
        max: f64,
    },
}
