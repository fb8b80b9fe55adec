//! Raw-constant contract shared with external tooling.
//!
//! The enumerated modes and waveforms serialize as fixed integers, and
//! stored presets plus external tools depend on those numbers never
//! moving. This module is the single authoritative table: one entry per
//! constant, rendered as `NAME;VALUE` lines that a diff tool can compare
//! against its own copy of the values.

use std::fmt;
use std::io::{self, Write};

use crate::curve::{InterpolationMode, LfoWaveform};

/// A constant's value, tagged with its declared type.
///
/// Rendering follows the printf convention for the type: plain decimal
/// for integers, six fractional digits for floating point, verbatim for
/// strings and characters. The current table only carries signed
/// integers; the other arms cover every type a constant can declare.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstValue {
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F64(f64),
    Str(&'static str),
    Char(char),
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConstValue::I32(v) => write!(f, "{}", v),
            ConstValue::U32(v) => write!(f, "{}", v),
            ConstValue::I64(v) => write!(f, "{}", v),
            ConstValue::U64(v) => write!(f, "{}", v),
            ConstValue::F64(v) => write!(f, "{:.6}", v),
            ConstValue::Str(v) => f.write_str(v),
            ConstValue::Char(v) => write!(f, "{}", v),
        }
    }
}

/// Every constant in the contract, in declaration order.
pub const CONSTANTS: [(&str, ConstValue); 9] = [
    (
        "INTERPOLATION_MODE_NONE",
        ConstValue::I32(InterpolationMode::None.to_raw()),
    ),
    (
        "INTERPOLATION_MODE_LINEAR",
        ConstValue::I32(InterpolationMode::Linear.to_raw()),
    ),
    (
        "INTERPOLATION_MODE_CUBIC",
        ConstValue::I32(InterpolationMode::Cubic.to_raw()),
    ),
    (
        "INTERPOLATION_MODE_CUBIC_MONOTONIC",
        ConstValue::I32(InterpolationMode::CubicMonotonic.to_raw()),
    ),
    (
        "LFO_WAVEFORM_SINE",
        ConstValue::I32(LfoWaveform::Sine.to_raw()),
    ),
    (
        "LFO_WAVEFORM_SQUARE",
        ConstValue::I32(LfoWaveform::Square.to_raw()),
    ),
    (
        "LFO_WAVEFORM_SAW",
        ConstValue::I32(LfoWaveform::Saw.to_raw()),
    ),
    (
        "LFO_WAVEFORM_REVERSE_SAW",
        ConstValue::I32(LfoWaveform::ReverseSaw.to_raw()),
    ),
    (
        "LFO_WAVEFORM_TRIANGLE",
        ConstValue::I32(LfoWaveform::Triangle.to_raw()),
    ),
];

/// Write one `NAME;VALUE` line per constant.
pub fn dump<W: Write>(mut w: W) -> io::Result<()> {
    for (name, value) in CONSTANTS {
        writeln!(w, "{};{}", name, value)?;
    }
    Ok(())
}
