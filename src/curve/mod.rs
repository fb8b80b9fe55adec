//! Interpolation and waveform math underneath the control sources.
//!
//! These functions are allocation-free and realtime-safe so sources can
//! call them from evaluation paths. The only allocating entry points are
//! the coefficient builders, which sources run when control points are
//! edited, never while evaluating.

/// Interpolation modes and the piecewise curve math behind them.
pub mod interpolation;
/// LFO waveform kinds and their phase evaluation.
pub mod waveform;

pub use interpolation::InterpolationMode;
pub use waveform::LfoWaveform;
