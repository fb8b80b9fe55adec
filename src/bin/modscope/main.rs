//! modscope - terminal scope for control curves
//!
//! Run with: cargo run --bin modscope

mod app;
mod playhead;
mod ui;

use app::Modscope;
use modcurve::{
    binding::{DirectBinding, ParamSpec},
    curve::InterpolationMode,
    source::{InterpolationControlSource, LfoControlSource, TriggerControlSource},
    timing::ClockTime,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    // Vibrato: 6 Hz sine swept over a pitch-offset parameter
    let vibrato = LfoControlSource::sine(6.0)?;
    let pitch = ParamSpec::new("pitch (cents)", -25.0, 25.0, 0.0)?;

    // Filter sweep: monotone cubic fade with a dip
    let mut sweep = InterpolationControlSource::new(InterpolationMode::CubicMonotonic);
    sweep.set(ClockTime::ZERO, 0.0)?;
    sweep.set(ClockTime::from_secs(2), 0.9)?;
    sweep.set(ClockTime::from_secs(3), 0.4)?;
    sweep.set(ClockTime::from_secs(6), 1.0)?;
    let cutoff = ParamSpec::new("cutoff (Hz)", 200.0, 8_000.0, 1_000.0)?;

    // Scene punches: only defined near their points
    let mut punches = TriggerControlSource::new(ClockTime::from_millis(150));
    punches.set(ClockTime::from_secs(1), 1.0)?;
    punches.set(ClockTime::from_secs(4), 0.2)?;
    let level = ParamSpec::new("level", 0.0, 1.0, 0.0)?;

    Modscope::new()
        .window(ClockTime::from_secs(4))
        .resolution(320)
        .lane("vibrato", DirectBinding::scaled(pitch, vibrato))
        .lane("sweep", DirectBinding::scaled(cutoff, sweep))
        .lane("punches", DirectBinding::scaled(level, punches))
        .run()
}
