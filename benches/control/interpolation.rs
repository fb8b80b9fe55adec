//! Benchmarks for timed-curve evaluation across interpolation modes.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use modcurve::curve::InterpolationMode;
use modcurve::source::{ControlSource, InterpolationControlSource};
use modcurve::timing::ClockTime;

use crate::BLOCK_SIZES;

fn curve_with_knots(mode: InterpolationMode, knots: usize) -> InterpolationControlSource {
    let mut source = InterpolationControlSource::new(mode);
    for i in 0..knots {
        let value = if i % 2 == 0 { 0.1 } else { 0.9 };
        source
            .set(ClockTime::from_millis(i as u64 * 250), value)
            .unwrap();
    }
    source
}

pub fn bench_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("source/interpolation");

    let modes = [
        ("none", InterpolationMode::None),
        ("linear", InterpolationMode::Linear),
        ("cubic", InterpolationMode::Cubic),
        ("cubic_monotonic", InterpolationMode::CubicMonotonic),
    ];

    for (name, mode) in modes {
        let source = curve_with_knots(mode, 32);
        for &size in BLOCK_SIZES {
            let mut out = vec![0.0f64; size];
            // One millisecond steps keep every sample inside the knot span.
            group.bench_with_input(
                BenchmarkId::new(name, size),
                &size,
                |b, _| {
                    b.iter(|| {
                        source.fill(
                            black_box(ClockTime::from_millis(5)),
                            black_box(ClockTime::MSECOND),
                            black_box(&mut out),
                        )
                    })
                },
            );
        }
    }

    group.finish();
}
