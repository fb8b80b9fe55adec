//! Benchmarks for LFO waveform evaluation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use modcurve::curve::LfoWaveform;
use modcurve::source::{ControlSource, LfoControlSource};
use modcurve::timing::ClockTime;

use crate::BLOCK_SIZES;

pub fn bench_lfo(c: &mut Criterion) {
    let mut group = c.benchmark_group("source/lfo");

    let waveforms = [
        ("sine", LfoWaveform::Sine),
        ("square", LfoWaveform::Square),
        ("saw", LfoWaveform::Saw),
        ("reverse_saw", LfoWaveform::ReverseSaw),
        ("triangle", LfoWaveform::Triangle),
    ];

    for (name, waveform) in waveforms {
        let source = LfoControlSource::new(waveform, 5.0).unwrap();
        for &size in BLOCK_SIZES {
            let mut out = vec![0.0f64; size];
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    source.fill(
                        black_box(ClockTime::ZERO),
                        black_box(ClockTime::MSECOND),
                        black_box(&mut out),
                    )
                })
            });
        }
    }

    group.finish();
}
