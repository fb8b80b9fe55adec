use modcurve::{
    binding::Mapping,
    curve::{InterpolationMode, LfoWaveform},
    preset::{AutomationLane, AutomationPreset, ParamDescriptor, SourceDescriptor},
    timing::{ClockTime, TimedValue},
};

#[test]
fn built_preset_keeps_every_lane_in_range() {
    let preset = AutomationPreset {
        name: "smoke".into(),
        description: Some("one of each source kind".into()),
        lanes: vec![
            AutomationLane {
                param: ParamDescriptor {
                    name: "cutoff".into(),
                    min: 200.0,
                    max: 8_000.0,
                    default: 1_000.0,
                },
                mapping: Mapping::Scaled,
                source: SourceDescriptor::Interpolation {
                    mode: InterpolationMode::CubicMonotonic,
                    points: vec![
                        TimedValue::new(ClockTime::ZERO, 0.0),
                        TimedValue::new(ClockTime::from_secs(1), 0.8),
                        TimedValue::new(ClockTime::from_secs(2), 0.3),
                        TimedValue::new(ClockTime::from_secs(4), 1.0),
                    ],
                },
            },
            AutomationLane {
                param: ParamDescriptor {
                    name: "depth".into(),
                    min: 0.0,
                    max: 1.0,
                    default: 0.5,
                },
                mapping: Mapping::Scaled,
                source: SourceDescriptor::Lfo {
                    waveform: LfoWaveform::Triangle,
                    frequency_hz: 2.0,
                    amplitude: 0.5,
                    offset: 0.5,
                    timeshift_ns: 0,
                },
            },
            AutomationLane {
                param: ParamDescriptor {
                    name: "level".into(),
                    min: -60.0,
                    max: 0.0,
                    default: -12.0,
                },
                mapping: Mapping::Scaled,
                source: SourceDescriptor::Trigger {
                    tolerance_ns: ClockTime::from_millis(20).nanos(),
                    points: vec![TimedValue::new(ClockTime::from_secs(1), 1.0)],
                },
            },
        ],
    };

    let bindings = preset.build().unwrap();
    assert_eq!(bindings.len(), 3);

    let mut block = [0.0f64; 512];
    for binding in &bindings {
        binding.fill(ClockTime::ZERO, ClockTime::from_millis(10), &mut block);
        let (min, max) = (binding.param().min, binding.param().max);
        assert!(
            block.iter().all(|v| *v >= min && *v <= max),
            "lane {} escaped its range",
            binding.param().name
        );
    }
}
