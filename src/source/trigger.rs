use crate::{
    error::Error,
    source::{timed::ControlPoints, ControlSource},
    timing::{ClockTime, TimedValue},
};

/// Control source that only fires near its control points.
///
/// A value exists within ±`tolerance` of a point and is that point's
/// value; everywhere else the source is undefined. Useful for one-shot
/// automation (scene changes, mute punches) where values between
/// triggers must not be invented.
///
/// With zero tolerance the sampling clock has to land exactly on a
/// point, so pick a tolerance of at least half the sampling interval.
pub struct TriggerControlSource {
    points: ControlPoints,
    tolerance: ClockTime,
}

impl TriggerControlSource {
    pub fn new(tolerance: ClockTime) -> Self {
        Self {
            points: ControlPoints::new(),
            tolerance,
        }
    }

    pub fn tolerance(&self) -> ClockTime {
        self.tolerance
    }

    pub fn set_tolerance(&mut self, tolerance: ClockTime) {
        self.tolerance = tolerance;
    }

    pub fn set(&mut self, timestamp: ClockTime, value: f64) -> Result<(), Error> {
        self.points.set(timestamp, value)
    }

    pub fn unset(&mut self, timestamp: ClockTime) -> bool {
        self.points.unset(timestamp)
    }

    pub fn unset_all(&mut self) {
        self.points.unset_all();
    }

    pub fn count(&self) -> usize {
        self.points.count()
    }

    pub fn control_points(&self) -> &[TimedValue] {
        self.points.as_slice()
    }

    /// The point nearest to `ts` within tolerance, earlier one on ties.
    fn nearest_within_tolerance(&self, ts: ClockTime) -> Option<&TimedValue> {
        let points = self.points.as_slice();
        let upto = points.partition_point(|p| p.timestamp <= ts);

        let before = upto.checked_sub(1).map(|i| &points[i]);
        let after = points.get(upto);

        let candidate = match (before, after) {
            (Some(b), Some(a)) => {
                if ts.abs_diff(b.timestamp) <= ts.abs_diff(a.timestamp) {
                    b
                } else {
                    a
                }
            }
            (Some(b), None) => b,
            (None, Some(a)) => a,
            (None, None) => return None,
        };

        (ts.abs_diff(candidate.timestamp) <= self.tolerance).then_some(candidate)
    }
}

impl ControlSource for TriggerControlSource {
    fn value(&self, timestamp: ClockTime) -> Option<f64> {
        self.nearest_within_tolerance(timestamp).map(|p| p.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger_with(tolerance_ms: u64, points: &[(u64, f64)]) -> TriggerControlSource {
        let mut source = TriggerControlSource::new(ClockTime::from_millis(tolerance_ms));
        for &(secs, value) in points {
            source.set(ClockTime::from_secs(secs), value).unwrap();
        }
        source
    }

    #[test]
    fn fires_only_inside_the_window() {
        let source = trigger_with(100, &[(2, 0.8)]);

        assert_eq!(source.value(ClockTime::from_secs(1)), None);
        assert_eq!(source.value(ClockTime::from_millis(1_899)), None);
        assert_eq!(source.value(ClockTime::from_millis(1_900)), Some(0.8));
        assert_eq!(source.value(ClockTime::from_secs(2)), Some(0.8));
        assert_eq!(source.value(ClockTime::from_millis(2_100)), Some(0.8));
        assert_eq!(source.value(ClockTime::from_millis(2_101)), None);
    }

    #[test]
    fn exact_hit_with_zero_tolerance() {
        let source = trigger_with(0, &[(1, 0.5)]);
        assert_eq!(source.value(ClockTime::from_secs(1)), Some(0.5));
        assert_eq!(source.value(ClockTime::from_nanos(999_999_999)), None);
    }

    #[test]
    fn nearest_point_wins_between_two() {
        let source = trigger_with(600, &[(1, 0.1), (2, 0.9)]);
        assert_eq!(source.value(ClockTime::from_millis(1_400)), Some(0.1));
        assert_eq!(source.value(ClockTime::from_millis(1_600)), Some(0.9));
        // Equidistant: the earlier point wins.
        assert_eq!(source.value(ClockTime::from_millis(1_500)), Some(0.1));
    }

    #[test]
    fn empty_source_never_fires() {
        let source = TriggerControlSource::new(ClockTime::SECOND);
        assert_eq!(source.value(ClockTime::ZERO), None);
    }

    #[test]
    fn fill_fails_across_silent_spans() {
        let source = trigger_with(50, &[(0, 1.0), (1, 0.0)]);
        let mut out = [0.0; 8];
        // 125 ms steps leave most samples outside any window.
        let complete = source.fill(ClockTime::ZERO, ClockTime::from_millis(125), &mut out);
        assert!(!complete);
    }
}
