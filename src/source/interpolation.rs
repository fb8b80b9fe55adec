use crate::{
    curve::interpolation::{
        floor_index, hermite_segment_value, interpolate_linear, monotone_tangents,
        natural_spline_second_derivatives, spline_segment_value, InterpolationMode,
    },
    error::Error,
    source::{timed::ControlPoints, ControlSource},
    timing::{ClockTime, TimedValue},
};

/// Control source interpolating between timed control points.
///
/// Editing recomputes the cached curve coefficients immediately, so
/// `value` stays allocation-free and can run on a realtime thread while
/// edits happen elsewhere between blocks.
///
/// Boundary behavior: no value before the first control point; the last
/// point's value holds from its timestamp onward.
pub struct InterpolationControlSource {
    mode: InterpolationMode,
    points: ControlPoints,
    /// Second derivatives per knot, valid when `mode == Cubic` and
    /// at least 3 points are set.
    second_derivs: Vec<f64>,
    /// Hermite tangents per knot, valid when `mode == CubicMonotonic`
    /// and at least 3 points are set.
    tangents: Vec<f64>,
}

impl InterpolationControlSource {
    pub fn new(mode: InterpolationMode) -> Self {
        Self {
            mode,
            points: ControlPoints::new(),
            second_derivs: Vec::new(),
            tangents: Vec::new(),
        }
    }

    pub fn mode(&self) -> InterpolationMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InterpolationMode) {
        self.mode = mode;
        self.rebuild_coefficients();
    }

    /// Insert or replace the control point at `timestamp`.
    pub fn set(&mut self, timestamp: ClockTime, value: f64) -> Result<(), Error> {
        self.points.set(timestamp, value)?;
        self.rebuild_coefficients();
        Ok(())
    }

    /// Insert a batch of control points; coefficients rebuild once.
    pub fn set_many(&mut self, values: &[TimedValue]) -> Result<(), Error> {
        for tv in values {
            self.points.set(tv.timestamp, tv.value)?;
        }
        self.rebuild_coefficients();
        Ok(())
    }

    /// Remove the control point at `timestamp`. Returns whether one was there.
    pub fn unset(&mut self, timestamp: ClockTime) -> bool {
        let removed = self.points.unset(timestamp);
        if removed {
            self.rebuild_coefficients();
        }
        removed
    }

    pub fn unset_all(&mut self) {
        self.points.unset_all();
        self.rebuild_coefficients();
    }

    pub fn count(&self) -> usize {
        self.points.count()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The control points in timestamp order.
    pub fn control_points(&self) -> &[TimedValue] {
        self.points.as_slice()
    }

    fn rebuild_coefficients(&mut self) {
        let points = self.points.as_slice();
        self.second_derivs.clear();
        self.tangents.clear();

        // Both cubic modes degrade to linear below 3 points.
        if points.len() < 3 {
            return;
        }
        match self.mode {
            InterpolationMode::Cubic => {
                self.second_derivs = natural_spline_second_derivatives(points);
            }
            InterpolationMode::CubicMonotonic => {
                self.tangents = monotone_tangents(points);
            }
            InterpolationMode::None | InterpolationMode::Linear => {}
        }
    }

    fn value_at(&self, ts: ClockTime) -> Option<f64> {
        let points = self.points.as_slice();
        let floor = floor_index(points, ts)?;

        // At or past the last point the last value holds, in every mode.
        if floor + 1 == points.len() {
            return Some(points[floor].value);
        }

        let v = match self.mode {
            InterpolationMode::None => points[floor].value,
            InterpolationMode::Linear => {
                interpolate_linear(points[floor], points[floor + 1], ts)
            }
            InterpolationMode::Cubic => {
                if points.len() < 3 {
                    interpolate_linear(points[floor], points[floor + 1], ts)
                } else {
                    spline_segment_value(points, &self.second_derivs, floor, ts)
                }
            }
            InterpolationMode::CubicMonotonic => {
                if points.len() < 3 {
                    interpolate_linear(points[floor], points[floor + 1], ts)
                } else {
                    hermite_segment_value(points, &self.tangents, floor, ts)
                }
            }
        };
        Some(v)
    }
}

impl ControlSource for InterpolationControlSource {
    fn value(&self, timestamp: ClockTime) -> Option<f64> {
        self.value_at(timestamp)
    }
}
