use crate::{error::Error, timing::{ClockTime, TimedValue}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Interpolation Between Control Points
====================================

A timed curve is a sorted list of control points. What happens between
the points is the interpolation mode:

  NONE (steps)
      Hold each point's value until the next point.

          ●────┐
               ●───────┐
                       ●────

      Good for: switches, discrete selections, anything where a glide
      between values is meaningless.

  LINEAR
      Straight lines between neighbours. Cheap, predictable, but the
      slope jumps at every point.

  CUBIC
      A natural cubic spline through all points: smooth first and second
      derivatives everywhere. The classic artifact is overshoot—a spline
      through monotonically rising points can dip below or swing above
      the data near steep segments.

  CUBIC MONOTONIC
      Monotone cubic Hermite interpolation (Fritsch–Carlson tangents).
      Still smooth, but the curve never leaves the band spanned by the
      two enclosing points. The right default for automation targeting
      bounded parameters: no surprise excursions past min/max.


Knot Behavior
-------------

All modes agree on the boundaries:

  - before the first point the curve has NO value;
  - at a point, the curve passes exactly through it;
  - at or after the last point, the last value holds.

Both cubic modes need at least three points to be meaningful and fall
back to linear below that.


Numerical Setup
---------------

Knot positions are converted to seconds relative to the first knot
before solving, keeping magnitudes small regardless of where on the
timeline the curve sits. The natural spline solves a tridiagonal system
for the second derivatives (Thomas algorithm); the system is strictly
diagonally dominant because segment widths are positive, so no pivoting
is needed.
*/

/// How values between two control points are produced.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum InterpolationMode {
    /// Hold the previous control point (steps).
    None = 0,
    /// Straight lines between neighbouring points.
    Linear = 1,
    /// Natural cubic spline through all points.
    Cubic = 2,
    /// Monotone cubic; never overshoots the enclosing points.
    CubicMonotonic = 3,
}

impl InterpolationMode {
    /// The raw integer this mode serializes to. Part of the stable
    /// contract in [`crate::contract`]; never renumber.
    pub const fn to_raw(self) -> i32 {
        self as i32
    }

    pub fn try_from_raw(raw: i32) -> Result<Self, Error> {
        match raw {
            0 => Ok(Self::None),
            1 => Ok(Self::Linear),
            2 => Ok(Self::Cubic),
            3 => Ok(Self::CubicMonotonic),
            other => Err(Error::UnknownInterpolationMode(other)),
        }
    }
}

impl TryFrom<i32> for InterpolationMode {
    type Error = Error;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::try_from_raw(raw)
    }
}

/// Index of the last point with `timestamp <= ts`, if any.
pub(crate) fn floor_index(points: &[TimedValue], ts: ClockTime) -> Option<usize> {
    let upto = points.partition_point(|p| p.timestamp <= ts);
    upto.checked_sub(1)
}

/// Straight-line value between two neighbouring points.
pub(crate) fn interpolate_linear(prev: TimedValue, next: TimedValue, ts: ClockTime) -> f64 {
    let span = next.timestamp.abs_diff(prev.timestamp).nanos() as f64;
    if span == 0.0 {
        return prev.value;
    }
    let t = ts.abs_diff(prev.timestamp).nanos() as f64 / span;
    prev.value + (next.value - prev.value) * t
}

/// Seconds from the first knot; keeps spline arithmetic well-scaled.
fn knot_x(points: &[TimedValue], i: usize) -> f64 {
    points[i].timestamp.saturating_sub(points[0].timestamp).as_secs_f64()
}

/// Second derivatives of the natural cubic spline through `points`.
///
/// Allocates; call on edit, not during evaluation. Needs `points.len() >= 3`
/// with strictly increasing timestamps.
pub(crate) fn natural_spline_second_derivatives(points: &[TimedValue]) -> Vec<f64> {
    let n = points.len();
    debug_assert!(n >= 3);

    let mut m = vec![0.0; n];
    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    // Forward sweep over the interior rows. Natural boundary: m[0] = m[n-1] = 0.
    for i in 1..n - 1 {
        let h_prev = knot_x(points, i) - knot_x(points, i - 1);
        let h_next = knot_x(points, i + 1) - knot_x(points, i);
        let a = h_prev;
        let b = 2.0 * (h_prev + h_next);
        let c = h_next;
        let d = 6.0
            * ((points[i + 1].value - points[i].value) / h_next
                - (points[i].value - points[i - 1].value) / h_prev);

        let w = b - a * c_prime[i - 1];
        c_prime[i] = c / w;
        d_prime[i] = (d - a * d_prime[i - 1]) / w;
    }

    for i in (1..n - 1).rev() {
        m[i] = d_prime[i] - c_prime[i] * m[i + 1];
    }

    m
}

/// Spline value on segment `seg` (between points `seg` and `seg + 1`).
pub(crate) fn spline_segment_value(
    points: &[TimedValue],
    second_derivs: &[f64],
    seg: usize,
    ts: ClockTime,
) -> f64 {
    let h = knot_x(points, seg + 1) - knot_x(points, seg);
    let t = ts.saturating_sub(points[0].timestamp).as_secs_f64() - knot_x(points, seg);
    let y0 = points[seg].value;
    let y1 = points[seg + 1].value;
    let m0 = second_derivs[seg];
    let m1 = second_derivs[seg + 1];

    let slope = (y1 - y0) / h - h * (2.0 * m0 + m1) / 6.0;
    y0 + t * slope + t * t * m0 / 2.0 + t * t * t * (m1 - m0) / (6.0 * h)
}

/// Fritsch–Carlson tangents for monotone cubic interpolation.
///
/// Allocates; call on edit, not during evaluation. Needs `points.len() >= 2`
/// with strictly increasing timestamps.
pub(crate) fn monotone_tangents(points: &[TimedValue]) -> Vec<f64> {
    let n = points.len();
    debug_assert!(n >= 2);

    let secant = |i: usize| {
        (points[i + 1].value - points[i].value) / (knot_x(points, i + 1) - knot_x(points, i))
    };

    let mut m = vec![0.0; n];
    m[0] = secant(0);
    m[n - 1] = secant(n - 2);
    for i in 1..n - 1 {
        let left = secant(i - 1);
        let right = secant(i);
        // Opposite-sign secants mean a local extremum: flat tangent there.
        m[i] = if left * right <= 0.0 {
            0.0
        } else {
            0.5 * (left + right)
        };
    }

    // Clamp tangents so no segment can overshoot its endpoints.
    for i in 0..n - 1 {
        let d = secant(i);
        if d == 0.0 {
            m[i] = 0.0;
            m[i + 1] = 0.0;
            continue;
        }
        let alpha = m[i] / d;
        let beta = m[i + 1] / d;
        let s = alpha * alpha + beta * beta;
        if s > 9.0 {
            let tau = 3.0 / s.sqrt();
            m[i] = tau * alpha * d;
            m[i + 1] = tau * beta * d;
        }
    }

    m
}

/// Hermite value on segment `seg` using precomputed tangents.
pub(crate) fn hermite_segment_value(
    points: &[TimedValue],
    tangents: &[f64],
    seg: usize,
    ts: ClockTime,
) -> f64 {
    let h = knot_x(points, seg + 1) - knot_x(points, seg);
    let t = (ts.saturating_sub(points[0].timestamp).as_secs_f64() - knot_x(points, seg)) / h;
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    h00 * points[seg].value
        + h10 * h * tangents[seg]
        + h01 * points[seg + 1].value
        + h11 * h * tangents[seg + 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(secs: u64, value: f64) -> TimedValue {
        TimedValue::new(ClockTime::from_secs(secs), value)
    }

    #[test]
    fn raw_values_are_stable() {
        assert_eq!(InterpolationMode::None.to_raw(), 0);
        assert_eq!(InterpolationMode::Linear.to_raw(), 1);
        assert_eq!(InterpolationMode::Cubic.to_raw(), 2);
        assert_eq!(InterpolationMode::CubicMonotonic.to_raw(), 3);
    }

    #[test]
    fn raw_roundtrip_and_rejection() {
        for raw in 0..4 {
            let mode = InterpolationMode::try_from_raw(raw).unwrap();
            assert_eq!(mode.to_raw(), raw);
        }
        assert_eq!(
            InterpolationMode::try_from_raw(4),
            Err(Error::UnknownInterpolationMode(4))
        );
        assert!(InterpolationMode::try_from_raw(-1).is_err());
    }

    #[test]
    fn floor_index_picks_last_at_or_before() {
        let points = [pt(1, 0.0), pt(3, 1.0), pt(5, 0.5)];
        assert_eq!(floor_index(&points, ClockTime::ZERO), None);
        assert_eq!(floor_index(&points, ClockTime::from_secs(1)), Some(0));
        assert_eq!(floor_index(&points, ClockTime::from_secs(4)), Some(1));
        assert_eq!(floor_index(&points, ClockTime::from_secs(9)), Some(2));
    }

    #[test]
    fn linear_hits_knots_and_midpoint() {
        let a = pt(0, 1.0);
        let b = pt(2, 3.0);
        assert_eq!(interpolate_linear(a, b, ClockTime::ZERO), 1.0);
        assert_eq!(interpolate_linear(a, b, ClockTime::from_secs(2)), 3.0);
        let mid = interpolate_linear(a, b, ClockTime::from_secs(1));
        assert!((mid - 2.0).abs() < 1e-12);
    }

    #[test]
    fn spline_passes_through_knots() {
        let points = [pt(0, 0.0), pt(1, 1.0), pt(2, 0.0), pt(3, 1.0), pt(4, 0.0)];
        let m = natural_spline_second_derivatives(&points);

        for seg in 0..points.len() - 1 {
            let at_start = spline_segment_value(&points, &m, seg, points[seg].timestamp);
            let at_end = spline_segment_value(&points, &m, seg, points[seg + 1].timestamp);
            assert!(
                (at_start - points[seg].value).abs() < 1e-9,
                "segment {} start: {} vs {}",
                seg,
                at_start,
                points[seg].value
            );
            assert!(
                (at_end - points[seg + 1].value).abs() < 1e-9,
                "segment {} end: {} vs {}",
                seg,
                at_end,
                points[seg + 1].value
            );
        }
    }

    #[test]
    fn spline_reproduces_straight_lines() {
        // Collinear data has zero curvature, so the spline must be the line.
        let points = [pt(0, 0.0), pt(1, 2.0), pt(2, 4.0), pt(3, 6.0)];
        let m = natural_spline_second_derivatives(&points);
        for &ms in &[500u64, 1_250, 2_750] {
            let ts = ClockTime::from_millis(ms);
            let seg = floor_index(&points, ts).unwrap();
            let v = spline_segment_value(&points, &m, seg, ts);
            let expected = ms as f64 / 1_000.0 * 2.0;
            assert!((v - expected).abs() < 1e-9, "at {} ms: {} vs {}", ms, v, expected);
        }
    }

    #[test]
    fn monotone_never_overshoots() {
        // Steep step inside otherwise shallow data: a natural spline would
        // ring around it, the monotone curve must stay inside each band.
        let points = [pt(0, 0.0), pt(1, 0.1), pt(2, 0.9), pt(3, 1.0)];
        let tangents = monotone_tangents(&points);

        for seg in 0..points.len() - 1 {
            let lo = points[seg].value.min(points[seg + 1].value);
            let hi = points[seg].value.max(points[seg + 1].value);
            for step in 0..=100u64 {
                let ts = points[seg].timestamp
                    + ClockTime::from_millis(step * 10);
                let v = hermite_segment_value(&points, &tangents, seg, ts);
                assert!(
                    v >= lo - 1e-9 && v <= hi + 1e-9,
                    "segment {} at step {}: {} outside [{}, {}]",
                    seg,
                    step,
                    v,
                    lo,
                    hi
                );
            }
        }
    }

    #[test]
    fn monotone_holds_plateaus() {
        let points = [pt(0, 0.5), pt(1, 0.5), pt(2, 1.0)];
        let tangents = monotone_tangents(&points);
        for &ms in &[100u64, 500, 900] {
            let v = hermite_segment_value(&points, &tangents, 0, ClockTime::from_millis(ms));
            assert!((v - 0.5).abs() < 1e-9, "plateau broken at {} ms: {}", ms, v);
        }
    }
}
