//! Wall-clock playhead driving the scope.

use std::time::Instant;

use modcurve::timing::ClockTime;

/// Converts elapsed wall time into a timeline position, with pause.
pub struct Playhead {
    last: Instant,
    position: ClockTime,
    paused: bool,
}

impl Playhead {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            position: ClockTime::ZERO,
            paused: false,
        }
    }

    /// Advance by the wall time since the previous tick and return the
    /// new position. While paused the position stands still but the
    /// reference instant keeps moving, so unpausing doesn't jump.
    pub fn tick(&mut self) -> ClockTime {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        if !self.paused {
            self.position = self
                .position
                .saturating_add(ClockTime::from_nanos(elapsed.as_nanos() as u64));
        }
        self.position
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn reset(&mut self) {
        self.position = ClockTime::ZERO;
    }
}
