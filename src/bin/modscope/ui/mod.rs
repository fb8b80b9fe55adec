//! TUI module for modscope
//!
//! Renders a status bar and one chart per automation lane.

mod plot;
mod status;

use modcurve::timing::ClockTime;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use plot::render_lane;
use status::render_status;

/// Everything the UI needs to draw one lane this frame.
pub struct LaneView<'a> {
    pub name: &'a str,
    pub param_name: &'a str,
    pub min: f64,
    pub max: f64,
    pub current: f64,
    pub window_secs: f64,
    pub data: &'a [(f64, f64)],
}

/// Render the whole frame: status bar on top, lanes below.
pub fn render(frame: &mut Frame, lanes: &[LaneView<'_>], now: ClockTime, paused: bool) {
    let mut constraints = vec![Constraint::Length(3)];
    for _ in lanes {
        constraints.push(Constraint::Min(6));
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    render_status(frame, rows[0], now, paused, lanes.len());

    for (lane, area) in lanes.iter().zip(rows.iter().skip(1)) {
        render_lane(frame, *area, lane);
    }
}
