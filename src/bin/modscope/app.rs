//! modscope - application builder and event loop

use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use modcurve::{binding::DirectBinding, timing::ClockTime, MAX_BLOCK_VALUES};

use super::playhead::Playhead;
use super::ui::{self, LaneView};

/// One scoped automation lane: a binding plus its sample buffer.
struct Lane {
    name: String,
    binding: DirectBinding,
    samples: Vec<(f64, f64)>,
}

/// Main application builder
pub struct Modscope {
    window: ClockTime,
    resolution: usize,
    lanes: Vec<Lane>,
}

impl Modscope {
    pub fn new() -> Self {
        Self {
            window: ClockTime::from_secs(4),
            resolution: 240,
            lanes: Vec::new(),
        }
    }

    /// Set how much timeline the scope shows at once.
    pub fn window(mut self, window: ClockTime) -> Self {
        if !window.is_zero() {
            self.window = window;
        }
        self
    }

    /// Set how many samples are drawn per lane per frame.
    pub fn resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution.clamp(2, MAX_BLOCK_VALUES);
        self
    }

    /// Add a lane to the scope.
    pub fn lane(mut self, name: &str, binding: DirectBinding) -> Self {
        self.lanes.push(Lane {
            name: name.to_owned(),
            binding,
            samples: Vec::new(),
        });
        self
    }

    /// Run the scope (takes over the terminal until q/Esc).
    pub fn run(mut self) -> EyreResult<()> {
        log::info!(
            "starting scope: {} lane(s), {} window",
            self.lanes.len(),
            self.window
        );

        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal);
        ratatui::restore();
        result
    }

    fn event_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> EyreResult<()> {
        let mut playhead = Playhead::new();

        loop {
            let now = playhead.tick();
            self.sample_lanes(now);

            let views: Vec<LaneView<'_>> = self
                .lanes
                .iter()
                .map(|lane| {
                    let param = lane.binding.param();
                    LaneView {
                        name: &lane.name,
                        param_name: &param.name,
                        min: param.min,
                        max: param.max,
                        current: lane.binding.value_or_default(now),
                        window_secs: self.window.as_secs_f64(),
                        data: &lane.samples,
                    }
                })
                .collect();

            terminal.draw(|frame| {
                ui::render(frame, &views, now, playhead.is_paused());
            })?;

            // Keyboard input, non-blocking at ~60 fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => break,
                            KeyCode::Char(' ') => playhead.toggle_pause(),
                            KeyCode::Char('r') => playhead.reset(),
                            _ => {}
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Resample every lane over the window ending at `now`.
    fn sample_lanes(&mut self, now: ClockTime) {
        let start = now.saturating_sub(self.window);
        let step = self.window.step(self.resolution as u64);

        for lane in &mut self.lanes {
            lane.samples.clear();
            for i in 0..self.resolution as u64 {
                let ts = start.saturating_add(step * i);
                let x = ts.saturating_sub(start).as_secs_f64();
                let y = lane.binding.value_or_default(ts);
                lane.samples.push((x, y));
            }
        }
    }
}

impl Default for Modscope {
    fn default() -> Self {
        Self::new()
    }
}
