//! Status bar widget - playhead position, pause state, key hints

use modcurve::timing::ClockTime;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar.
pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    now: ClockTime,
    paused: bool,
    lane_count: usize,
) {
    let block = Block::default().title(" modscope ").borders(Borders::ALL);

    let play_symbol = if paused { "⏸" } else { "▶" };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} {}  ", play_symbol, now),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{} lane(s)  ", lane_count),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            "space pause · r rewind · q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
