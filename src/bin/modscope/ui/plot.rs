//! Per-lane curve chart widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use super::LaneView;

/// Render one lane as a line chart over the scope window.
pub fn render_lane(frame: &mut Frame, area: Rect, lane: &LaneView<'_>) {
    let title = format!(
        " {} → {} [{:.1} .. {:.1}]  now {:.2} ",
        lane.name, lane.param_name, lane.min, lane.max, lane.current
    );
    let block = Block::default().title(title).borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(lane.data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, lane.window_secs])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([lane.min, lane.max])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
