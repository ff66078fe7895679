//! Line charts for sampled quadratics.

use edulab_core::quadratic::format_number;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols,
    text::Span,
    widgets::{Axis, Block, Chart, Dataset, GraphType},
};

/// Everything plotted in one chart
pub struct QuadraticChart<'a> {
    pub label: &'a str,
    pub curve: &'a [(f64, f64)],
    pub baseline: Option<(&'a str, &'a [(f64, f64)])>,
    pub vertex: Option<(f64, f64)>,
    /// Vertical line `x = axis`
    pub axis: Option<f64>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

fn axis_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    vec![
        Span::raw(format_number(bounds[0])),
        Span::raw(format_number((bounds[0] + bounds[1]) / 2.0)),
        Span::raw(format_number(bounds[1])),
    ]
}

pub fn render_quadratic_chart(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    chart: &QuadraticChart,
) {
    let axis_line: Vec<(f64, f64)> = chart
        .axis
        .map(|x| vec![(x, chart.y_bounds[0]), (x, chart.y_bounds[1])])
        .unwrap_or_default();
    let vertex: Vec<(f64, f64)> = chart.vertex.into_iter().collect();

    let mut datasets = Vec::new();
    if let Some((name, points)) = chart.baseline {
        datasets.push(
            Dataset::default()
                .name(name.to_string())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(points),
        );
    }
    if !axis_line.is_empty() {
        datasets.push(
            Dataset::default()
                .name("axis")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Magenta))
                .data(&axis_line),
        );
    }
    datasets.push(
        Dataset::default()
            .name(chart.label.to_string())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(chart.curve),
    );
    if !vertex.is_empty() {
        datasets.push(
            Dataset::default()
                .name("vertex")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::Red))
                .data(&vertex),
        );
    }

    let x_axis = Axis::default()
        .title("x".dark_gray())
        .bounds(chart.x_bounds)
        .labels(axis_labels(chart.x_bounds));
    let y_axis = Axis::default()
        .title("y".dark_gray())
        .bounds(chart.y_bounds)
        .labels(axis_labels(chart.y_bounds));

    let widget = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_labels() {
        let labels = axis_labels([-5.0, 5.0]);
        let text: Vec<String> = labels.iter().map(|s| s.content.to_string()).collect();
        assert_eq!(text, vec!["-5", "0", "5"]);
    }
}
