//! Bar charts for draw statistics.

use edulab_core::lotto::{DRAW_SIZE, DrawStatistics};
use ratatui::{
    Frame,
    layout::{Direction, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block},
};

use crate::util::format::format_percentage;

/// Share of draws per match count, one bar per 0..=6 matches
pub fn render_match_histogram(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    stats: &DrawStatistics,
) {
    let bars: Vec<Bar> = (0..=DRAW_SIZE)
        .map(|matches| {
            let rate = stats.match_rate(matches);
            Bar::default()
                // per-mille so small rates still get a visible bar
                .value((rate * 1000.0).round() as u64)
                .label(Line::from(format!("{matches}")))
                .text_value(format_percentage(rate))
                .style(Style::default().fg(match_color(matches)))
                .value_style(Style::default().fg(match_color(matches)).reversed())
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(7)
        .bar_gap(1)
        .direction(Direction::Vertical);

    frame.render_widget(chart, area);
}

/// How often each number 1..=45 came up, one narrow bar per number
pub fn render_number_frequency(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    stats: &DrawStatistics,
) {
    let expected = stats.expected_frequency();
    let bars: Vec<Bar> = stats
        .frequencies()
        .map(|(number, count)| {
            let color = if stats.reference.numbers.contains(number) {
                Color::Yellow
            } else if (count as f64) < expected {
                Color::Blue
            } else {
                Color::Cyan
            };
            Bar::default()
                .value(count)
                .label(Line::from(format!("{}", number % 10)))
                .text_value(String::new())
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0)
        .direction(Direction::Vertical);

    frame.render_widget(chart, area);
}

fn match_color(matches: usize) -> Color {
    match matches {
        0 | 1 => Color::DarkGray,
        2 => Color::White,
        3 => Color::Green,
        4 => Color::LightGreen,
        _ => Color::Yellow,
    }
}
