//! One-line slider rendering for numeric controls.

use edulab_core::controls::{Counter, Slider};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::util::format::format_step;
use crate::util::styles::{FOCUS_COLOR, HEADER_COLOR, HELP_COLOR};

const TRACK: char = '─';
const KNOB: char = '●';

/// Track of `width` cells with the knob placed at `ratio` in [0, 1]
fn track(ratio: f64, width: usize) -> (String, String) {
    if width == 0 {
        return (String::new(), String::new());
    }
    let knob = ((ratio.clamp(0.0, 1.0) * (width - 1) as f64).round()) as usize;
    let before: String = std::iter::repeat_n(TRACK, knob).collect();
    let after: String = std::iter::repeat_n(TRACK, width - 1 - knob).collect();
    (before, after)
}

fn control_line(
    label: &str,
    ratio: f64,
    value: String,
    bounds: (String, String),
    width: u16,
    focused: bool,
) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(FOCUS_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_COLOR)
    };
    let marker = if focused { "> " } else { "  " };

    // marker, label and value text plus the separating spaces
    let fixed = marker.len()
        + label.chars().count()
        + value.len()
        + bounds.0.len()
        + bounds.1.len()
        + 7;
    let (before, after) = track(ratio, (width as usize).saturating_sub(fixed));

    Line::from(vec![
        Span::styled(format!("{marker}{label} "), label_style),
        Span::styled(format!("{} ", bounds.0), Style::default().fg(HELP_COLOR)),
        Span::raw(before),
        Span::styled(KNOB.to_string(), label_style),
        Span::raw(after),
        Span::styled(format!(" {}", bounds.1), Style::default().fg(HELP_COLOR)),
        Span::styled(format!("  {value}"), Style::default().add_modifier(Modifier::BOLD)),
    ])
}

pub fn render_slider(frame: &mut Frame, area: Rect, slider: &Slider, focused: bool) {
    let spec = slider.spec();
    let decimals = spec.decimals();
    let line = control_line(
        spec.label,
        slider.ratio(),
        format_step(slider.value(), decimals),
        (format_step(spec.min, decimals), format_step(spec.max, decimals)),
        area.width,
        focused,
    );
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_counter(frame: &mut Frame, area: Rect, counter: &Counter, focused: bool) {
    let spec = counter.spec();
    let span = spec.max.saturating_sub(spec.min).max(1);
    let ratio = (counter.value() - spec.min) as f64 / span as f64;
    let line = control_line(
        spec.label,
        ratio,
        counter.value().to_string(),
        (spec.min.to_string(), spec.max.to_string()),
        area.width,
        focused,
    );
    frame.render_widget(Paragraph::new(line), area);
}
