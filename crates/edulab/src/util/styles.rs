//! Common styling utilities for TUI components

use edulab_core::quiz::Verdict;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused panels
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for positive values
pub const POSITIVE_COLOR: Color = Color::Green;

/// Standard color for negative values
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Standard color for warning/caution values
pub const WARNING_COLOR: Color = Color::Yellow;

/// Lotto ball fill
pub const BALL_COLOR: Color = Color::Rgb(247, 215, 148);

/// Create a block with a title that shows focused state via border color.
///
/// When focused, the border is yellow. When unfocused, it's the default color.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Like [`focused_block`], with help text on the bottom border while focused.
pub fn focused_block_with_help(title: &str, focused: bool, help_text: &str) -> Block<'static> {
    let mut block = focused_block(title, focused);

    if focused && !help_text.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR));
    }

    block
}

/// Color and marker for a quiz question's latest verdict
pub fn verdict_style(verdict: Option<Verdict>) -> (Style, &'static str) {
    match verdict {
        Some(Verdict::Correct) => (Style::default().fg(POSITIVE_COLOR), "✓"),
        Some(Verdict::Incorrect) => (Style::default().fg(NEGATIVE_COLOR), "✗"),
        None => (Style::default().fg(HELP_COLOR), "·"),
    }
}

/// Brighter colors for better match counts
pub fn match_style(matches: usize) -> Style {
    match matches {
        0..=2 => Style::default().fg(HELP_COLOR),
        3 | 4 => Style::default().fg(POSITIVE_COLOR),
        _ => Style::default()
            .fg(WARNING_COLOR)
            .add_modifier(Modifier::BOLD),
    }
}
