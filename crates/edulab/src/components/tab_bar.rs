use super::{Component, EventResult};
use crate::state::{AppState, TabId};
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

pub struct TabBar;

impl TabBar {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TabBar {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let KeyCode::Char(c) = key.code else {
            return EventResult::NotHandled;
        };

        match c
            .to_digit(10)
            .and_then(|d| TabId::from_index((d as usize).wrapping_sub(1)))
        {
            Some(tab) => {
                state.switch_tab(tab);
                EventResult::Handled
            }
            None => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<Line> = TabId::ALL
            .iter()
            .enumerate()
            .map(|(idx, tab)| {
                let content = format!("[{}] {}", idx + 1, tab.name());
                let style = if *tab == state.active_tab {
                    Style::default()
                        .fg(FOCUS_COLOR)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(HELP_COLOR)
                };
                Line::from(Span::styled(content, style))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .title(" Math & Lotto Lab "),
            )
            .select(state.active_tab.index())
            .highlight_style(
                Style::default()
                    .fg(FOCUS_COLOR)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }
}
