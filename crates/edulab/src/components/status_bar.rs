use super::{Component, EventResult};
use crate::state::{AppState, TabId};
use crate::util::styles::{HELP_COLOR, NEGATIVE_COLOR};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn help_text(tab: TabId) -> &'static str {
        match tab {
            TabId::Lotto => {
                "1-3: tabs | ←/→: sets | g/Enter: generate | s: statistics | v: view | r: reset | q: quit"
            }
            TabId::BasicForm => {
                "1-3: tabs | ←/→: a ±0.1 | H/L: a ±1 | j/k: question | Enter: answer | x: retry quiz | r: reset | q: quit"
            }
            TabId::StandardForm => {
                "1-3: tabs | Tab: control | ←/→: ±0.1 | H/L: ±1 | Enter: answer | x: retry quiz | r: reset | q: quit"
            }
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(NEGATIVE_COLOR)),
                Span::raw(error),
                Span::styled("  (Esc to dismiss)", Style::default().fg(HELP_COLOR)),
            ])
        } else {
            Line::from(Span::styled(
                Self::help_text(state.active_tab),
                Style::default().fg(HELP_COLOR),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
