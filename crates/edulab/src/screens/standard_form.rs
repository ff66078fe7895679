use crate::components::charts::{QuadraticChart, render_quadratic_chart};
use crate::components::slider::render_slider;
use crate::components::{Component, EventResult};
use crate::state::{AppState, StandardControl};
use crate::util::styles::{HELP_COLOR, focused_block, focused_block_with_help};
use crossterm::event::{KeyCode, KeyEvent};
use edulab_core::pages::{Panel, STANDARD_VIEW};
use edulab_core::quadratic::format_number;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{Screen, open_question, quiz_lines, warning_line};

/// Slider steps moved by H / L
const BIG_STEP: i64 = 10;

pub struct StandardFormScreen;

impl StandardFormScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let standard = &state.standard;
        let mut constraints = vec![Constraint::Length(1); StandardControl::ALL.len()];
        constraints.push(Constraint::Length(1));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for control in StandardControl::ALL {
            render_slider(
                frame,
                chunks[control.index()],
                standard.slider(control),
                standard.focused == control,
            );
        }
        frame.render_widget(
            Paragraph::new(warning_line(standard.output.warning.as_deref())),
            chunks[StandardControl::ALL.len()],
        );
    }

    fn render_panel(&self, frame: &mut Frame, area: Rect, panel: &Panel) {
        let notes_height = panel.notes.len() as u16 * 2 + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(notes_height)])
            .split(area);

        let base_label = format!("y = {}x^2", format_number(panel.quadratic.a));
        let chart = QuadraticChart {
            label: &panel.formula,
            curve: &panel.curve,
            baseline: panel
                .baseline
                .as_deref()
                .map(|points| (base_label.as_str(), points)),
            vertex: Some(panel.quadratic.vertex()),
            axis: Some(panel.quadratic.axis()),
            x_bounds: STANDARD_VIEW,
            y_bounds: STANDARD_VIEW,
        };
        render_quadratic_chart(
            frame,
            chunks[0],
            focused_block(&format!(" {} ", panel.title), false),
            &chart,
        );

        let mut lines = vec![Line::from(Span::styled(
            panel.formula.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        lines.extend(panel.notes.iter().map(|note| Line::from(note.clone())));
        let notes = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(focused_block("", false));
        frame.render_widget(notes, chunks[1]);
    }

    fn render_quiz(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let quiz = &state.standard.output.quiz;
        let mut lines = quiz_lines(&quiz.questions, state.standard.selected_question);
        if quiz.all_correct() {
            lines.push(Line::from(Span::styled(
                "🎉 Every answer is correct!",
                Style::default().add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Hint: compare y = -2(x+3)^2 - 4 with y = a(x-p)^2 + q.",
                Style::default().fg(HELP_COLOR),
            )));
        }

        let block = focused_block_with_help(" QUIZ ", true, "Enter answer  x retry");
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
        frame.render_widget(paragraph, area);
    }
}

impl Default for StandardFormScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StandardFormScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let standard = &mut state.standard;
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                standard.focused = standard.focused.next();
                return EventResult::Handled;
            }
            KeyCode::BackTab | KeyCode::Up => {
                standard.focused = standard.focused.prev();
                return EventResult::Handled;
            }
            KeyCode::Left | KeyCode::Char('h') => standard.focused_slider_mut().decrement(),
            KeyCode::Right | KeyCode::Char('l') => standard.focused_slider_mut().increment(),
            KeyCode::Char('H') => standard.focused_slider_mut().nudge(-BIG_STEP),
            KeyCode::Char('L') => standard.focused_slider_mut().nudge(BIG_STEP),
            KeyCode::Char('r') => {
                standard.reset_controls();
                return EventResult::Handled;
            }
            KeyCode::Char('x') => {
                standard.reset_quiz();
                return EventResult::Handled;
            }
            KeyCode::Enter => {
                let question = standard.selected();
                open_question(state, question);
                return EventResult::Handled;
            }
            _ => return EventResult::NotHandled,
        }
        standard.refresh(None);
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(StandardControl::ALL.len() as u16 + 1),
                Constraint::Min(14),
                Constraint::Length(6),
            ])
            .split(area);
        self.render_controls(frame, rows[0], state);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(rows[1]);
        for (panel, area) in state.standard.output.panels().into_iter().zip(columns.iter()) {
            self.render_panel(frame, *area, panel);
        }

        self.render_quiz(frame, rows[2], state);
    }
}

impl Screen for StandardFormScreen {
    fn title(&self) -> &str {
        "y = a(x-p)^2 + q"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::state::ModalState;
    use std::path::Path;

    fn press(screen: &mut StandardFormScreen, state: &mut AppState, code: KeyCode) {
        screen.handle_key(KeyEvent::from(code), state);
    }

    #[test]
    fn test_focused_slider_moves_its_panel() {
        let mut screen = StandardFormScreen::new();
        let mut state = AppState::new(&AppConfig::default(), Path::new("/nonexistent"));

        press(&mut screen, &mut state, KeyCode::Tab);
        assert_eq!(state.standard.focused, StandardControl::ShiftP);
        press(&mut screen, &mut state, KeyCode::Char('L'));
        assert_eq!(state.standard.output.shift_x.quadratic.vertex(), (1.0, 0.0));
        assert_eq!(state.standard.output.full.quadratic.vertex(), (1.0, 1.0));

        press(&mut screen, &mut state, KeyCode::BackTab);
        press(&mut screen, &mut state, KeyCode::Char('H'));
        assert_eq!(state.standard.slider(StandardControl::A).value(), 0.0);
        assert_eq!(state.standard.output.a.value, 0.1);
        assert!(state.standard.output.warning.is_some());

        press(&mut screen, &mut state, KeyCode::Char('r'));
        assert_eq!(state.standard.output.shift_x.quadratic.vertex(), (0.0, 0.0));
        assert!(state.standard.output.warning.is_none());
    }

    #[test]
    fn test_enter_opens_vertex_picker() {
        let mut screen = StandardFormScreen::new();
        let mut state = AppState::new(&AppConfig::default(), Path::new("/nonexistent"));
        press(&mut screen, &mut state, KeyCode::Enter);
        match &state.modal {
            ModalState::Picker(picker) => assert_eq!(picker.options.len(), 4),
            other => panic!("expected picker, got {:?}", other),
        }
    }
}
