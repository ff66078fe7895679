use crate::components::charts::{QuadraticChart, render_quadratic_chart};
use crate::components::slider::render_slider;
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{HEADER_COLOR, HELP_COLOR, focused_block, focused_block_with_help};
use crossterm::event::{KeyCode, KeyEvent};
use edulab_core::quadratic::format_number;
use edulab_core::quiz::BASIC_QUIZ;
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

pub struct BasicFormScreen;

impl BasicFormScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let basic = &state.basic;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        render_slider(frame, chunks[0], &basic.a, true);
        if let Some(help) = basic.a.spec().help {
            let help = Paragraph::new(Span::styled(
                format!("  {help}"),
                Style::default().fg(HELP_COLOR),
            ));
            frame.render_widget(help, chunks[1]);
        }
        frame.render_widget(
            Paragraph::new(warning_line(basic.output.warning.as_deref())),
            chunks[2],
        );
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let output = &state.basic.output;
        let chart = QuadraticChart {
            label: &output.formula,
            curve: &output.curve,
            baseline: Some(("y = x^2", &output.baseline)),
            vertex: Some((0.0, 0.0)),
            axis: None,
            x_bounds: output.x_bounds,
            y_bounds: output.y_bounds,
        };
        let block = focused_block(&format!(" GRAPH: {} ", output.formula), false);
        render_quadratic_chart(frame, area, block, &chart);
    }

    fn render_observations(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let output = &state.basic.output;
        let label = Style::default().fg(HEADER_COLOR);

        let lines = vec![
            Line::from(Span::styled(
                output.formula.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Direction: ", label),
                Span::raw(output.convexity.describe()),
            ]),
            Line::from(vec![
                Span::styled("|a| = ", label),
                Span::raw(format_number(output.magnitude)),
            ]),
            Line::from(vec![
                Span::styled("Width: ", label),
                Span::raw(output.width.describe()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "The sign of a sets the direction; the size of |a| sets the width.",
                Style::default().fg(HELP_COLOR),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(focused_block(" OBSERVATIONS ", false));
        frame.render_widget(paragraph, area);
    }

    fn render_quiz(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let quiz = &state.basic.output.quiz;
        let mut lines = quiz_lines(&quiz.questions, state.basic.selected_question);
        if quiz.all_correct() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "🎉 Every answer is correct!",
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }

        let block = focused_block_with_help(" QUIZ ", true, "j/k select  Enter answer  x retry");
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
        frame.render_widget(paragraph, area);
    }
}

impl Default for BasicFormScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for BasicFormScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let basic = &mut state.basic;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => basic.a.decrement(),
            KeyCode::Right | KeyCode::Char('l') => basic.a.increment(),
            KeyCode::Char('H') => basic.a.nudge(-BIG_STEP),
            KeyCode::Char('L') => basic.a.nudge(BIG_STEP),
            KeyCode::Char('r') => basic.a.reset(),
            KeyCode::Char('j') | KeyCode::Down => {
                basic.selected_question = (basic.selected_question + 1) % BASIC_QUIZ.len();
                return EventResult::Handled;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                basic.selected_question =
                    (basic.selected_question + BASIC_QUIZ.len() - 1) % BASIC_QUIZ.len();
                return EventResult::Handled;
            }
            KeyCode::Char('x') => {
                basic.reset_quiz();
                return EventResult::Handled;
            }
            KeyCode::Enter => {
                let question = basic.selected();
                open_question(state, question);
                return EventResult::Handled;
            }
            _ => return EventResult::NotHandled,
        }
        basic.refresh(None);
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(10)])
            .split(area);
        self.render_controls(frame, rows[0], state);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);
        self.render_chart(frame, columns[0], state);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(6)])
            .split(columns[1]);
        self.render_observations(frame, side[0], state);
        self.render_quiz(frame, side[1], state);
    }
}

impl Screen for BasicFormScreen {
    fn title(&self) -> &str {
        "y = ax^2"
    }
}
