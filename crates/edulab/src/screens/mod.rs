pub mod basic_form;
pub mod lotto;
pub mod standard_form;

use crate::components::Component;
use crate::state::AppState;
use edulab_core::pages::QuestionStatus;
use edulab_core::quiz::Question;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::util::styles::{FOCUS_COLOR, WARNING_COLOR, verdict_style};

/// Trait for full screen views
pub trait Screen: Component {
    /// Get the screen title
    fn title(&self) -> &str;
}

/// Quiz list lines: verdict marker, title and prompt per question
pub(crate) fn quiz_lines(questions: &[QuestionStatus], selected: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (idx, status) in questions.iter().enumerate() {
        let (style, marker) = verdict_style(status.verdict);
        let title_style = if idx == selected {
            Style::default()
                .fg(FOCUS_COLOR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let cursor = if idx == selected { "> " } else { "  " };

        lines.push(Line::from(vec![
            Span::raw(cursor),
            Span::styled(format!("{marker} "), style),
            Span::styled(status.question.title, title_style),
        ]));
        lines.push(Line::from(format!("    {}", status.question.prompt)));
    }
    lines
}

/// Warning line for the a = 0 substitution
pub(crate) fn warning_line(warning: Option<&str>) -> Line<'static> {
    match warning {
        Some(text) => Line::from(Span::styled(
            format!("⚠ {text}"),
            Style::default().fg(WARNING_COLOR),
        )),
        None => Line::from(""),
    }
}

/// Open the answer modal for the question a screen has selected
pub(crate) fn open_question(state: &mut AppState, question: Option<&Question>) {
    if let Some(question) = question {
        state.modal = crate::actions::question_modal(question);
    }
}
