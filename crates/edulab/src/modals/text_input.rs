use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::TextInputModal;

use super::ModalResult;
use super::helpers::{HelpText, calculate_scroll, render_cursor_line, render_modal_frame};

const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 11;

/// Render the text input modal
pub fn render_text_input_modal(frame: &mut Frame, modal: &TextInputModal) {
    let mf = render_modal_frame(
        frame,
        &modal.title,
        MODAL_WIDTH,
        MODAL_HEIGHT,
        Color::Cyan,
        &[
            Constraint::Length(1), // Spacing
            Constraint::Length(2), // Prompt
            Constraint::Length(1), // Spacing
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Help text
        ],
    );

    let prompt = Paragraph::new(Line::from(Span::styled(
        modal.prompt.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(prompt, mf.chunks[1]);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let input_inner = input_block.inner(mf.chunks[3]);
    frame.render_widget(input_block, mf.chunks[3]);

    let input_line = if modal.value.is_empty() && !modal.placeholder.is_empty() {
        let mut line = render_cursor_line("", 0, " ");
        line.spans.push(Span::styled(
            modal.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ));
        line
    } else {
        let scrolled =
            calculate_scroll(&modal.value, modal.cursor_pos, input_inner.width as usize);
        render_cursor_line(&scrolled.display_value, scrolled.cursor_pos, " ")
    };
    frame.render_widget(Paragraph::new(input_line), input_inner);

    let help = HelpText::new()
        .key("[Enter]", Color::Green, "Submit")
        .key("[Esc]", Color::Yellow, "Cancel")
        .build();
    frame.render_widget(help, mf.chunks[4]);
}

/// Handle key events for text input modal
pub fn handle_text_input_key(key: KeyEvent, modal: &mut TextInputModal) -> ModalResult {
    match key.code {
        KeyCode::Enter => ModalResult::Confirmed(modal.action, modal.value.clone()),
        KeyCode::Esc => ModalResult::Cancelled,
        KeyCode::Backspace => {
            modal.backspace();
            ModalResult::Continue
        }
        KeyCode::Delete => {
            modal.delete();
            ModalResult::Continue
        }
        KeyCode::Left => {
            modal.move_cursor_left();
            ModalResult::Continue
        }
        KeyCode::Right => {
            modal.move_cursor_right();
            ModalResult::Continue
        }
        KeyCode::Home => {
            modal.move_cursor_home();
            ModalResult::Continue
        }
        KeyCode::End => {
            modal.move_cursor_end();
            ModalResult::Continue
        }
        KeyCode::Char(c) => {
            modal.insert_char(c);
            ModalResult::Continue
        }
        _ => ModalResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ModalAction;
    use edulab_core::quiz::QuestionId;

    #[test]
    fn test_typing_then_enter_confirms_value() {
        let action = ModalAction::SubmitAnswer(QuestionId::BasicWidth);
        let mut modal = TextInputModal::new("Q2", "Which is narrower?", "", action);

        for c in "3x^2".chars() {
            let result = handle_text_input_key(KeyEvent::from(KeyCode::Char(c)), &mut modal);
            assert_eq!(result, ModalResult::Continue);
        }
        // q is text here, not quit
        handle_text_input_key(KeyEvent::from(KeyCode::Char('q')), &mut modal);
        handle_text_input_key(KeyEvent::from(KeyCode::Backspace), &mut modal);

        assert_eq!(
            handle_text_input_key(KeyEvent::from(KeyCode::Enter), &mut modal),
            ModalResult::Confirmed(action, "3x^2".to_string())
        );
        assert_eq!(
            handle_text_input_key(KeyEvent::from(KeyCode::Esc), &mut modal),
            ModalResult::Cancelled
        );
    }
}
