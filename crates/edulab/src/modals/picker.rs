use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

use crate::state::PickerModal;

use super::ModalResult;
use super::helpers::{HelpText, render_modal_frame};

const MODAL_WIDTH: u16 = 64;

/// Render the picker modal
pub fn render_picker_modal(frame: &mut Frame, modal: &PickerModal) {
    let list_height = (modal.options.len() as u16).clamp(3, 12);

    let mf = render_modal_frame(
        frame,
        &modal.title,
        MODAL_WIDTH,
        list_height + 9,
        Color::Cyan,
        &[
            Constraint::Length(1),           // Spacing
            Constraint::Length(2),           // Prompt
            Constraint::Length(1),           // Spacing
            Constraint::Length(list_height), // Options list
            Constraint::Length(1),           // Spacing
            Constraint::Length(2),           // Help text
        ],
    );

    let prompt = Paragraph::new(Span::styled(
        modal.prompt.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .wrap(Wrap { trim: true });
    frame.render_widget(prompt, mf.chunks[1]);

    let items: Vec<ListItem> = modal
        .options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let selected = idx == modal.selected_index;
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let prefix = if selected { "> " } else { "  " };
            ListItem::new(Line::from(Span::styled(format!("{prefix}{option}"), style)))
        })
        .collect();
    frame.render_widget(List::new(items), mf.chunks[3]);

    let help = Paragraph::new(vec![
        HelpText::new()
            .key("[j/k/↑/↓]", Color::DarkGray, "Navigate")
            .line(),
        HelpText::new()
            .key("[Enter]", Color::Green, "Submit")
            .key("[Esc]", Color::Yellow, "Cancel")
            .line(),
    ]);
    frame.render_widget(help, mf.chunks[5]);
}

/// Handle key events for picker modal
pub fn handle_picker_key(key: KeyEvent, modal: &mut PickerModal) -> ModalResult {
    match key.code {
        KeyCode::Enter => match modal.options.get(modal.selected_index) {
            Some(selected) => ModalResult::Confirmed(modal.action, selected.clone()),
            None => ModalResult::Cancelled,
        },
        KeyCode::Esc => ModalResult::Cancelled,
        KeyCode::Char('j') | KeyCode::Down => {
            modal.move_down();
            ModalResult::Continue
        }
        KeyCode::Char('k') | KeyCode::Up => {
            modal.move_up();
            ModalResult::Continue
        }
        KeyCode::Home => {
            modal.selected_index = 0;
            ModalResult::Continue
        }
        KeyCode::End => {
            modal.selected_index = modal.options.len().saturating_sub(1);
            ModalResult::Continue
        }
        _ => ModalResult::Continue,
    }
}
