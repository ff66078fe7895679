use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::actions::{self, ActionResult};
use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::config::AppConfig;
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::screens::{
    Screen, basic_form::BasicFormScreen, lotto::LottoScreen, standard_form::StandardFormScreen,
};
use crate::state::{AppState, ModalAction, ModalState, TabId};

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    lotto_screen: LottoScreen,
    basic_form_screen: BasicFormScreen,
    standard_form_screen: StandardFormScreen,
}

impl App {
    pub fn new(config: &AppConfig, data_dir: &Path) -> Self {
        Self {
            state: AppState::new(config, data_dir),
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            lotto_screen: LottoScreen::new(),
            basic_form_screen: BasicFormScreen::new(),
            standard_form_screen: StandardFormScreen::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!(tab = self.active_screen().title(), "Starting UI loop");
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn active_screen(&self) -> &dyn Screen {
        match self.state.active_tab {
            TabId::Lotto => &self.lotto_screen,
            TabId::BasicForm => &self.basic_form_screen,
            TabId::StandardForm => &self.standard_form_screen,
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);

        render_modal(frame, &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Lotto => self.lotto_screen.render(frame, area, &self.state),
            TabId::BasicForm => self.basic_form_screen.render(frame, area, &self.state),
            TabId::StandardForm => self.standard_form_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.state.exit = true;
            return;
        }

        // Modal gets every other key while open
        if !matches!(self.state.modal, ModalState::None) {
            match handle_modal_key(key_event, &mut self.state) {
                ModalResult::Confirmed(action, value) => {
                    self.handle_modal_result(action, value);
                }
                ModalResult::Cancelled => {
                    self.state.modal = ModalState::None;
                }
                ModalResult::Continue => {}
            }
            return;
        }

        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        let result = match self.state.active_tab {
            TabId::Lotto => self.lotto_screen.handle_key(key_event, &mut self.state),
            TabId::BasicForm => self.basic_form_screen.handle_key(key_event, &mut self.state),
            TabId::StandardForm => self
                .standard_form_screen
                .handle_key(key_event, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true
        }
    }

    fn handle_modal_result(&mut self, action: ModalAction, value: String) {
        let result = match action {
            ModalAction::SubmitAnswer(id) => {
                actions::handle_submit_answer(&mut self.state, id, &value)
            }
        };
        self.apply_action_result(result);
    }

    fn apply_action_result(&mut self, result: ActionResult) {
        match result {
            ActionResult::Done(modal) => {
                self.state.modal = modal.unwrap_or(ModalState::None);
            }
            ActionResult::Error(msg) => {
                self.state.set_error(msg);
                self.state.modal = ModalState::None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MessageKind;

    fn app() -> App {
        let config = AppConfig {
            seed: Some(11),
            ..AppConfig::default()
        };
        App::new(&config, Path::new("/nonexistent"))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::from(code));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_tabs_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.state().active_tab, TabId::StandardForm);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.state().active_tab, TabId::BasicForm);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.state().active_tab, TabId::BasicForm);

        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state().exit);
    }

    #[test]
    fn test_ctrl_c_quits_from_text_input() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.state().modal, ModalState::TextInput(_)));

        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state().exit);
        match &app.state().modal {
            ModalState::TextInput(modal) => assert!(modal.value.is_empty()),
            other => panic!("expected text input, got {:?}", other),
        }
    }

    #[test]
    fn test_esc_clears_error() {
        let mut app = app();
        app.state.set_error("boom".to_string());
        press(&mut app, KeyCode::Esc);
        assert!(app.state().error_message.is_none());
    }

    #[test]
    fn test_basic_quiz_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));

        // Q1 picker: move to "Opens downward" and submit
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        match &app.state().modal {
            ModalState::Message(modal) => assert_eq!(modal.kind, MessageKind::Success),
            other => panic!("expected feedback, got {:?}", other),
        }
        press(&mut app, KeyCode::Esc);

        // Q2 text input; q is typed, not a quit
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Y = 3 x^2 q");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert!(!app.state().exit);

        match &app.state().modal {
            ModalState::Message(modal) => assert_eq!(modal.title, "All correct!"),
            other => panic!("expected completion message, got {:?}", other),
        }
        assert!(app.state().basic.output.quiz.all_correct());
    }

    #[test]
    fn test_wrong_answer_shows_error_feedback() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        match &app.state().modal {
            ModalState::Message(modal) => {
                assert_eq!(modal.kind, MessageKind::Error);
                assert!(modal.message.contains("x-(-3)"));
            }
            other => panic!("expected feedback, got {:?}", other),
        }
        assert!(!app.state().standard.output.quiz.all_correct());
    }
}
