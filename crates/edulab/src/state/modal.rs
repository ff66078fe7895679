//! Modal types for quiz answers and messages.
use super::ModalAction;

#[derive(Debug, Default)]
pub enum ModalState {
    #[default]
    None,
    TextInput(TextInputModal),
    Message(MessageModal),
    Picker(PickerModal),
}

/// Single-line text entry. `cursor_pos` counts characters, not bytes.
#[derive(Debug)]
pub struct TextInputModal {
    pub title: String,
    pub prompt: String,
    /// Greyed-out hint shown while the value is empty
    pub placeholder: String,
    pub value: String,
    pub cursor_pos: usize,
    pub action: ModalAction,
}

impl TextInputModal {
    pub fn new(title: &str, prompt: &str, default_value: &str, action: ModalAction) -> Self {
        let value = default_value.to_string();
        let cursor_pos = value.chars().count();
        Self {
            title: title.to_string(),
            prompt: prompt.to_string(),
            placeholder: String::new(),
            value,
            cursor_pos,
            action,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor_pos);
        self.value.insert(offset, c);
        self.cursor_pos += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let offset = self.byte_offset(self.cursor_pos);
            self.value.remove(offset);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.char_len() {
            let offset = self.byte_offset(self.cursor_pos);
            self.value.remove(offset);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.char_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.char_len();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug)]
pub struct MessageModal {
    pub title: String,
    pub message: String,
    pub kind: MessageKind,
}

impl MessageModal {
    fn new(title: &str, message: &str, kind: MessageKind) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            kind,
        }
    }

    pub fn success(title: &str, message: &str) -> Self {
        Self::new(title, message, MessageKind::Success)
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self::new(title, message, MessageKind::Error)
    }
}

// ========== PickerModal ==========

#[derive(Debug)]
pub struct PickerModal {
    pub title: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub selected_index: usize,
    pub action: ModalAction,
}

impl PickerModal {
    pub fn new(title: &str, prompt: &str, options: Vec<String>, action: ModalAction) -> Self {
        Self {
            title: title.to_string(),
            prompt: prompt.to_string(),
            options,
            selected_index: 0,
            action,
        }
    }

    pub fn move_down(&mut self) {
        if !self.options.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.options.len();
        }
    }

    pub fn move_up(&mut self) {
        if !self.options.is_empty() {
            self.selected_index = self
                .selected_index
                .checked_sub(1)
                .unwrap_or(self.options.len() - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edulab_core::quiz::QuestionId;

    const ACTION: ModalAction = ModalAction::SubmitAnswer(QuestionId::BasicWidth);

    #[test]
    fn test_text_input_editing() {
        let mut modal = TextInputModal::new("Answer", "Type it", "", ACTION);
        for c in "y=3x^2".chars() {
            modal.insert_char(c);
        }
        assert_eq!(modal.value, "y=3x^2");

        modal.move_cursor_home();
        modal.delete();
        modal.delete();
        assert_eq!(modal.value, "3x^2");
        assert_eq!(modal.cursor_pos, 0);

        modal.move_cursor_end();
        modal.backspace();
        assert_eq!(modal.value, "3x^");
    }

    #[test]
    fn test_text_input_handles_multibyte_chars() {
        let mut modal = TextInputModal::new("Answer", "", "3x²", ACTION);
        assert_eq!(modal.cursor_pos, 3);
        modal.move_cursor_left();
        modal.insert_char(' ');
        assert_eq!(modal.value, "3x ²");
        modal.move_cursor_end();
        modal.backspace();
        assert_eq!(modal.value, "3x ");
    }

    #[test]
    fn test_picker_wraps() {
        let options = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut picker = PickerModal::new("Pick", "", options, ACTION);
        picker.move_up();
        assert_eq!(picker.selected_index, 2);
        picker.move_down();
        assert_eq!(picker.selected_index, 0);
    }
}
