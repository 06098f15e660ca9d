use ratatui::crossterm::event::KeyEvent;
use ratatui::style::{Color, Style};
use tui_textarea::{CursorMove, TextArea};

/// The username text field
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("start typing a username");
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

        Self { textarea }
    }

    /// Current raw value of the field
    pub fn value(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Overwrite the value and leave the cursor at its end
    ///
    /// This is a programmatic write: callers decide whether it counts as input.
    pub fn set_value(&mut self, value: &str) {
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(value.replace(['\r', '\n'], " "));
    }

    /// Feed a key to the text area. Returns true if the value changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
