use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::App;
use super::mouse_click;
use crate::clipboard::copy_to_clipboard;
use crate::layout::region_at;

impl App {
    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Only key presses, to avoid duplicates on terminals reporting releases
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        let Some(controller) = self.controller.as_mut() else {
            if key.code == KeyCode::Esc {
                self.should_quit = true;
            }
            return;
        };

        let list_visible = controller.list().is_visible();

        match key.code {
            KeyCode::Esc if list_visible => controller.dismiss(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Down if list_visible => controller.select_next(),
            KeyCode::Up if list_visible => controller.select_previous(),
            KeyCode::Enter | KeyCode::Tab if list_visible => {
                if let Some(username) = controller.accept_selected() {
                    log::debug!("Picked {:?} from the keyboard", username);
                }
            }
            KeyCode::Enter => {
                let query = controller.query();
                if !query.is_empty() {
                    self.accepted = Some(query.to_string());
                }
                self.should_quit = true;
            }
            // Keep the field single-line and tab-free
            KeyCode::Tab | KeyCode::BackTab => {}
            KeyCode::Char('m') | KeyCode::Char('j')
                if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            _ => {
                if controller.input_mut().handle_key(key) {
                    controller.on_input();
                }
            }
        }
    }

    /// Keys that work whatever the widget state; true if handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            KeyCode::Char('c') => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('y') => {
                self.copy_username();
                true
            }
            _ => false,
        }
    }

    fn copy_username(&mut self) {
        let query = self.query().to_string();
        if query.is_empty() {
            return;
        }

        match copy_to_clipboard(&query, self.clipboard_backend) {
            Ok(()) => self.notification.show("Copied username!"),
            Err(e) => log::warn!("Clipboard copy failed: {}", e),
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let region = region_at(&self.layout_regions, mouse.column, mouse.row);
            mouse_click::handle_click(self, region, mouse);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
