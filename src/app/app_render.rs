use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::input::input_render;
use crate::notification::render_notification;
use crate::suggestions::suggestion_render;

const HELP_PICKING: &str =
    " ↑/↓: Select | Enter/Tab: Pick | Esc: Close | Ctrl+Y: Copy | Ctrl+C: Quit";
const HELP_TYPING: &str = " Enter: Accept | Ctrl+Y: Copy | Esc: Quit";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        // Regions are rebuilt from scratch every frame
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (input_area, body_area, help_area) = (layout[0], layout[1], layout[2]);

        match self.controller.as_mut() {
            Some(controller) => {
                let pending = controller.pending_lookups();
                input_render::render_field(controller.input_mut(), frame, input_area, pending);
                self.layout_regions.input_field = Some(input_area);

                self.layout_regions.suggestions =
                    suggestion_render::render_popup(controller.list(), frame, input_area);
            }
            None => render_detached(frame, body_area),
        }

        self.render_help_line(frame, help_area);

        render_notification(frame, &mut self.notification);
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let picking = self
            .controller
            .as_ref()
            .is_some_and(|c| c.list().is_visible());
        let help_text = if picking { HELP_PICKING } else { HELP_TYPING };

        let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, area);
    }
}

fn render_detached(frame: &mut Frame, area: Rect) {
    let message = Paragraph::new("No username field to attach to")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(message, area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
