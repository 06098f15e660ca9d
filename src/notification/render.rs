use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::NotificationState;
use crate::widgets::popup;

const NOTIFICATION_HEIGHT: u16 = 3;
const NOTIFICATION_MARGIN: u16 = 1;

pub fn render_notification(frame: &mut Frame, state: &mut NotificationState) {
    let Some(notification) = state.current() else {
        return;
    };

    let width = notification.message.width() as u16 + 4;
    let area = popup::popup_bottom_right(
        frame.area(),
        width,
        NOTIFICATION_HEIGHT,
        NOTIFICATION_MARGIN,
    );

    let paragraph = Paragraph::new(format!(" {} ", notification.message))
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );

    popup::clear_area(frame, area);
    frame.render_widget(paragraph, area);
}
