//! Input field rendering

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use super::InputState;

/// Render the username field; `pending_lookups` drives the activity hint
pub fn render_field(input: &mut InputState, frame: &mut Frame, area: Rect, pending_lookups: usize) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Username ")
        .border_style(Style::default().fg(Color::Cyan));

    if pending_lookups > 0 {
        block = block.title_top(
            Line::from(vec![Span::styled(
                " searching… ",
                Style::default().fg(Color::Yellow),
            )])
            .alignment(Alignment::Right),
        );
    }

    input.textarea.set_block(block);
    frame.render_widget(&input.textarea, area);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
