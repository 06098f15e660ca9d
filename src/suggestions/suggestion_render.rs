//! Suggestion popup rendering
//!
//! Draws the suggestion list directly under the username field.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::SuggestionList;
use crate::widgets::popup;

// Suggestion popup display constants
pub const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const MAX_POPUP_WIDTH: usize = 48;
const MIN_POPUP_WIDTH: usize = 16;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;

/// Where the popup landed and which item is drawn in its first row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupPlacement {
    pub area: Rect,
    pub scroll_offset: usize,
}

/// Render the suggestion popup below the input field
///
/// Returns `None` when the list is hidden or there is no room under the field.
pub fn render_popup(
    list: &SuggestionList,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<PopupPlacement> {
    if !list.is_visible() {
        return None;
    }

    let frame_area = frame.area();
    let room_below = frame_area.bottom().saturating_sub(input_area.bottom());
    if room_below <= POPUP_BORDER_HEIGHT {
        return None;
    }

    let max_rows = (room_below.saturating_sub(POPUP_BORDER_HEIGHT)) as usize;
    let visible_count = list.len().min(MAX_VISIBLE_SUGGESTIONS).min(max_rows);
    let popup_height = visible_count as u16 + POPUP_BORDER_HEIGHT;

    let labels: Vec<String> = list.items().iter().map(|s| s.label()).collect();
    let max_label_width = labels
        .iter()
        .map(|label| label.width())
        .max()
        .unwrap_or(0)
        .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
    let popup_width = max_label_width as u16 + POPUP_PADDING;

    let area = popup::popup_below_anchor(
        input_area,
        frame_area,
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );

    let scroll_offset = list.scroll_offset(visible_count);

    let items: Vec<ListItem> = labels
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_count)
        .map(|(i, label)| {
            let style = if i == list.selected_index() {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).bg(Color::Black)
            };
            ListItem::new(Line::from(Span::styled(format!(" {} ", label), style)))
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, area);

    let title = if list.len() > visible_count {
        format!(" Suggestions {}/{} ", list.selected_index() + 1, list.len())
    } else {
        " Suggestions ".to_string()
    };

    let widget = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(widget, area);

    Some(PopupPlacement {
        area,
        scroll_offset,
    })
}

#[cfg(test)]
#[path = "suggestion_render_tests.rs"]
mod suggestion_render_tests;
