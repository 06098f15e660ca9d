//! Mouse click handling
//!
//! Clicks are delegated to the suggestion list as a whole; the row decides
//! whether an item or the container was hit.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::layout::{Region, suggestion_target};

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::Suggestions) => click_suggestions(app, mouse.row),
        // Focus never leaves the field; nothing else is clickable
        Some(Region::InputField) | None => {}
    }
}

fn click_suggestions(app: &mut App, row: u16) {
    let target = suggestion_target(&app.layout_regions, row);
    let Some(controller) = app.controller.as_mut() else {
        return;
    };

    if let Some(username) = controller.on_click(target) {
        log::debug!("Picked {:?} with the mouse", username);
        // The popup is gone until the next frame redraws the layout
        app.layout_regions.suggestions = None;
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
