use ratatui::layout::Rect;

use crate::suggestions::suggestion_render::PopupPlacement;

/// Clickable UI components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    Suggestions,
}

/// Screen areas of the components drawn on the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    /// Only set while the suggestion popup is on screen
    pub suggestions: Option<PopupPlacement>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.input_field = None;
        self.suggestions = None;
    }
}
