use super::suggestion::Suggestion;

/// The rendered suggestion list: its items and whether it is shown
///
/// Hiding keeps the items; only [`SuggestionList::replace`] changes them.
#[derive(Debug, Clone, Default)]
pub struct SuggestionList {
    items: Vec<Suggestion>,
    visible: bool,
    selected_index: usize,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Clear every item, then append the new ones in order
    pub fn replace(&mut self, items: Vec<Suggestion>) {
        self.items.clear();
        self.items.extend(items);
        self.selected_index = 0;
    }

    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rendered label of the item at `index`
    pub fn label_at(&self, index: usize) -> Option<String> {
        self.items.get(index).map(Suggestion::label)
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Highlighted item, only while the list is shown
    pub fn selected(&self) -> Option<&Suggestion> {
        if self.visible {
            self.items.get(self.selected_index)
        } else {
            None
        }
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.items.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.items.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.items.len() - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    /// First item to draw so the highlight stays inside `viewport_rows`
    pub fn scroll_offset(&self, viewport_rows: usize) -> usize {
        if viewport_rows == 0 || self.selected_index < viewport_rows {
            0
        } else {
            self.selected_index + 1 - viewport_rows
        }
    }
}

#[cfg(test)]
#[path = "suggestion_state_tests.rs"]
mod suggestion_state_tests;
