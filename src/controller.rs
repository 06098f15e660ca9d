//! Suggestion controller
//!
//! Binds one username field, one suggestion list and one lookup channel.
//! Input at or above [`MIN_QUERY_CHARS`] issues a lookup; every response
//! replaces the list wholesale; picking an item copies its username into the
//! field and hides the list.
//!
//! Lookups are never cancelled or sequenced. A slow response to an earlier
//! query can land after, and overwrite, the list built from a later one.

use crate::input::InputState;
use crate::lookup::{LookupChannel, LookupResponse};
use crate::suggestions::{Suggestion, SuggestionList, strip_marker};

/// Shortest query that triggers a lookup
pub const MIN_QUERY_CHARS: usize = 3;

/// What a click on the suggestion list landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The item at this index
    Item(usize),
    /// The list itself, outside any item
    Container,
}

pub struct SuggestionController {
    input: InputState,
    list: SuggestionList,
    lookups: LookupChannel,
    /// Highest request id whose response has been applied
    last_applied: u64,
    pending: usize,
}

impl SuggestionController {
    /// Bind the controller to its elements
    ///
    /// Returns `None`, without binding anything, when either element is
    /// missing.
    pub fn attach(
        input: Option<InputState>,
        list: Option<SuggestionList>,
        lookups: LookupChannel,
    ) -> Option<Self> {
        let (Some(input), Some(list)) = (input, list) else {
            log::debug!("Suggestion controller not attached: missing input or list");
            return None;
        };

        Some(Self {
            input,
            list,
            lookups,
            last_applied: 0,
            pending: 0,
        })
    }

    /// Unbind and hand the elements back
    pub fn detach(self) -> (InputState, SuggestionList) {
        log::debug!(
            "Suggestion controller detached with {} lookups outstanding",
            self.pending
        );
        (self.input, self.list)
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn list(&self) -> &SuggestionList {
        &self.list
    }

    /// Current value of the username field
    pub fn query(&self) -> &str {
        self.input.value()
    }

    /// Lookups issued whose response has not arrived yet
    pub fn pending_lookups(&self) -> usize {
        self.pending
    }

    /// The field's value changed
    pub fn on_input(&mut self) {
        let query = self.input.value().to_string();

        if query.chars().count() < MIN_QUERY_CHARS {
            self.list.hide();
            return;
        }

        if self.lookups.issue(&query).is_some() {
            self.pending += 1;
        }
    }

    /// A lookup finished
    pub fn on_lookup_response(&mut self, response: LookupResponse) {
        self.pending = self.pending.saturating_sub(1);

        match response {
            LookupResponse::Users {
                request_id,
                query,
                usernames,
            } => {
                if request_id < self.last_applied {
                    log::debug!(
                        "Applying lookup {} for {:?} after newer lookup {}",
                        request_id,
                        query,
                        self.last_applied
                    );
                }
                self.last_applied = self.last_applied.max(request_id);

                if usernames.is_empty() || query.is_empty() {
                    self.list.hide();
                } else {
                    self.list.show();
                }

                self.list
                    .replace(usernames.into_iter().map(Suggestion::new).collect());
            }
            LookupResponse::Failed {
                request_id,
                query,
                error,
            } => {
                log::warn!("Lookup {} for {:?} failed: {}", request_id, query, error);
            }
        }
    }

    /// A click on the suggestion list
    ///
    /// Returns the picked username, if the click landed on an item.
    pub fn on_click(&mut self, target: ClickTarget) -> Option<String> {
        let ClickTarget::Item(index) = target else {
            return None;
        };

        let label = self.list.label_at(index)?;

        // A programmatic write: no input event, no lookup
        self.input.set_value(strip_marker(&label));
        self.list.hide();

        // The field may have normalised the text
        Some(self.input.value().to_string())
    }

    pub fn select_next(&mut self) {
        if self.list.is_visible() {
            self.list.select_next();
        }
    }

    pub fn select_previous(&mut self) {
        if self.list.is_visible() {
            self.list.select_previous();
        }
    }

    /// Pick the highlighted item, as if it had been clicked
    pub fn accept_selected(&mut self) -> Option<String> {
        self.list.selected()?;
        let index = self.list.selected_index();
        self.on_click(ClickTarget::Item(index))
    }

    pub fn dismiss(&mut self) {
        self.list.hide();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
