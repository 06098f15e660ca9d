use std::sync::mpsc::{Receiver, TryRecvError};

use crate::config::{ClipboardBackend, Config};
use crate::controller::SuggestionController;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::lookup::{LookupChannel, LookupResponse};
use crate::notification::NotificationState;
use crate::suggestions::SuggestionList;

/// Application state
pub struct App {
    /// `None` once detached (or if attaching found nothing to bind)
    pub controller: Option<SuggestionController>,
    pub response_rx: Receiver<LookupResponse>,
    pub layout_regions: LayoutRegions,
    pub notification: NotificationState,
    pub clipboard_backend: ClipboardBackend,
    pub should_quit: bool,
    /// Username confirmed with Enter, printed on exit
    pub accepted: Option<String>,
}

impl App {
    pub fn new(config: &Config, lookups: LookupChannel, response_rx: Receiver<LookupResponse>) -> Self {
        let controller = SuggestionController::attach(
            Some(InputState::new()),
            Some(SuggestionList::new()),
            lookups,
        );

        Self {
            controller,
            response_rx,
            layout_regions: LayoutRegions::new(),
            notification: NotificationState::new(),
            clipboard_backend: config.clipboard.backend,
            should_quit: false,
            accepted: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn accepted_username(&self) -> Option<&str> {
        self.accepted.as_deref()
    }

    /// Current value of the username field
    pub fn query(&self) -> &str {
        self.controller.as_ref().map_or("", |c| c.query())
    }

    /// Hand every lookup response that has arrived to the controller
    ///
    /// Never blocks. Responses arriving with no controller attached are
    /// dropped. Returns how many responses were taken off the channel.
    pub fn poll_lookups(&mut self) -> usize {
        let mut received = 0;

        loop {
            match self.response_rx.try_recv() {
                Ok(response) => {
                    received += 1;
                    match self.controller.as_mut() {
                        Some(controller) => controller.on_lookup_response(response),
                        None => log::debug!(
                            "Dropping lookup {}: no controller attached",
                            response.request_id()
                        ),
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        received
    }

    /// Unbind the controller, returning its elements
    pub fn detach(&mut self) -> Option<(InputState, SuggestionList)> {
        self.controller.take().map(SuggestionController::detach)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
