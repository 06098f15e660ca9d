//! Transient notifications
//!
//! Short messages ("Copied username!") shown in the bottom-right corner for a
//! moment and then dropped.

mod render;
mod state;

pub use render::render_notification;
pub use state::NotificationState;
