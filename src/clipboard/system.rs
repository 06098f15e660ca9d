//! System clipboard backend (arboard)

use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardResult};

/// Copy text to the OS clipboard
///
/// Fails with `SystemUnavailable` in headless sessions.
pub fn copy(text: &str) -> ClipboardResult {
    let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;

    clipboard
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}
