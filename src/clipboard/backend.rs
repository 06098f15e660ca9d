//! Clipboard backend selection and error types

use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

/// Result type for clipboard operations
pub type ClipboardResult = Result<(), ClipboardError>;

/// Errors that can occur during clipboard operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("system clipboard is not available")]
    SystemUnavailable,
    #[error("failed to write to the clipboard")]
    WriteError,
}

/// Copy text to clipboard using the specified backend
///
/// `Auto` tries the OS clipboard first and falls back to OSC 52.
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|_| osc52::copy(text)),
    }
}
