use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for usersuggest
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    #[error("Invalid page URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid config file {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SuggestError {
    fn from(err: std::io::Error) -> Self {
        SuggestError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
