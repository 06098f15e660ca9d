// Configuration type definitions

use serde::Deserialize;

/// Page the widget lives on; the search endpoint is resolved relative to it
pub const DEFAULT_PAGE_URL: &str = "http://localhost:8000/follows/";

/// Search endpoint, relative to the page URL
pub const DEFAULT_ENDPOINT: &str = "../search-users";

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Search endpoint configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub page_url: String,
    pub endpoint: String,
    /// Percent-encode the query instead of interpolating it verbatim
    pub encode_query: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            page_url: DEFAULT_PAGE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            encode_query: false,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}
