//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory (or an explicit
//! path). A missing default file means defaults; an explicit path must exist.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SuggestError;

pub use types::{
    ClipboardBackend, ClipboardConfig, Config, DEFAULT_ENDPOINT, DEFAULT_PAGE_URL, SearchConfig,
};

const APP_DIR: &str = "usersuggest";
const CONFIG_FILE: &str = "config.toml";

/// Default config file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load configuration
///
/// With `Some(path)` the file must exist and parse. With `None` the default
/// location is tried and silently skipped when absent.
pub fn load_config(path: Option<&Path>) -> Result<Config, SuggestError> {
    match path {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        },
    }
}

fn read_config(path: &Path) -> Result<Config, SuggestError> {
    let contents = fs::read_to_string(path).map_err(|e| SuggestError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let config = toml::from_str(&contents).map_err(|e| SuggestError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}
