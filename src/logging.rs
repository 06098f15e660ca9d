//! File-backed logging
//!
//! Log lines go to `<cache_dir>/usersuggest/usersuggest.log`; writing them to
//! stderr would tear through the alternate screen.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

use crate::error::SuggestError;

/// Environment variable holding the log filter (env_logger syntax)
pub const LOG_ENV: &str = "USERSUGGEST_LOG";

const DEFAULT_FILTER: &str = "warn";
const LOG_FILE: &str = "usersuggest.log";

/// Location of the log file, if the platform has a cache directory
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("usersuggest").join(LOG_FILE))
}

/// Install the global logger. Returns the file being written to.
pub fn init() -> Result<PathBuf, SuggestError> {
    let path = log_path()
        .ok_or_else(|| SuggestError::Io("no cache directory for the log file".to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Builder::from_env(Env::default().filter_or(LOG_ENV, DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| SuggestError::Io(e.to_string()))?;

    Ok(path)
}
