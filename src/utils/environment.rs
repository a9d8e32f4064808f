use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "EVENT_FINDER_DATA_DIR";

const APP_DIR_NAME: &str = "event-finder";

/// Directory holding persisted feature state.
///
/// Resolution order: `EVENT_FINDER_DATA_DIR`, the platform data directory,
/// then `$HOME/.event-finder`.
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(DATA_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    if let Some(base) = dirs::data_dir() {
        return Ok(base.join(APP_DIR_NAME));
    }

    let home = env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(format!(".{}", APP_DIR_NAME)))
}
