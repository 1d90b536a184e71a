//! XDG Base Directory support for warpwrap.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "warpwrap";

/// Get the cache directory following XDG conventions.
///
/// Returns `$XDG_CACHE_HOME/warpwrap` or `~/.cache/warpwrap`. Holds the log
/// file and rendered preview panels.
pub fn get_cache_dir() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine cache directory")
}
