//! User-visible notice texts.

pub const NOTHING_SELECTED: &str = "No text selected!";
pub const NOTHING_TO_UNDO: &str = "No previous wrap action to undo.";
pub const UNDONE: &str = "Last wrap action undone.";
pub const WRAP_FAILED: &str =
    "An error occurred while wrapping selection. Check the log for details.";
pub const UNDO_STALE: &str =
    "The document changed since the last wrap, so it cannot be undone.";
pub const UNDO_FAILED: &str = "Could not undo the last wrap. Check the log for details.";
pub const PANEL_FAILED: &str = "Could not open the preview panel. Check the log for details.";
pub const CONFIG_PARSE_ERROR: &str = "Error parsing warpwrap.json, using default settings.";

pub fn wrapped(tag: &str) -> String {
    format!("Wrapped selection(s) with <{}> successfully!", tag)
}

pub fn invalid_tag(tag: &str) -> String {
    format!("\"{}\" is not a valid tag name.", tag)
}
