//! Command orchestration for warpwrap.
//!
//! The commands a host editor exposes, written against [`EditorHost`] so
//! any editor can drive them:
//! - [`wrap_selection`] - prompt for a tag and attributes, wrap every selection
//! - [`undo_last_wrap`] - put back the text the last wrap replaced
//! - [`open_preview_panel`] - show the interactive preview panel
//! - [`handle_panel_message`] - act on a message posted by that panel
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        host editor                              │
//! │  selections, atomic edits, prompts, notices, panel hosting      │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │ EditorHost
//!                                ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    warpwrap-app (this crate)                    │
//! │  commands, prompt flow, undo bookkeeping via Session            │
//! └─────────────────────────────────────────────────────────────────┘
//!            │              │              │              │
//!            ▼              ▼              ▼              ▼
//!     ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐
//!     │   wrap   │  │  config  │  │  panel   │  │ session  │
//!     └──────────┘  └──────────┘  └──────────┘  └──────────┘
//! ```
//!
//! Commands never return errors: failures are logged, reported through
//! [`EditorHost::notify`] and summarized as a [`CommandOutcome`].

mod apply;
mod commands;
pub mod notices;
mod prompts;

#[cfg(test)]
mod test_host;

pub use commands::{handle_panel_message, open_preview_panel, undo_last_wrap, wrap_selection};

// Re-export commonly used types
pub use warpwrap_config::Config;
pub use warpwrap_core::{CommandOutcome, EditorHost, NoticeLevel};
pub use warpwrap_session::Session;

/// Load the project configuration for the host's workspace.
///
/// Without a workspace the built-in defaults are used. A malformed file is
/// reported to the user and the defaults are used instead.
pub fn load_config<H: EditorHost + ?Sized>(host: &mut H) -> Config {
    let Some(root) = host.workspace_root() else {
        return Config::default();
    };

    match Config::load_from(&root) {
        Ok(config) => config,
        Err(e) => {
            warpwrap_logger::error(format!("{:#}", e));
            host.notify(NoticeLevel::Error, notices::CONFIG_PARSE_ERROR);
            Config::default()
        }
    }
}
