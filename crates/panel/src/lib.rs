//! Interactive preview panel for warpwrap.
//!
//! The panel is a self-contained HTML document: the user picks a tag and
//! types class, id and style values, sees a live preview, and submits a
//! single `wrapText` message back to the host. This crate renders that
//! document, mirrors its preview formatting, and parses its messages.

mod html;
mod message;

pub use html::{preview_markup, render_panel, PANEL_TITLE, PANEL_VIEW_TYPE, PREVIEW_PLACEHOLDER};
pub use message::PanelMessage;

use warpwrap_core::PanelView;

/// Build the panel view offering `tags` in its dropdown.
///
/// The `custom` entry of the tag list is a prompt-only choice and is left out.
pub fn preview_panel(tags: &[String]) -> PanelView {
    let tags: Vec<&str> = tags
        .iter()
        .map(String::as_str)
        .filter(|tag| *tag != "custom")
        .collect();

    PanelView {
        view_type: PANEL_VIEW_TYPE.to_string(),
        title: PANEL_TITLE.to_string(),
        html: render_panel(&tags),
    }
}
