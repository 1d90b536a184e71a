use anyhow::Result;

use warpwrap_core::{CommandOutcome, EditorHost, NoticeLevel};
use warpwrap_panel::{preview_panel, PanelMessage};
use warpwrap_session::Session;
use warpwrap_wrap::{is_valid_tag_name, AttributeSet, WrapRequest};

use crate::apply::{apply_wrap, finish_wrap};
use crate::{load_config, notices};

/// Show the interactive preview panel with the configured tags.
pub fn open_preview_panel<H: EditorHost + ?Sized>(host: &mut H) -> CommandOutcome {
    let config = load_config(host);
    let view = preview_panel(&config.default_tags);

    match host.show_panel(&view) {
        Ok(()) => {
            warpwrap_logger::debug(format!("Opened panel {}", view.view_type));
            CommandOutcome::None
        }
        Err(e) => {
            warpwrap_logger::error(format!("Error opening panel: {:#}", e));
            host.notify(NoticeLevel::Error, notices::PANEL_FAILED);
            CommandOutcome::Failed
        }
    }
}

/// Act on a raw message posted by the preview panel.
///
/// Unknown or malformed messages are logged and ignored. A `wrapText`
/// message wraps the primary selection only and is undoable like any other
/// wrap.
pub fn handle_panel_message<H: EditorHost + ?Sized>(
    host: &mut H,
    session: &mut Session,
    raw: &str,
) -> CommandOutcome {
    let message = match PanelMessage::parse(raw) {
        Ok(message) => message,
        Err(e) => {
            warpwrap_logger::warn(format!("Ignoring panel message: {:#}", e));
            return CommandOutcome::None;
        }
    };

    match message {
        PanelMessage::WrapText { ref tag, .. } => {
            let attributes = message.attributes();
            match wrap_primary(host, session, tag, attributes) {
                Ok(outcome) => outcome,
                Err(e) => {
                    warpwrap_logger::error(format!("Error wrapping from panel: {:#}", e));
                    host.notify(NoticeLevel::Error, notices::WRAP_FAILED);
                    CommandOutcome::Failed
                }
            }
        }
    }
}

fn wrap_primary<H: EditorHost + ?Sized>(
    host: &mut H,
    session: &mut Session,
    tag: &str,
    attributes: AttributeSet,
) -> Result<CommandOutcome> {
    let tag = tag.trim();
    if !is_valid_tag_name(tag) {
        host.notify(NoticeLevel::Warning, &notices::invalid_tag(tag));
        return Ok(CommandOutcome::Cancelled);
    }

    let config = load_config(host);
    let primary = match host.selections().first() {
        Some(selection) if !selection.is_empty() => *selection,
        _ => {
            host.notify(NoticeLevel::Info, notices::NOTHING_SELECTED);
            return Ok(CommandOutcome::NothingSelected);
        }
    };

    session.remember(tag, &attributes.class_name, &attributes.id_name);

    let request = WrapRequest::new(tag, attributes, config.jsx_support);
    let edits = apply_wrap(host, session, &[primary], &request, config.template())?;

    finish_wrap(host, &config, &request.tag);
    Ok(CommandOutcome::Applied { edits })
}
