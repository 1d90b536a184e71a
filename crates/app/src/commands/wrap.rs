use anyhow::Result;

use warpwrap_core::{CommandOutcome, EditorHost, NoticeLevel, Selection};
use warpwrap_session::Session;
use warpwrap_wrap::WrapRequest;

use crate::apply::{apply_wrap, finish_wrap};
use crate::{load_config, notices, prompts};

/// Prompt for a tag and attributes, then wrap the current selections.
///
/// Empty selections are skipped; if every selection is empty nothing is
/// prompted and nothing changes. All replacements land as one edit, which
/// becomes the single undoable action.
pub fn wrap_selection<H: EditorHost + ?Sized>(
    host: &mut H,
    session: &mut Session,
) -> CommandOutcome {
    match run(host, session) {
        Ok(outcome) => outcome,
        Err(e) => {
            warpwrap_logger::error(format!("Error wrapping selection: {:#}", e));
            host.notify(NoticeLevel::Error, notices::WRAP_FAILED);
            CommandOutcome::Failed
        }
    }
}

fn run<H: EditorHost + ?Sized>(host: &mut H, session: &mut Session) -> Result<CommandOutcome> {
    let config = load_config(host);

    let selections = host.selections();
    if selections.iter().all(Selection::is_empty) {
        host.notify(NoticeLevel::Info, notices::NOTHING_SELECTED);
        return Ok(CommandOutcome::NothingSelected);
    }

    let Some(tag) = prompts::choose_tag(host, &config, session.last_used()) else {
        return Ok(CommandOutcome::Cancelled);
    };

    // The primary selection's line drives the attribute scan
    let cursor_line = selections[0].start().line;
    let defaults = prompts::attribute_defaults(host, cursor_line, session.last_used());
    let Some(attributes) = prompts::ask_attributes(host, defaults) else {
        return Ok(CommandOutcome::Cancelled);
    };

    session.remember(&tag, &attributes.class_name, &attributes.id_name);

    let request = WrapRequest::new(tag, attributes, config.jsx_support);
    let targets = wrap_targets(&selections, config.bulk_wrap);
    let edits = apply_wrap(host, session, &targets, &request, config.template())?;

    finish_wrap(host, &config, &request.tag);
    Ok(CommandOutcome::Applied { edits })
}

/// Non-empty selections to wrap; only the first one unless `bulk_wrap`
fn wrap_targets(selections: &[Selection], bulk_wrap: bool) -> Vec<Selection> {
    let non_empty = selections.iter().copied().filter(|s| !s.is_empty());
    if bulk_wrap {
        non_empty.collect()
    } else {
        non_empty.take(1).collect()
    }
}
