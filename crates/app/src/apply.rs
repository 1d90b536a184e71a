use anyhow::{Context, Result};

use warpwrap_config::Config;
use warpwrap_core::{EditorHost, NoticeLevel, Selection, TextEdit};
use warpwrap_session::{Session, UndoRecord};
use warpwrap_wrap::{transform, WrapRequest};

use crate::notices;

/// Wrap `targets` with one request as a single edit and make it undoable.
///
/// Every replacement is computed before the host is asked to change
/// anything. Returns the number of replaced ranges.
pub(crate) fn apply_wrap<H: EditorHost + ?Sized>(
    host: &mut H,
    session: &mut Session,
    targets: &[Selection],
    request: &WrapRequest,
    template: Option<&str>,
) -> Result<usize> {
    let mut edits: Vec<TextEdit> = Vec::with_capacity(targets.len());
    let mut prior_texts = Vec::with_capacity(targets.len());

    for selection in targets {
        let text = host.text_in(selection)?;
        let line_idx = selection.start().line;
        let line = host
            .line_text(line_idx)
            .with_context(|| format!("Line {} out of range", line_idx + 1))?;

        let wrapped = transform(&text, &line, request, template);
        warpwrap_logger::debug(format!("{:?} wrap at {}", wrapped.kind, selection));

        edits.push(TextEdit::new(*selection, wrapped.text));
        prior_texts.push(text);
    }

    let ranges = host.apply_edits(&edits)?;
    let wrapped_texts = edits.iter().map(|edit| edit.text.clone()).collect();
    session.record_wrap(UndoRecord::new(ranges, wrapped_texts, prior_texts)?);
    Ok(edits.len())
}

/// Post-edit steps shared by every wrap path
pub(crate) fn finish_wrap<H: EditorHost + ?Sized>(host: &mut H, config: &Config, tag: &str) {
    if config.auto_format {
        if let Err(e) = host.format_document() {
            warpwrap_logger::warn(format!("Format after wrap failed: {:#}", e));
        }
    }
    warpwrap_logger::info(format!("Wrapped selection(s) with <{}>", tag));
    host.notify(NoticeLevel::Info, &notices::wrapped(tag));
}
