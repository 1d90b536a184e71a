use warpwrap_core::{CommandOutcome, EditorHost, NoticeLevel};
use warpwrap_session::Session;

use crate::notices;

/// Put back the text replaced by the most recent wrap.
///
/// Only one action is kept, so a second undo in a row finds nothing. If the
/// wrapped text is no longer where the wrap left it (a formatter or a later
/// edit moved it), nothing is restored. Either way a failed undo drops the
/// record rather than retrying it later.
pub fn undo_last_wrap<H: EditorHost + ?Sized>(
    host: &mut H,
    session: &mut Session,
) -> CommandOutcome {
    let Some(record) = session.take_undo() else {
        host.notify(NoticeLevel::Warning, notices::NOTHING_TO_UNDO);
        return CommandOutcome::NothingToUndo;
    };

    if !record.is_current(|range| host.text_in(range).ok()) {
        warpwrap_logger::warn("Undo skipped: wrapped text no longer matches the recorded ranges");
        host.notify(NoticeLevel::Error, notices::UNDO_STALE);
        return CommandOutcome::Failed;
    }

    match host.apply_edits(&record.restoring_edits()) {
        Ok(_) => {
            warpwrap_logger::info(format!("Undid wrap of {} range(s)", record.len()));
            host.notify(NoticeLevel::Info, notices::UNDONE);
            CommandOutcome::Applied {
                edits: record.len(),
            }
        }
        Err(e) => {
            warpwrap_logger::error(format!("Error undoing wrap: {:#}", e));
            host.notify(NoticeLevel::Error, notices::UNDO_FAILED);
            CommandOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::wrap_selection;
    use crate::test_host::{sel, FakeHost};
    use warpwrap_core::TextEdit;

    #[test]
    fn test_nothing_to_undo() {
        let mut host = FakeHost::new("abc", Vec::new());

        let outcome = undo_last_wrap(&mut host, &mut Session::new());

        assert_eq!(outcome, CommandOutcome::NothingToUndo);
        assert_eq!(
            host.notices,
            vec![(NoticeLevel::Warning, notices::NOTHING_TO_UNDO.to_string())]
        );
        assert_eq!(host.text(), "abc");
    }

    #[test]
    fn test_undo_restores_every_selection() {
        let original = "  one\n  two\nthree";
        let mut host = FakeHost::new(original, vec![sel(0, 2, 0, 5), sel(2, 0, 2, 5)])
            .answer_pick("li");
        let mut session = Session::new();
        wrap_selection(&mut host, &mut session);
        assert_ne!(host.text(), original);

        let outcome = undo_last_wrap(&mut host, &mut session);

        assert_eq!(outcome, CommandOutcome::Applied { edits: 2 });
        assert_eq!(host.text(), original);
        assert_eq!(
            host.notices.last(),
            Some(&(NoticeLevel::Info, notices::UNDONE.to_string()))
        );
    }

    #[test]
    fn test_undo_restores_surrounding_whitespace() {
        // A fresh wrap trims the text; undo still brings back the original
        let original = "x  padded  y";
        let mut host = FakeHost::new(original, vec![sel(0, 1, 0, 11)]).answer_pick("b");
        let mut session = Session::new();
        wrap_selection(&mut host, &mut session);

        undo_last_wrap(&mut host, &mut session);

        assert_eq!(host.text(), original);
    }

    #[test]
    fn test_second_undo_warns() {
        let mut host = FakeHost::new("Hello", vec![sel(0, 0, 0, 5)]).answer_pick("div");
        let mut session = Session::new();
        wrap_selection(&mut host, &mut session);

        assert_eq!(
            undo_last_wrap(&mut host, &mut session),
            CommandOutcome::Applied { edits: 1 }
        );
        assert_eq!(
            undo_last_wrap(&mut host, &mut session),
            CommandOutcome::NothingToUndo
        );
        assert_eq!(host.text(), "Hello");
    }

    #[test]
    fn test_undo_refuses_after_formatter_moved_text() {
        let mut host = FakeHost {
            format_prefix: Some("<!doctype html>\n".to_string()),
            ..FakeHost::new("Hello world\ntail end", vec![sel(0, 0, 0, 11)])
        }
        .answer_pick("div");
        let mut session = Session::new();
        wrap_selection(&mut host, &mut session);
        let formatted = "<!doctype html>\n<div>\n    Hello world\n</div>\ntail end";
        assert_eq!(host.text(), formatted);

        let outcome = undo_last_wrap(&mut host, &mut session);

        assert_eq!(outcome, CommandOutcome::Failed);
        assert_eq!(host.text(), formatted);
        assert_eq!(
            host.notices.last(),
            Some(&(NoticeLevel::Error, notices::UNDO_STALE.to_string()))
        );
        assert!(!session.can_undo());
    }

    #[test]
    fn test_undo_after_unrelated_edit_elsewhere() {
        let mut host = FakeHost::new("Hello\nrest", vec![sel(0, 0, 0, 5)]).answer_pick("div");
        let mut session = Session::new();
        wrap_selection(&mut host, &mut session);

        // Edits after the wrapped block keep the recorded ranges valid
        host.apply_edits(&[TextEdit::new(sel(3, 0, 3, 4), "REST")])
            .unwrap();
        undo_last_wrap(&mut host, &mut session);

        assert_eq!(host.text(), "Hello\nREST");
    }

    #[test]
    fn test_undo_after_document_shrank_fails() {
        let mut host = FakeHost::new("Hello", vec![sel(0, 0, 0, 5)]).answer_pick("div");
        let mut session = Session::new();
        wrap_selection(&mut host, &mut session);

        // Shrink the document so the recorded ranges no longer exist
        let everything = sel(0, 0, 2, 6);
        host.apply_edits(&[TextEdit::new(everything, "")]).unwrap();

        let outcome = undo_last_wrap(&mut host, &mut session);

        assert_eq!(outcome, CommandOutcome::Failed);
        assert_eq!(host.levels().last(), Some(&NoticeLevel::Error));
        assert!(!session.can_undo());
    }
}
