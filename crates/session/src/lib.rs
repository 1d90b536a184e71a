//! Session context threaded through every wrap command.
//!
//! Holds the single undoable action and the values the user picked last
//! time. Commands take it by `&mut` instead of reaching for globals.

use anyhow::Result;

use warpwrap_core::{Selection, TextEdit};

/// What it takes to reverse the most recent wrap.
///
/// `selections[i]` is where the wrapped text landed, `wrapped_texts[i]` is
/// that text and `prior_texts[i]` is the text it replaced. All three follow
/// the order of the original selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoRecord {
    selections: Vec<Selection>,
    wrapped_texts: Vec<String>,
    prior_texts: Vec<String>,
}

impl UndoRecord {
    /// Create a record; all lists must have the same length
    pub fn new(
        selections: Vec<Selection>,
        wrapped_texts: Vec<String>,
        prior_texts: Vec<String>,
    ) -> Result<Self> {
        if selections.len() != wrapped_texts.len() || selections.len() != prior_texts.len() {
            anyhow::bail!(
                "Undo record mismatch: {} ranges for {} wrapped and {} prior texts",
                selections.len(),
                wrapped_texts.len(),
                prior_texts.len()
            );
        }
        Ok(Self {
            selections,
            wrapped_texts,
            prior_texts,
        })
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn wrapped_texts(&self) -> &[String] {
        &self.wrapped_texts
    }

    pub fn prior_texts(&self) -> &[String] {
        &self.prior_texts
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Whether every recorded range still holds the text the wrap put there.
    ///
    /// `current` reads the document; `None` means the range no longer exists.
    pub fn is_current(&self, mut current: impl FnMut(&Selection) -> Option<String>) -> bool {
        self.selections
            .iter()
            .zip(&self.wrapped_texts)
            .all(|(range, wrapped)| current(range).as_deref() == Some(wrapped.as_str()))
    }

    /// Edits that put the prior texts back
    pub fn restoring_edits(&self) -> Vec<TextEdit> {
        self.selections
            .iter()
            .zip(&self.prior_texts)
            .map(|(range, text)| TextEdit::new(*range, text.clone()))
            .collect()
    }
}

/// Values offered as defaults by the next wrap prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastUsed {
    pub tag: String,
    pub class_name: String,
    pub id_name: String,
}

/// Mutable state shared by consecutive commands
#[derive(Debug, Clone, Default)]
pub struct Session {
    undo: Option<UndoRecord>,
    last: LastUsed,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever was undoable before
    pub fn record_wrap(&mut self, record: UndoRecord) {
        self.undo = Some(record);
    }

    /// Take the undo record, leaving nothing undoable
    pub fn take_undo(&mut self) -> Option<UndoRecord> {
        self.undo.take()
    }

    pub fn undo_record(&self) -> Option<&UndoRecord> {
        self.undo.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        self.undo.is_some()
    }

    pub fn last_used(&self) -> &LastUsed {
        &self.last
    }

    pub fn remember(&mut self, tag: &str, class_name: &str, id_name: &str) {
        self.last = LastUsed {
            tag: tag.to_string(),
            class_name: class_name.to_string(),
            id_name: id_name.to_string(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warpwrap_core::Position;

    fn range(line: usize) -> Selection {
        Selection::new(Position::at(line, 0), Position::at(line, 3))
    }

    fn record(ranges: Vec<Selection>, prior: &[&str]) -> UndoRecord {
        let wrapped = prior.iter().map(|text| format!("<b>{}</b>", text)).collect();
        let prior = prior.iter().map(|text| text.to_string()).collect();
        UndoRecord::new(ranges, wrapped, prior).unwrap()
    }

    #[test]
    fn test_undo_record_rejects_length_mismatch() {
        let one = || vec!["a".to_string()];
        assert!(UndoRecord::new(vec![range(0), range(1)], one(), one()).is_err());
        assert!(UndoRecord::new(vec![range(0)], Vec::new(), one()).is_err());
        assert!(UndoRecord::new(vec![range(0)], one(), one()).is_ok());
    }

    #[test]
    fn test_is_current_compares_wrapped_text() {
        let record = record(vec![range(0), range(1)], &["a", "b"]);

        let texts = ["<b>a</b>", "<b>b</b>"];
        assert!(record.is_current(|r| Some(texts[r.start().line].to_string())));
        // One range edited since the wrap
        assert!(!record.is_current(|r| match r.start().line {
            0 => Some("<b>a</b>".to_string()),
            _ => Some("<i>b</i>".to_string()),
        }));
        // Range gone
        assert!(!record.is_current(|_| None));
    }

    #[test]
    fn test_restoring_edits_keep_order() {
        let record = record(vec![range(2), range(0)], &["two", "zero"]);
        let edits = record.restoring_edits();
        assert_eq!(edits[0], TextEdit::new(range(2), "two"));
        assert_eq!(edits[1], TextEdit::new(range(0), "zero"));
    }

    #[test]
    fn test_new_record_overwrites_and_take_clears() {
        let mut session = Session::new();
        assert!(!session.can_undo());

        session.record_wrap(record(vec![range(0)], &["a"]));
        session.record_wrap(record(vec![range(1)], &["b"]));

        let record = session.take_undo().unwrap();
        assert_eq!(record.prior_texts(), &["b".to_string()]);
        assert!(session.take_undo().is_none());
    }

    #[test]
    fn test_remember_last_used() {
        let mut session = Session::new();
        session.remember("section", "hero", "top");
        assert_eq!(session.last_used().tag, "section");
        assert_eq!(session.last_used().class_name, "hero");
        assert_eq!(session.last_used().id_name, "top");
    }
}
