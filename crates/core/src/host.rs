//! The editor collaborator seen by the wrap commands.
//!
//! Commands never touch a document directly. Everything they need from the
//! editor (selections, line text, atomic replacement, prompts, notices and
//! panel hosting) goes through [`EditorHost`].

use std::path::PathBuf;

use anyhow::Result;

use crate::Selection;

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn to_str(self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

/// Replace the text covered by `range` with `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Selection,
    pub text: String,
}

impl TextEdit {
    pub fn new(range: Selection, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }
}

/// Single choice from a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickPrompt {
    /// Hint shown while nothing is chosen
    pub placeholder: String,
    /// Choices in display order
    pub items: Vec<String>,
}

/// Free text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPrompt {
    /// Question shown to the user
    pub prompt: String,
    /// Example shown while the field is empty
    pub placeholder: String,
    /// Pre-filled value
    pub value: String,
}

/// An HTML document the host should display in a side panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    /// Stable identifier of the panel kind
    pub view_type: String,
    /// Panel title
    pub title: String,
    /// Complete HTML document
    pub html: String,
}

/// Operations a host editor exposes to the wrap commands.
///
/// Prompt methods return `None` when the user dismisses the prompt.
pub trait EditorHost {
    /// Current selections, primary first.
    fn selections(&self) -> Vec<Selection>;

    /// Text covered by a selection.
    fn text_in(&self, selection: &Selection) -> Result<String>;

    /// Text of a line without its line break, `None` past the end.
    fn line_text(&self, line: usize) -> Option<String>;

    /// Apply all edits as one atomic change.
    ///
    /// Either every edit lands or the document is left untouched. Returns the
    /// range each replacement text occupies afterwards, in input order.
    fn apply_edits(&mut self, edits: &[TextEdit]) -> Result<Vec<Selection>>;

    fn pick(&mut self, prompt: &PickPrompt) -> Option<String>;

    fn input(&mut self, prompt: &InputPrompt) -> Option<String>;

    fn notify(&mut self, level: NoticeLevel, message: &str);

    /// Display an interactive panel. Its messages come back through
    /// the panel message handler.
    fn show_panel(&mut self, panel: &PanelView) -> Result<()>;

    /// Root directory of the open project, if any.
    fn workspace_root(&self) -> Option<PathBuf>;

    /// Reformat the whole document. Hosts without a formatter keep the default.
    fn format_document(&mut self) -> Result<()> {
        Ok(())
    }
}
