//! Recording in-memory host for command tests.

use std::collections::VecDeque;
use std::path::PathBuf;

use anyhow::Result;

use warpwrap_buffer::TextBuffer;
use warpwrap_core::{
    EditorHost, InputPrompt, NoticeLevel, PanelView, PickPrompt, Position, Selection, TextEdit,
};

/// Scripted answers plus a log of everything the commands asked for.
///
/// Picks and inputs are answered from their queues; an exhausted input
/// queue accepts the pre-filled value, an exhausted pick queue dismisses.
#[derive(Default)]
pub struct FakeHost {
    pub buffer: TextBuffer,
    pub selections: Vec<Selection>,
    pub root: Option<PathBuf>,
    pub picks: VecDeque<Option<String>>,
    pub inputs: VecDeque<Option<String>>,
    pub pick_prompts: Vec<PickPrompt>,
    pub input_prompts: Vec<InputPrompt>,
    pub notices: Vec<(NoticeLevel, String)>,
    pub panels: Vec<PanelView>,
    pub format_calls: usize,
    /// Text the formatter inserts at the top of the document
    pub format_prefix: Option<String>,
    pub fail_panel: bool,
}

pub fn sel(l1: usize, c1: usize, l2: usize, c2: usize) -> Selection {
    Selection::new(Position::at(l1, c1), Position::at(l2, c2))
}

impl FakeHost {
    pub fn new(text: &str, selections: Vec<Selection>) -> Self {
        Self {
            buffer: TextBuffer::from_text(text),
            selections,
            ..Self::default()
        }
    }

    pub fn answer_pick(mut self, answer: &str) -> Self {
        self.picks.push_back(Some(answer.to_string()));
        self
    }

    pub fn answer_input(mut self, answer: &str) -> Self {
        self.inputs.push_back(Some(answer.to_string()));
        self
    }

    pub fn dismiss_input(mut self) -> Self {
        self.inputs.push_back(None);
        self
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn levels(&self) -> Vec<NoticeLevel> {
        self.notices.iter().map(|(level, _)| *level).collect()
    }
}

impl EditorHost for FakeHost {
    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn text_in(&self, selection: &Selection) -> Result<String> {
        self.buffer.text_range(selection)
    }

    fn line_text(&self, line: usize) -> Option<String> {
        self.buffer.line_text(line)
    }

    fn apply_edits(&mut self, edits: &[TextEdit]) -> Result<Vec<Selection>> {
        self.buffer.replace_ranges(edits)
    }

    fn pick(&mut self, prompt: &PickPrompt) -> Option<String> {
        self.pick_prompts.push(prompt.clone());
        self.picks.pop_front().flatten()
    }

    fn input(&mut self, prompt: &InputPrompt) -> Option<String> {
        self.input_prompts.push(prompt.clone());
        match self.inputs.pop_front() {
            Some(answer) => answer,
            None => Some(prompt.value.clone()),
        }
    }

    fn notify(&mut self, level: NoticeLevel, message: &str) {
        self.notices.push((level, message.to_string()));
    }

    fn show_panel(&mut self, panel: &PanelView) -> Result<()> {
        if self.fail_panel {
            anyhow::bail!("panel host unavailable");
        }
        self.panels.push(panel.clone());
        Ok(())
    }

    fn workspace_root(&self) -> Option<PathBuf> {
        self.root.clone()
    }

    fn format_document(&mut self) -> Result<()> {
        self.format_calls += 1;
        if let Some(prefix) = &self.format_prefix {
            let top = Selection::caret(Position::default());
            self.buffer.replace_ranges(&[TextEdit::new(top, prefix.clone())])?;
        }
        Ok(())
    }
}
