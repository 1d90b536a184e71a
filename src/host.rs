//! Line-oriented terminal host.
//!
//! Implements [`EditorHost`] on top of a [`TextBuffer`]: prompts are read
//! from the input one line at a time and notices are printed in color.

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use warpwrap_buffer::TextBuffer;
use warpwrap_core::{
    EditorHost, InputPrompt, NoticeLevel, PanelView, PickPrompt, Position, Selection, TextEdit,
};

/// Input that clears a pre-filled prompt value
pub const CLEAR_VALUE: &str = "-";

pub struct TerminalHost<R, W> {
    buffer: TextBuffer,
    selections: Vec<Selection>,
    root: Option<PathBuf>,
    /// Where panel documents are written; the cache dir when unset
    panel_dir: Option<PathBuf>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalHost<R, W> {
    pub fn new(buffer: TextBuffer, root: Option<PathBuf>, input: R, output: W) -> Self {
        Self {
            buffer,
            selections: vec![Selection::caret(Position::default())],
            root,
            panel_dir: None,
            input,
            output,
        }
    }

    pub fn with_panel_dir(mut self, dir: PathBuf) -> Self {
        self.panel_dir = Some(dir);
        self
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn set_selections(&mut self, selections: Vec<Selection>) {
        self.selections = selections;
    }

    /// Print one line
    pub fn say(&mut self, line: impl Display) {
        if let Err(e) = writeln!(self.output, "{}", line) {
            warpwrap_logger::warn(format!("Failed to write output: {}", e));
        }
    }

    /// Print `prompt` and read one line without its line ending.
    ///
    /// Returns `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.output, "{}", prompt);
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
            Err(e) => {
                warpwrap_logger::warn(format!("Failed to read input: {}", e));
                None
            }
        }
    }

    fn panel_path(&self, panel: &PanelView) -> Result<PathBuf> {
        let dir = match &self.panel_dir {
            Some(dir) => dir.clone(),
            None => warpwrap_config::get_cache_dir()?,
        };
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        Ok(dir.join(format!("{}.html", panel.view_type)))
    }
}

impl<R: BufRead, W: Write> EditorHost for TerminalHost<R, W> {
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
        let ranges = self.buffer.replace_ranges(edits)?;
        // Selections follow the replaced text
        self.selections = ranges.clone();
        Ok(ranges)
    }

    fn pick(&mut self, prompt: &PickPrompt) -> Option<String> {
        let mut lines = vec![prompt.placeholder.clone().bold().to_string()];
        for (idx, item) in prompt.items.iter().enumerate() {
            lines.push(format!("  {:>2}) {}", idx + 1, item));
        }
        for line in lines {
            self.say(line);
        }

        let answer = self.ask("> ")?;
        let answer = answer.trim();
        if answer.is_empty() {
            return None;
        }

        let chosen = match answer.parse::<usize>() {
            Ok(number) => number
                .checked_sub(1)
                .and_then(|idx| prompt.items.get(idx))
                .cloned(),
            Err(_) => prompt.items.iter().find(|item| *item == answer).cloned(),
        };
        if chosen.is_none() {
            self.say(format!("No such choice: {}", answer).yellow());
        }
        chosen
    }

    fn input(&mut self, prompt: &InputPrompt) -> Option<String> {
        let question = if prompt.value.is_empty() {
            format!("{} ({}): ", prompt.prompt, prompt.placeholder)
        } else {
            format!("{} [{}]: ", prompt.prompt, prompt.value)
        };

        let answer = self.ask(&question)?;
        let answer = answer.trim();
        Some(match answer {
            "" => prompt.value.clone(),
            CLEAR_VALUE => String::new(),
            _ => answer.to_string(),
        })
    }

    fn notify(&mut self, level: NoticeLevel, message: &str) {
        let label = match level {
            NoticeLevel::Info => level.to_str().cyan(),
            NoticeLevel::Warning => level.to_str().yellow(),
            NoticeLevel::Error => level.to_str().red().bold(),
        };
        self.say(format!("{}: {}", label, message));
    }

    fn show_panel(&mut self, panel: &PanelView) -> Result<()> {
        let path = self.panel_path(panel)?;
        std::fs::write(&path, &panel.html)
            .with_context(|| format!("Failed to write panel: {}", path.display()))?;

        warpwrap_logger::info(format!("Panel written to {}", path.display()));
        self.say(format!("{} written to {}", panel.title.as_str().bold(), path.display()));
        self.say("Open it in a browser, then paste the submitted message with `message <json>`");
        Ok(())
    }

    fn workspace_root(&self) -> Option<PathBuf> {
        self.root.clone()
    }
}
