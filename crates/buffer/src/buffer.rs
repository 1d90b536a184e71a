use anyhow::{Context, Result};
use ropey::Rope;
use std::path::{Path, PathBuf};
use unicode_segmentation::UnicodeSegmentation;

use warpwrap_core::{Position, Selection, TextEdit};

use crate::LineEnding;

/// Edit resolved to rope character offsets
struct ResolvedEdit<'a> {
    /// Index in the caller's edit list
    index: usize,
    start: usize,
    end: usize,
    text: &'a str,
}

/// Text buffer based on Rope
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    /// Rope structure for storing text (always `\n` line breaks)
    rope: Rope,
    /// File path (if exists)
    file_path: Option<PathBuf>,
    /// Modified flag
    modified: bool,
    /// Line ending type (for saving)
    line_ending: LineEnding,
}

impl TextBuffer {
    /// Create buffer from text; `\r\n` is normalized and remembered for saving
    pub fn from_text(text: &str) -> Self {
        let (rope, line_ending) = if text.contains("\r\n") {
            (Rope::from_str(&text.replace("\r\n", "\n")), LineEnding::CRLF)
        } else {
            (Rope::from_str(text), LineEnding::LF)
        };

        Self {
            rope,
            file_path: None,
            modified: false,
            line_ending,
        }
    }

    /// Load file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let mut buffer = Self::from_text(&contents);
        buffer.file_path = Some(path.to_path_buf());
        Ok(buffer)
    }

    /// Save file
    pub fn save(&mut self) -> Result<()> {
        if let Some(path) = self.file_path.clone() {
            self.save_to(&path)
        } else {
            anyhow::bail!("No file path set")
        }
    }

    /// Save to specified file
    pub fn save_to<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut contents = String::with_capacity(self.rope.len_bytes());

        // rope.lines() yields lines with '\n' at the end (except possibly the last one)
        for line in self.rope.lines() {
            let line_str = line.to_string();

            if let Some(line_without_newline) = line_str.strip_suffix('\n') {
                contents.push_str(line_without_newline);
                match self.line_ending {
                    LineEnding::LF => contents.push('\n'),
                    LineEnding::CRLF => contents.push_str("\r\n"),
                }
            } else {
                contents.push_str(&line_str);
            }
        }

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// Get file path
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Check if buffer is modified
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Get line count
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get line text without its trailing newline
    pub fn line_text(&self, index: usize) -> Option<String> {
        if index < self.line_count() {
            let line = self.rope.line(index).to_string();
            Some(match line.strip_suffix('\n') {
                Some(stripped) => stripped.to_string(),
                None => line,
            })
        } else {
            None
        }
    }

    /// Get all text
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Text covered by a selection
    pub fn text_range(&self, selection: &Selection) -> Result<String> {
        let start = self.position_to_char_idx(&selection.start())?;
        let end = self.position_to_char_idx(&selection.end())?;
        Ok(self.rope.slice(start..end).to_string())
    }

    /// Replace several ranges as one change.
    ///
    /// All ranges are validated before the rope is touched, so an invalid
    /// or overlapping range leaves the buffer unchanged. Returns the range
    /// each replacement occupies afterwards, in the order of `edits`.
    pub fn replace_ranges(&mut self, edits: &[TextEdit]) -> Result<Vec<Selection>> {
        let mut resolved = Vec::with_capacity(edits.len());
        for (index, edit) in edits.iter().enumerate() {
            let start = self
                .position_to_char_idx(&edit.range.start())
                .with_context(|| format!("Invalid edit range {}", edit.range))?;
            let end = self
                .position_to_char_idx(&edit.range.end())
                .with_context(|| format!("Invalid edit range {}", edit.range))?;
            resolved.push(ResolvedEdit {
                index,
                start,
                end,
                text: &edit.text,
            });
        }

        resolved.sort_by_key(|edit| (edit.start, edit.end));
        for pair in resolved.windows(2) {
            if pair[0].end > pair[1].start {
                anyhow::bail!(
                    "Overlapping edit ranges {} and {}",
                    edits[pair[0].index].range,
                    edits[pair[1].index].range
                );
            }
        }

        // Back to front keeps the offsets of earlier edits valid
        for edit in resolved.iter().rev() {
            self.rope.remove(edit.start..edit.end);
            self.rope.insert(edit.start, edit.text);
        }

        let mut ranges = vec![Selection::caret(Position::default()); edits.len()];
        let mut shift: isize = 0;
        for edit in &resolved {
            let new_start = (edit.start as isize + shift) as usize;
            let new_len = edit.text.chars().count();
            shift += new_len as isize - (edit.end - edit.start) as isize;
            ranges[edit.index] = Selection::new(
                self.char_idx_to_position(new_start),
                self.char_idx_to_position(new_start + new_len),
            );
        }

        if !edits.is_empty() {
            self.modified = true;
        }
        Ok(ranges)
    }

    /// Convert position to character index in Rope
    fn position_to_char_idx(&self, position: &Position) -> Result<usize> {
        if position.line >= self.line_count() {
            anyhow::bail!("Line {} out of range", position.line + 1);
        }

        let line_start = self.rope.line_to_char(position.line);
        let line_str = self.line_text(position.line).unwrap_or_default();

        let mut grapheme_count = 0;
        let mut byte_pos = 0;
        for grapheme in line_str.graphemes(true) {
            if grapheme_count >= position.column {
                break;
            }
            byte_pos += grapheme.len();
            grapheme_count += 1;
        }

        if grapheme_count < position.column {
            anyhow::bail!(
                "Column {} out of range on line {}",
                position.column + 1,
                position.line + 1
            );
        }

        let char_offset = line_str[..byte_pos].chars().count();
        Ok(line_start + char_offset)
    }

    /// Convert character index in Rope to position
    fn char_idx_to_position(&self, char_idx: usize) -> Position {
        let line = self.rope.char_to_line(char_idx);
        let line_start = self.rope.line_to_char(line);
        let prefix = self.rope.slice(line_start..char_idx).to_string();
        Position::at(line, prefix.graphemes(true).count())
    }
}
