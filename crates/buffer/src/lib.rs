//! Text buffer with rope data structure for warpwrap.
//!
//! Provides text storage addressed by grapheme positions, file load/save
//! with line ending preservation, and atomic replacement of several ranges
//! at once.

mod buffer;

pub use buffer::TextBuffer;

/// Line ending type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::upper_case_acronyms)]
pub(crate) enum LineEnding {
    #[default]
    LF, // Unix \n
    CRLF, // Windows \r\n
}
