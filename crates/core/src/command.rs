//! Command outcome reported back to the host.

/// Result of running one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandOutcome {
    /// The document was changed.
    Applied {
        /// Number of ranges that were replaced
        edits: usize,
    },
    /// The user dismissed a prompt; nothing changed.
    Cancelled,
    /// Every selection was empty; nothing changed.
    NothingSelected,
    /// There was no wrap to undo.
    NothingToUndo,
    /// The command had nothing to do (e.g. a panel was shown).
    #[default]
    None,
    /// The command failed and the document was left unchanged.
    Failed,
}
