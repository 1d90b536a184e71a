use std::cmp::{max, min};
use std::fmt;

/// Position in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line number (0-based)
    pub line: usize,
    /// Position in line in graphemes (0-based)
    pub column: usize,
}

impl Position {
    /// Create position at specified line and column
    pub fn at(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.column.cmp(&other.column),
            other => other,
        }
    }
}

impl fmt::Display for Position {
    // 1-based, the way editors show it
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Text selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Start point of selection (anchor) - doesn't move
    pub anchor: Position,
    /// Active point (moves with cursor)
    pub active: Position,
}

impl Selection {
    /// Create a new selection
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// Collapsed selection (a bare cursor)
    pub fn caret(position: Position) -> Self {
        Self::new(position, position)
    }

    /// Start of selection (minimum position)
    pub fn start(&self) -> Position {
        min(self.anchor, self.active)
    }

    /// End of selection (maximum position)
    pub fn end(&self) -> Position {
        max(self.anchor, self.active)
    }

    /// Selection is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start(), self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        let p1 = Position::at(0, 5);
        let p2 = Position::at(1, 0);
        let p3 = Position::at(1, 5);

        assert!(p1 < p2);
        assert!(p2 < p3);
        assert!(p1 < p3);
    }

    #[test]
    fn test_selection_range() {
        let sel = Selection::new(Position::at(1, 5), Position::at(3, 10));
        assert_eq!(sel.start(), Position::at(1, 5));
        assert_eq!(sel.end(), Position::at(3, 10));

        let sel_rev = Selection::new(Position::at(3, 10), Position::at(1, 5));
        assert_eq!(sel_rev.start(), Position::at(1, 5));
        assert_eq!(sel_rev.end(), Position::at(3, 10));
    }

    #[test]
    fn test_caret_is_empty() {
        assert!(Selection::caret(Position::at(2, 3)).is_empty());
        assert!(!Selection::new(Position::at(0, 0), Position::at(0, 1)).is_empty());
    }

    #[test]
    fn test_display_is_one_based() {
        let sel = Selection::new(Position::at(2, 4), Position::at(0, 0));
        assert_eq!(sel.to_string(), "1:1-3:5");
    }
}
