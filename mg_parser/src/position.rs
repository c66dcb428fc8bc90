/**
 * Human-readable position in a source text.
 */

/// A one-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new() -> Position {
        Position{ line: 1, column: 1 }
    }

    pub fn newline(&mut self) {
        self.column = 1;
        self.line += 1;
    }

    pub fn advance_columns(&mut self, count: usize) {
        self.column += count;
    }

    /// Computes the position of a byte offset by scanning the text up to it.
    /// Offsets past the end of the text are clamped to the end.
    pub fn of_offset(text: &str, offset: usize) -> Position {
        let mut position = Position::new();
        for (idx, c) in text.char_indices() {
            if idx >= offset {
                break;
            }
            if c == '\n' {
                position.newline();
            }
            else {
                position.advance_columns(1);
            }
        }
        position
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
