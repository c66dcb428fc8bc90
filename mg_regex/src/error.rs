/**
 * Errors surfaced by the pattern parser.
 */

use mg_parser::{ParseErr, Position};

/// A pattern that doesn't follow the grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid pattern {pattern:?} at line {line}, column {column}{}", describe_expected(.expected))]
pub struct PatternError {
    pub pattern: String,
    /// Byte offset of the failure.
    pub offset: usize,
    /// One-based.
    pub line: usize,
    /// One-based, counted in characters.
    pub column: usize,
    pub expected: Vec<String>,
}

impl PatternError {
    pub(crate) fn from_parse_err(pattern: &str, err: ParseErr) -> Self {
        let Position{ line, column } = Position::of_offset(pattern, err.position);
        Self{
            pattern: pattern.to_string(),
            offset: err.position,
            line,
            column,
            expected: err.expected.into_iter().collect(),
        }
    }

    pub fn position(&self) -> Position {
        Position{ line: self.line, column: self.column }
    }
}

fn describe_expected(expected: &[String]) -> String {
    if expected.is_empty() {
        String::new()
    }
    else {
        format!(": expected {}", expected.join(" or "))
    }
}
