/**
 * The result type of a parser.
 */

use std::collections::BTreeSet;

/// Every parser either succeeds with a `ParseOk` or fails with a `ParseErr`.
pub type ParseResult<T> = Result<ParseOk<T>, ParseErr>;

/// A successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOk<T> {
    pub value: T,
    /// Offset right after the consumed input.
    pub position: usize,
    /// The furthest failure that was swallowed while producing this value
    /// (by a choice, a repetition or an optional). Only used for reporting.
    pub furthest_error: Option<ParseErr>,
}

/// A failed parse at some byte offset of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErr {
    pub position: usize,
    /// Descriptions of what would have been accepted at `position`.
    pub expected: BTreeSet<String>,
}

impl <T> ParseOk<T> {
    pub fn new(value: T, position: usize) -> Self {
        Self{ value, position, furthest_error: None }
    }

    pub fn with_error(value: T, position: usize, furthest_error: Option<ParseErr>) -> Self {
        Self{ value, position, furthest_error }
    }

    pub fn map<U, F>(self, f: F) -> ParseOk<U> where F : FnOnce(T) -> U {
        ParseOk{
            value: f(self.value),
            position: self.position,
            furthest_error: self.furthest_error,
        }
    }
}

impl ParseErr {
    pub fn at(position: usize) -> Self {
        Self{ position, expected: BTreeSet::new() }
    }

    pub fn expecting<S>(position: usize, what: S) -> Self where S : Into<String> {
        let mut expected = BTreeSet::new();
        expected.insert(what.into());
        Self{ position, expected }
    }

    /// The furthest error wins, errors at the same offset merge their
    /// expectations.
    pub fn unify(a: ParseErr, b: ParseErr) -> ParseErr {
        if a.position > b.position {
            a
        }
        else if b.position > a.position {
            b
        }
        else {
            let mut expected = a.expected;
            expected.extend(b.expected);
            ParseErr{ position: a.position, expected }
        }
    }
}

impl std::fmt::Display for ParseErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse failed at offset {}", self.position)?;
        if !self.expected.is_empty() {
            let expected: Vec<&str> = self.expected.iter().map(|s| s.as_str()).collect();
            write!(f, ", expected {}", expected.join(" or "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErr {}

pub fn unify_errors(a: Option<ParseErr>, b: Option<ParseErr>) -> Option<ParseErr> {
    match (a, b) {
        (Some(a), Some(b)) => Some(ParseErr::unify(a, b)),
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod parse_result_tests {
    use super::*;

    #[test]
    fn furthest_error_wins() {
        let a = ParseErr::expecting(3, "']'");
        let b = ParseErr::expecting(1, "'('");
        assert_eq!(ParseErr::unify(a.clone(), b.clone()), a);
        assert_eq!(ParseErr::unify(b, a.clone()), a);
    }

    #[test]
    fn equal_offsets_merge_expectations() {
        let a = ParseErr::expecting(2, "'['");
        let b = ParseErr::expecting(2, "'('");
        let u = ParseErr::unify(a, b);
        assert_eq!(u.position, 2);
        assert_eq!(u.expected.len(), 2);
        assert!(u.expected.contains("'('"));
    }

    #[test]
    fn unify_optional_errors() {
        assert_eq!(unify_errors(None, None), None);
        assert_eq!(unify_errors(Some(ParseErr::at(4)), None), Some(ParseErr::at(4)));
        assert_eq!(unify_errors(None, Some(ParseErr::at(4))), Some(ParseErr::at(4)));
    }

    #[test]
    fn display_lists_expectations() {
        let e = ParseErr::unify(ParseErr::expecting(4, "']'"), ParseErr::expecting(4, "any character"));
        assert_eq!(e.to_string(), "parse failed at offset 4, expected ']' or any character");
    }
}
