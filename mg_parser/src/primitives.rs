/**
 * Primitive parsers everything else is built from.
 */

use std::rc::Rc;
use once_cell::unsync::OnceCell;
use regex::Regex;
use crate::parser::Parser;
use crate::parse_result::{ParseOk, ParseErr, unify_errors};

/// Succeeds consuming `expected` if the input continues with it.
pub fn literal(expected: &str) -> Parser<String> {
    let expected = expected.to_string();
    let what = format!("{:?}", expected);
    Parser::new(move |input, position| {
        if input[position..].starts_with(expected.as_str()) {
            Ok(ParseOk::new(expected.clone(), position + expected.len()))
        }
        else {
            Err(ParseErr::expecting(position, what.clone()))
        }
    })
}

/// Consumes exactly one character.
pub fn any_char() -> Parser<char> {
    Parser::new(|input, position| {
        match input[position..].chars().next() {
            Some(c) => Ok(ParseOk::new(c, position + c.len_utf8())),
            None => Err(ParseErr::expecting(position, "any character")),
        }
    })
}

/// Consumes exactly the character `expected`.
pub fn char(expected: char) -> Parser<char> {
    let what = format!("{:?}", expected);
    Parser::new(move |input, position| {
        match input[position..].chars().next() {
            Some(c) if c == expected => Ok(ParseOk::new(c, position + c.len_utf8())),
            _ => Err(ParseErr::expecting(position, what.clone())),
        }
    })
}

/**
 * Regex tokens.
 */

/// The text matched by a regex token, along with its capture groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexMatch {
    groups: Vec<Option<String>>,
}

impl RegexMatch {
    /// The whole match.
    pub fn as_str(&self) -> &str {
        self.groups[0].as_deref().unwrap_or("")
    }

    /// The `idx`th capture group, `None` if it did not participate.
    pub fn group(&self, idx: usize) -> Option<&str> {
        self.groups.get(idx).and_then(|g| g.as_deref())
    }

    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Succeeds if `pattern` matches anchored at the current offset, consuming
/// the match.
pub fn try_regex_token(pattern: &str) -> Result<Parser<RegexMatch>, regex::Error> {
    let regex = Regex::new(&format!("^(?:{})", pattern))?;
    let what = format!("/{}/", pattern);
    Ok(Parser::new(move |input, position| {
        match regex.captures(&input[position..]) {
            Some(caps) => {
                let groups: Vec<Option<String>> = caps.iter()
                    .map(|g| g.map(|m| m.as_str().to_string()))
                    .collect();
                let consumed = caps.get(0).map_or(0, |m| m.end());
                Ok(ParseOk::new(RegexMatch{ groups }, position + consumed))
            },
            None => Err(ParseErr::expecting(position, what.clone())),
        }
    }))
}

/// Like `try_regex_token`, for patterns that are known to be valid, such as
/// the literals of a grammar.
///
/// # Panics
///
/// If `pattern` is not a valid regex.
pub fn regex_token(pattern: &str) -> Parser<RegexMatch> {
    match try_regex_token(pattern) {
        Ok(p) => p,
        Err(err) => panic!("invalid token pattern {:?}: {}", pattern, err),
    }
}

/**
 * Non-consuming parsers.
 */

/// Always succeeds with `value`, consuming nothing.
pub fn success<T>(value: T) -> Parser<T> where T : Clone + 'static {
    Parser::new(move |_, position| Ok(ParseOk::new(value.clone(), position)))
}

/// Always fails.
pub fn fail<T>() -> Parser<T> where T : 'static {
    Parser::new(|_, position| Err(ParseErr::at(position)))
}

/// Succeeds only at the end of the input.
pub fn end() -> Parser<()> {
    Parser::new(|input: &str, position| {
        if position == input.len() {
            Ok(ParseOk::new((), position))
        }
        else {
            Err(ParseErr::expecting(position, "end of input"))
        }
    })
}

/**
 * Derived parsers.
 */

/// A decimal integer, `[0-9]+`.
pub fn integer() -> Parser<u32> {
    regex_token("[0-9]+")
        .bind(|m| match m.as_str().parse::<u32>() {
            Ok(n) => success(n),
            // Too many digits
            Err(_) => fail(),
        })
}

/// Ordered choice over any number of parsers, tried from the same offset
/// until one succeeds.
pub fn one_of<T>(parsers: &[Parser<T>]) -> Parser<T> where T : 'static {
    let parsers: Vec<Parser<T>> = parsers.to_vec();
    Parser::new(move |input, position| {
        let mut furthest = None;
        for parser in &parsers {
            match parser.parse_at(input, position) {
                Ok(ok) => return Ok(ParseOk::with_error(
                    ok.value, ok.position, unify_errors(furthest, ok.furthest_error))),
                Err(err) => furthest = unify_errors(furthest, Some(err)),
            }
        }
        Err(furthest.unwrap_or_else(|| ParseErr::at(position)))
    })
}

/// Builds a parser that refers to itself. `define` receives a handle to the
/// parser under construction and returns its definition; the definition is
/// built exactly once.
///
/// The handle only lives as long as the returned parser does.
pub fn recursive<T, F>(define: F) -> Parser<T> where T : 'static, F : FnOnce(Parser<T>) -> Parser<T> {
    let cell: Rc<OnceCell<Parser<T>>> = Rc::new(OnceCell::new());
    let weak = Rc::downgrade(&cell);
    let handle = Parser::new(move |input, position| {
        let cell = weak.upgrade().expect("recursive parser outlived its definition");
        let parser = cell.get().expect("recursive parser invoked while being defined");
        parser.parse_at(input, position)
    });
    let definition = define(handle);
    if cell.set(definition).is_err() {
        unreachable!("recursive parser defined twice");
    }
    Parser::new(move |input, position| {
        match cell.get() {
            Some(parser) => parser.parse_at(input, position),
            None => unreachable!("recursive parser has no definition"),
        }
    })
}

// Tests ///////////////////////////////////////////////////////////////////////
