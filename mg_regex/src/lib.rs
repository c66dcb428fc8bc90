/**
 * A restricted regex-like pattern language: syntax tree and parser.
 */

extern crate mg_parser;

mod ast;
mod error;
mod grammar;

pub use ast::{Alternatives, Atom, Charset, CharsetElement, Expression, Group, Literal, Multiplicity, Sequence};
pub use error::PatternError;
pub use grammar::Grammar;

use log::debug;
use mg_parser::Parser;

thread_local! {
    static GRAMMAR: Grammar = Grammar::new();
}

fn parse_complete<T>(parser: &Parser<T>, text: &str) -> Result<T, PatternError> where T : Clone + 'static {
    parser.then_ignore(&mg_parser::end())
        .parse(text)
        .map(|ok| ok.value)
        .map_err(|err| PatternError::from_parse_err(text, err))
}

/// Parses a whole pattern, like `MS[0-9]{6}|abcd`.
/// Input the grammar can't consume entirely is an error.
pub fn parse_pattern(text: &str) -> Result<Alternatives, PatternError> {
    let result = GRAMMAR.with(|g| parse_complete(&g.alternatives, text));
    match &result {
        Ok(ast) => debug!("parsed pattern {:?} into {} alternative(s)", text, ast.sequences.len()),
        Err(err) => debug!("{}", err),
    }
    result
}

/// Parses the inside of a character class without the brackets, like
/// `a-z0-9_` or `^!@#$`.
pub fn parse_charset_body(text: &str) -> Result<Charset, PatternError> {
    GRAMMAR.with(|g| parse_complete(&g.charset_body, text))
}
