/**
 * Backtracking parser combinators over a string and a byte offset.
 */

extern crate regex;
extern crate once_cell;

mod position;
mod parse_result;
mod parser;
mod primitives;

pub use position::Position;
pub use parse_result::{ParseResult, ParseOk, ParseErr, unify_errors};
pub use parser::Parser;
pub use primitives::{
    literal, any_char, char, regex_token, try_regex_token, RegexMatch,
    success, fail, end, integer, one_of, recursive,
};
