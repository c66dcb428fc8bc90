
use mg_parser::{Parser, Position};

/// Runs a parser that has to consume all of `input`, returning the value or
/// the one-based position of the failure.
pub fn parse_all<T>(parser: &Parser<T>, input: &str) -> Result<T, Position> where T : Clone + 'static {
    match parser.then_ignore(&mg_parser::end()).parse(input) {
        Ok(ok) => Ok(ok.value),
        Err(err) => Err(Position::of_offset(input, err.position)),
    }
}
