/**
 * The parser type and its combinators.
 */

use std::rc::Rc;
use crate::parse_result::{ParseResult, ParseOk, ParseErr, unify_errors};

/// A parser of `T`: a pure function from an input and a byte offset into it
/// to either a value and the offset after it, or a failure.
///
/// Parsers are cheap to clone, every combinator builds a new parser value
/// without touching the ones it was built from.
pub struct Parser<T> {
    run: Rc<dyn Fn(&str, usize) -> ParseResult<T>>,
}

impl <T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self{ run: self.run.clone() }
    }
}

impl <T> std::fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parser<{}>", std::any::type_name::<T>())
    }
}

impl <T> Parser<T> where T : 'static {
    pub fn new<F>(f: F) -> Self where F : Fn(&str, usize) -> ParseResult<T> + 'static {
        Self{ run: Rc::new(f) }
    }

    /// Runs the parser at the given offset.
    /// The offset must be on a character boundary, at most at the end of input.
    pub fn parse_at(&self, input: &str, position: usize) -> ParseResult<T> {
        debug_assert!(position <= input.len());
        (self.run)(input, position)
    }

    pub fn parse(&self, input: &str) -> ParseResult<T> {
        self.parse_at(input, 0)
    }

    /**
     * Functor and monad.
     */

    pub fn map<U, F>(&self, f: F) -> Parser<U> where U : 'static, F : Fn(T) -> U + 'static {
        let this = self.clone();
        Parser::new(move |input, position| {
            this.parse_at(input, position).map(|ok| ok.map(&f))
        })
    }

    /// Runs this parser, then the parser computed from its value from where
    /// this one stopped. There is no rollback past the first success: if the
    /// second step fails, the whole fails.
    pub fn bind<U, F>(&self, f: F) -> Parser<U> where U : 'static, F : Fn(T) -> Parser<U> + 'static {
        let this = self.clone();
        Parser::new(move |input, position| {
            let first = this.parse_at(input, position)?;
            match f(first.value).parse_at(input, first.position) {
                Ok(second) => Ok(ParseOk::with_error(
                    second.value,
                    second.position,
                    unify_errors(first.furthest_error, second.furthest_error))),
                Err(err) => Err(match first.furthest_error {
                    Some(prev) => ParseErr::unify(prev, err),
                    None => err,
                }),
            }
        })
    }

    pub fn then<U>(&self, next: &Parser<U>) -> Parser<(T, U)> where T : Clone, U : 'static {
        let next = next.clone();
        self.bind(move |a| {
            next.map(move |b| (a.clone(), b))
        })
    }

    /// Sequence, keeping the value of the left side.
    pub fn then_ignore<U>(&self, next: &Parser<U>) -> Parser<T> where T : Clone, U : 'static {
        self.then(next).map(|(a, _)| a)
    }

    /// Sequence, keeping the value of the right side.
    pub fn ignore_then<U>(&self, next: &Parser<U>) -> Parser<U> where U : 'static {
        let next = next.clone();
        self.bind(move |_| next.clone())
    }

    /**
     * Choice.
     */

    /// Ordered choice: if this parser fails, `other` is tried from the very
    /// same offset. The first success wins.
    pub fn or_else(&self, other: &Parser<T>) -> Parser<T> {
        let this = self.clone();
        let other = other.clone();
        Parser::new(move |input, position| {
            match this.parse_at(input, position) {
                Ok(ok) => Ok(ok),
                Err(first) => match other.parse_at(input, position) {
                    Ok(ok) => Ok(ParseOk::with_error(
                        ok.value, ok.position, unify_errors(Some(first), ok.furthest_error))),
                    Err(second) => Err(ParseErr::unify(first, second)),
                },
            }
        })
    }

    /// Zero or one. Never fails.
    pub fn optional(&self) -> Parser<Option<T>> {
        let this = self.clone();
        Parser::new(move |input, position| {
            match this.parse_at(input, position) {
                Ok(ok) => Ok(ok.map(Some)),
                Err(err) => Ok(ParseOk::with_error(None, position, Some(err))),
            }
        })
    }

    /// Succeeds only if the parsed value satisfies the predicate. On rejection
    /// the failure is reported at the original offset, expecting `what`.
    pub fn filter<F>(&self, what: &str, predicate: F) -> Parser<T> where F : Fn(&T) -> bool + 'static {
        let this = self.clone();
        let what = what.to_string();
        Parser::new(move |input, position| {
            let ok = this.parse_at(input, position)?;
            if predicate(&ok.value) {
                Ok(ok)
            }
            else {
                Err(ParseErr::expecting(position, what.clone()))
            }
        })
    }

    /**
     * Repetition.
     */

    /// Zero or more. Never fails, stops at the first failing attempt.
    pub fn many(&self) -> Parser<Vec<T>> {
        let this = self.clone();
        Parser::new(move |input, position| {
            Ok(repeat(&this, input, position, Vec::new(), None))
        })
    }

    /// One or more. Fails if the first attempt fails.
    pub fn at_least_one(&self) -> Parser<Vec<T>> {
        let this = self.clone();
        Parser::new(move |input, position| {
            let first = this.parse_at(input, position)?;
            Ok(repeat(&this, input, first.position, vec![first.value], first.furthest_error))
        })
    }

    /// One or more, interleaved with `separator`. A separator only counts if
    /// the element after it parses too, otherwise the list ends before the
    /// separator.
    pub fn separated_by<S>(&self, separator: &Parser<S>) -> Parser<Vec<T>> where S : 'static {
        let this = self.clone();
        let separator = separator.clone();
        Parser::new(move |input, position| {
            let first = this.parse_at(input, position)?;
            let mut values = vec![first.value];
            let mut position = first.position;
            let mut furthest = first.furthest_error;
            loop {
                let sep = match separator.parse_at(input, position) {
                    Ok(sep) => sep,
                    Err(err) => {
                        furthest = unify_errors(furthest, Some(err));
                        break;
                    },
                };
                match this.parse_at(input, sep.position) {
                    Ok(elem) => {
                        values.push(elem.value);
                        position = elem.position;
                        furthest = unify_errors(furthest, unify_errors(sep.furthest_error, elem.furthest_error));
                    },
                    Err(err) => {
                        furthest = unify_errors(furthest, Some(err));
                        break;
                    },
                }
            }
            Ok(ParseOk::with_error(values, position, furthest))
        })
    }
}

impl <T> Parser<T> where T : PartialEq + std::fmt::Debug + 'static {
    /// Rejects a specific value.
    pub fn except(&self, item: T) -> Parser<T> {
        let what = format!("anything but {:?}", item);
        self.filter(&what, move |v| *v != item)
    }
}

fn repeat<T>(parser: &Parser<T>, input: &str, mut position: usize, mut values: Vec<T>,
    mut furthest: Option<ParseErr>) -> ParseOk<Vec<T>> where T : 'static {

    loop {
        match parser.parse_at(input, position) {
            Ok(ok) => {
                let advanced = ok.position > position;
                values.push(ok.value);
                position = ok.position;
                furthest = unify_errors(furthest, ok.furthest_error);
                // A success that consumes nothing would repeat forever
                if !advanced {
                    break;
                }
            },
            Err(err) => {
                furthest = unify_errors(furthest, Some(err));
                break;
            },
        }
    }
    ParseOk::with_error(values, position, furthest)
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod parser_tests {
    use super::*;
    use crate::primitives::{char, literal, any_char, success};

    fn ok<T>(value: T, position: usize) -> (T, usize) {
        (value, position)
    }

    fn run<T>(p: &Parser<T>, input: &str) -> Result<(T, usize), usize> where T : 'static {
        p.parse(input).map(|ok| (ok.value, ok.position)).map_err(|e| e.position)
    }

    #[test]
    fn map_transforms_value() {
        let p = char('a').map(|c| c.to_ascii_uppercase());
        assert_eq!(run(&p, "ab"), Ok(ok('A', 1)));
        assert_eq!(run(&p, "b"), Err(0));
    }

    #[test]
    fn bind_sequences() {
        let p = char('a').bind(|a| char('b').map(move |b| format!("{}{}", a, b)));
        assert_eq!(run(&p, "abc"), Ok(ok("ab".to_string(), 2)));
    }

    #[test]
    fn bind_fails_at_second_step() {
        let p = char('a').then(&char('b'));
        assert_eq!(run(&p, "ac"), Err(1));
    }

    #[test]
    fn or_else_backtracks_to_start() {
        let p = literal("ab").or_else(&literal("ac"));
        assert_eq!(run(&p, "ac"), Ok(ok("ac".to_string(), 2)));
    }

    #[test]
    fn or_else_first_success_wins() {
        let p = literal("a").or_else(&literal("ab"));
        assert_eq!(run(&p, "ab"), Ok(ok("a".to_string(), 1)));
    }

    #[test]
    fn or_else_reports_furthest_failure() {
        let p = char('a').then(&char('b')).map(|_| ()).or_else(&char('x').map(|_| ()));
        assert_eq!(run(&p, "ac"), Err(1));
    }

    #[test]
    fn many_never_fails() {
        let p = char('a').many();
        assert_eq!(run(&p, "aab"), Ok(ok(vec!['a', 'a'], 2)));
        assert_eq!(run(&p, "b"), Ok(ok(vec![], 0)));
    }

    #[test]
    fn many_stops_on_non_consuming_success() {
        let p = success(1).many();
        assert_eq!(run(&p, "abc"), Ok(ok(vec![1], 0)));
    }

    #[test]
    fn at_least_one_needs_one() {
        let p = char('a').at_least_one();
        assert_eq!(run(&p, "aa"), Ok(ok(vec!['a', 'a'], 2)));
        assert_eq!(run(&p, "b"), Err(0));
    }

    #[test]
    fn separated_by_swallows_trailing_separator() {
        let p = char('a').separated_by(&char(','));
        assert_eq!(run(&p, "a,a,b"), Ok(ok(vec!['a', 'a'], 3)));
        assert_eq!(run(&p, "a,a"), Ok(ok(vec!['a', 'a'], 3)));
    }

    #[test]
    fn optional_never_fails() {
        let p = char('^').optional();
        assert_eq!(run(&p, "^a"), Ok(ok(Some('^'), 1)));
        assert_eq!(run(&p, "a"), Ok(ok(None, 0)));
    }

    #[test]
    fn except_rejects_item() {
        let p = any_char().except(']');
        assert_eq!(run(&p, "a"), Ok(ok('a', 1)));
        assert_eq!(run(&p, "]"), Err(0));
    }

    #[test]
    fn swallowed_failures_are_remembered() {
        let p = char('a').many();
        let res = p.parse("aab").unwrap();
        assert_eq!(res.furthest_error.map(|e| e.position), Some(2));
    }
}
