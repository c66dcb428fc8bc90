/**
 * The pattern grammar, composed from parser combinators.
 */

use mg_parser::{Parser, any_char, char, regex_token, success, one_of, recursive};
use crate::ast::{Alternatives, Atom, Charset, CharsetElement, Expression, Group, Literal, Multiplicity, Sequence};

/*
 * Reference grammar (ordered choice, the first matching alternative wins):
 *
 * single        ::= ANY_CHAR_BUT(']')
 * range         ::= single '-' single          (first <= last)
 * charset_body  ::= '^'? (range | single)*
 * charset       ::= '[' charset_body ']'
 * literal       ::= /[A-Za-z0-9$@#%&_-]+/
 * expression    ::= charset | literal | group
 * range_mult    ::= '{' DIGITS (',' DIGITS?)? '}'
 * multiplicity  ::= range_mult | '*' | '+' | <empty>
 * atom          ::= expression multiplicity
 * sequence      ::= atom+
 * alternatives  ::= sequence ('|' sequence)*
 * group         ::= '(' alternatives ')'
 */

/// Every rule of the grammar, each built exactly once.
///
/// `group` and everything above it refer back to `alternatives`, the rules
/// are only usable while the grammar itself is alive.
pub struct Grammar {
    pub single: Parser<CharsetElement>,
    pub range: Parser<CharsetElement>,
    pub charset_body: Parser<Charset>,
    pub charset: Parser<Charset>,
    pub literal: Parser<Literal>,
    pub range_multiplicity: Parser<Multiplicity>,
    pub multiplicity: Parser<Multiplicity>,
    pub expression: Parser<Expression>,
    pub atom: Parser<Atom>,
    pub sequence: Parser<Sequence>,
    pub group: Parser<Group>,
    pub alternatives: Parser<Alternatives>,
}

struct RecursiveRules {
    expression: Parser<Expression>,
    atom: Parser<Atom>,
    sequence: Parser<Sequence>,
    group: Parser<Group>,
}

impl Grammar {
    pub fn new() -> Self {
        let set_char = any_char().except(']');

        let single = set_char.map(CharsetElement::Single);

        // ']' always closes the class, it is never a range endpoint
        let range = set_char
            .then_ignore(&char('-'))
            .then(&set_char)
            .filter("a range in ascending order", |(first, last)| first <= last)
            .map(|(first, last)| CharsetElement::Range(first, last));

        let charset_body = char('^').optional()
            .then(&range.or_else(&single).many())
            .map(|(caret, elements)| match caret {
                Some(_) => Charset::negated(elements),
                None => Charset::new(elements),
            });

        let charset = char('[')
            .ignore_then(&charset_body)
            .then_ignore(&char(']'));

        let literal = regex_token("[A-Za-z0-9$@#%&_-]+")
            .map(|m| Literal::new(m.as_str()));

        let range_multiplicity = regex_token(r"\{([0-9]+)(,([0-9]+)?)?\}")
            .bind(|m| {
                let bounds = (m.group(1), m.group(2), m.group(3));
                match parse_bounds(bounds) {
                    Some(mult) if mult.is_valid() => success(mult),
                    _ => mg_parser::fail(),
                }
            });

        let multiplicity = one_of(&[
            range_multiplicity.clone(),
            char('*').map(|_| Multiplicity::ZERO_TO_MANY),
            char('+').map(|_| Multiplicity::ONE_TO_MANY),
            success(Multiplicity::ONE),
        ]);

        let mut rules = None;
        let alternatives = recursive(|alternatives: Parser<Alternatives>| {
            let group = char('(')
                .ignore_then(&alternatives)
                .then_ignore(&char(')'))
                .map(Group::new);

            let expression = one_of(&[
                charset.map(Expression::Charset),
                literal.map(Expression::Literal),
                group.map(Expression::Group),
            ]);

            let atom = expression
                .then(&multiplicity)
                .map(|(expression, multiplicity)| Atom::new(expression, multiplicity));

            let sequence = atom.at_least_one().map(Sequence::new);

            let root = sequence.separated_by(&char('|')).map(Alternatives::new);
            rules = Some(RecursiveRules{ expression, atom, sequence, group });
            root
        });
        let RecursiveRules{ expression, atom, sequence, group } = match rules {
            Some(rules) => rules,
            None => unreachable!("recursive rules are defined eagerly"),
        };

        Self{
            single,
            range,
            charset_body,
            charset,
            literal,
            range_multiplicity,
            multiplicity,
            expression,
            atom,
            sequence,
            group,
            alternatives,
        }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

// {n} -> (n, n), {n,} -> (n, inf), {n,m} -> (n, m)
fn parse_bounds(groups: (Option<&str>, Option<&str>, Option<&str>)) -> Option<Multiplicity> {
    match groups {
        (Some(min), None, _) => min.parse().ok().map(Multiplicity::exactly),
        (Some(min), Some(_), None) => min.parse().ok().map(Multiplicity::at_least),
        (Some(min), Some(_), Some(max)) => {
            let min = min.parse().ok()?;
            let max = max.parse().ok()?;
            Some(Multiplicity::between(min, max))
        },
        (None, _, _) => None,
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
