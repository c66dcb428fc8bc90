/**
 * All of the pattern syntax-tree (AST) data-structures.
 */

use std::fmt;

/// An element of a character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharsetElement {
    Single(char),
    /// Inclusive on both ends, the first must not be greater than the last.
    Range(char, char),
}

// Surrogates are not chars, ranges spanning them skip the gap
const SURROGATE_START: u32 = 0xD800;
const SURROGATE_LEN: u32 = 0x800;

fn surrogates_in(first: u32, last: u32) -> u32 {
    if first < SURROGATE_START && last >= SURROGATE_START + SURROGATE_LEN { SURROGATE_LEN } else { 0 }
}

impl CharsetElement {
    pub fn count(&self) -> usize {
        match *self {
            CharsetElement::Single(_) => 1,
            CharsetElement::Range(first, last) => {
                let (first, last) = (first as u32, last as u32);
                if last < first {
                    0
                }
                else {
                    (last - first + 1 - surrogates_in(first, last)) as usize
                }
            },
        }
    }

    /// The `idx`th character of the element, in ascending order.
    pub fn get(&self, idx: usize) -> Option<char> {
        if idx >= self.count() {
            return None;
        }
        match *self {
            CharsetElement::Single(c) => Some(c),
            CharsetElement::Range(first, _) => {
                let mut code = first as u32 + idx as u32;
                if (first as u32) < SURROGATE_START && code >= SURROGATE_START {
                    code += SURROGATE_LEN;
                }
                std::char::from_u32(code)
            },
        }
    }

    pub fn contains(&self, c: char) -> bool {
        match *self {
            CharsetElement::Single(s) => s == c,
            CharsetElement::Range(first, last) => first <= c && c <= last,
        }
    }
}

/// A character class, like `[^a-z0-9_]`. Elements are kept in the order they
/// were written, which is the order `get` indexes them in.
#[derive(Debug, Clone)]
pub struct Charset {
    pub negated: bool,
    elements: Vec<CharsetElement>,
}

impl Charset {
    pub fn new(elements: Vec<CharsetElement>) -> Self {
        Self{ negated: false, elements }
    }

    pub fn negated(elements: Vec<CharsetElement>) -> Self {
        Self{ negated: true, elements }
    }

    pub fn elements(&self) -> &[CharsetElement] {
        &self.elements
    }

    /// Number of characters listed. Negation is not taken into account.
    pub fn count(&self) -> usize {
        self.elements.iter().map(CharsetElement::count).sum()
    }

    /// Maps an ordinal in `0..count()` to a listed character, walking the
    /// elements in order.
    pub fn get(&self, mut idx: usize) -> Option<char> {
        for element in &self.elements {
            let count = element.count();
            if idx < count {
                return element.get(idx);
            }
            idx -= count;
        }
        None
    }

    /// Checks if the character is listed. Negation is not taken into account.
    pub fn contains(&self, c: char) -> bool {
        self.elements.iter().any(|e| e.contains(c))
    }

    /// Checks if the character is matched by the class, honoring negation.
    pub fn matches(&self, c: char) -> bool {
        self.contains(c) != self.negated
    }

    fn sorted_elements(&self) -> Vec<CharsetElement> {
        let mut elements = self.elements.clone();
        elements.sort();
        elements
    }
}

// Equality doesn't care about element order
impl PartialEq for Charset {
    fn eq(&self, other: &Self) -> bool {
        self.negated == other.negated
            && self.elements.len() == other.elements.len()
            && self.sorted_elements() == other.sorted_elements()
    }
}

impl Eq for Charset {}

/// A fixed string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    pub value: String,
}

impl Literal {
    pub fn new<S>(value: S) -> Self where S : Into<String> {
        Self{ value: value.into() }
    }
}

/// A parenthesized sub-pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub root: Alternatives,
}

impl Group {
    pub fn new(root: Alternatives) -> Self {
        Self{ root }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Charset(Charset),
    Literal(Literal),
    Group(Group),
}

/// How many times an atom repeats. `max` of `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Multiplicity {
    pub min: u32,
    pub max: Option<u32>,
}

impl Multiplicity {
    pub const ONE: Multiplicity = Multiplicity{ min: 1, max: Some(1) };
    pub const ZERO_TO_MANY: Multiplicity = Multiplicity{ min: 0, max: None };
    pub const ONE_TO_MANY: Multiplicity = Multiplicity{ min: 1, max: None };

    pub fn exactly(n: u32) -> Self {
        Self{ min: n, max: Some(n) }
    }

    pub fn at_least(min: u32) -> Self {
        Self{ min, max: None }
    }

    pub fn between(min: u32, max: u32) -> Self {
        Self{ min, max: Some(max) }
    }

    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }

    pub fn is_repeating(&self) -> bool {
        match self.max {
            None => true,
            Some(max) => max > 1,
        }
    }

    /// `max` is either unbounded or not less than `min`.
    pub fn is_valid(&self) -> bool {
        self.max.map_or(true, |max| max >= self.min)
    }
}

impl Default for Multiplicity {
    fn default() -> Self {
        Self::ONE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    pub expression: Expression,
    pub multiplicity: Multiplicity,
}

impl Atom {
    pub fn new(expression: Expression, multiplicity: Multiplicity) -> Self {
        Self{ expression, multiplicity }
    }

    pub fn once(expression: Expression) -> Self {
        Self::new(expression, Multiplicity::ONE)
    }
}

/// Atoms concatenated left-to-right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub atoms: Vec<Atom>,
}

impl Sequence {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self{ atoms }
    }
}

/// `seq1|seq2|...`, the root of every pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternatives {
    pub sequences: Vec<Sequence>,
}

impl Alternatives {
    pub fn new(sequences: Vec<Sequence>) -> Self {
        Self{ sequences }
    }
}

/**
 * Printing back to pattern syntax.
 */

impl fmt::Display for CharsetElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharsetElement::Single(c) => write!(f, "{}", c),
            CharsetElement::Range(a, b) => write!(f, "{}-{}", a, b),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        if self.negated {
            write!(f, "^")?;
        }
        for element in &self.elements {
            write!(f, "{}", element)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (1, Some(1)) => Ok(()),
            (0, None) => write!(f, "*"),
            (1, None) => write!(f, "+"),
            (n, None) => write!(f, "{{{},}}", n),
            (n, Some(m)) if n == m => write!(f, "{{{}}}", n),
            (n, Some(m)) => write!(f, "{{{},{}}}", n, m),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Charset(c) => write!(f, "{}", c),
            Expression::Literal(l) => write!(f, "{}", l.value),
            Expression::Group(g) => write!(f, "({})", g.root),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.expression, self.multiplicity)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for atom in &self.atoms {
            write!(f, "{}", atom)?;
        }
        Ok(())
    }
}

impl fmt::Display for Alternatives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, sequence) in self.sequences.iter().enumerate() {
            if idx > 0 {
                write!(f, "|")?;
            }
            write!(f, "{}", sequence)?;
        }
        Ok(())
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod ast_tests {
    use super::*;

    fn rng(a: char, b: char) -> CharsetElement {
        CharsetElement::Range(a, b)
    }

    fn ch(c: char) -> CharsetElement {
        CharsetElement::Single(c)
    }

    #[test]
    fn charset_count() {
        let cs = Charset::new(vec![rng('A', 'Z'), ch('_'), rng('0', '9')]);
        assert_eq!(cs.count(), 26 + 1 + 10);
    }

    #[test]
    fn charset_indexing_in_element_order() {
        let cs = Charset::new(vec![rng('a', 'c'), ch('_'), rng('0', '1')]);
        let all: Vec<char> = (0..cs.count()).filter_map(|i| cs.get(i)).collect();
        assert_eq!(all, vec!['a', 'b', 'c', '_', '0', '1']);
        assert_eq!(cs.get(6), None);
    }

    #[test]
    fn charset_equality_ignores_order() {
        let a = Charset::new(vec![rng('A', 'Z'), rng('a', 'z')]);
        let b = Charset::new(vec![rng('a', 'z'), rng('A', 'Z')]);
        assert_eq!(a, b);
        assert_ne!(a, Charset::negated(vec![rng('a', 'z'), rng('A', 'Z')]));
        assert_ne!(a, Charset::new(vec![rng('a', 'z')]));
    }

    #[test]
    fn range_skips_surrogates() {
        let e = rng('\u{D7FF}', '\u{E000}');
        assert_eq!(e.count(), 2);
        assert_eq!(e.get(0), Some('\u{D7FF}'));
        assert_eq!(e.get(1), Some('\u{E000}'));
    }

    #[test]
    fn negation_in_matching() {
        let cs = Charset::negated(vec![rng('a', 'z')]);
        assert!(cs.contains('q'));
        assert!(!cs.matches('q'));
        assert!(cs.matches('Q'));
    }

    #[test]
    fn multiplicity_kinds() {
        assert!(!Multiplicity::ONE.is_repeating());
        assert!(Multiplicity::ONE_TO_MANY.is_unbounded());
        assert!(Multiplicity::between(2, 4).is_repeating());
        assert!(!Multiplicity::between(4, 2).is_valid());
    }

    #[test]
    fn display_round_trips_syntax() {
        let alt = Alternatives::new(vec![
            Sequence::new(vec![
                Atom::once(Expression::Literal(Literal::new("MS"))),
                Atom::new(Expression::Charset(Charset::new(vec![rng('0', '9')])), Multiplicity::exactly(6)),
            ]),
            Sequence::new(vec![
                Atom::new(Expression::Group(Group::new(Alternatives::new(vec![
                    Sequence::new(vec![Atom::once(Expression::Literal(Literal::new("b")))]),
                    Sequence::new(vec![Atom::once(Expression::Literal(Literal::new("c")))]),
                ]))), Multiplicity::ZERO_TO_MANY),
                Atom::new(Expression::Charset(Charset::negated(vec![ch('x')])), Multiplicity::at_least(2)),
                Atom::new(Expression::Literal(Literal::new("d")), Multiplicity::between(1, 3)),
            ]),
        ]);
        assert_eq!(alt.to_string(), "MS[0-9]{6}|(b|c)*[^x]{2,}d{1,3}");
    }
}
