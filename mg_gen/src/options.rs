/**
 * Knobs of pattern compilation.
 */

use mg_regex::{Charset, CharsetElement};

/// Repetition count substituted for the missing upper bound of `*`, `+` and
/// `{n,}`.
pub const DEFAULT_REPEAT_CAP: u32 = 20;

/// Largest repetition count a pattern may ask for, explicit or capped.
pub const DEFAULT_REPEAT_LIMIT: u32 = 10_000;

/// What a negated character class like `[^a-z]` generates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Negation {
    /// Characters of the given alphabet that the class doesn't list.
    Complement(Charset),
    /// Refuse to compile negated classes.
    Reject,
    /// Generate the listed characters, as if the class wasn't negated.
    Ignore,
}

impl Negation {
    /// Printable ASCII, from space to tilde.
    pub fn printable_ascii() -> Self {
        Negation::Complement(Charset::new(vec![CharsetElement::Range(' ', '~')]))
    }
}

impl Default for Negation {
    fn default() -> Self {
        Self::printable_ascii()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    pub repeat_cap: u32,
    pub repeat_limit: u32,
    pub negation: Negation,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self{
            repeat_cap: DEFAULT_REPEAT_CAP,
            repeat_limit: DEFAULT_REPEAT_LIMIT,
            negation: Negation::default(),
        }
    }

    pub fn with_repeat_cap(mut self, repeat_cap: u32) -> Self {
        self.repeat_cap = repeat_cap;
        self
    }

    pub fn with_repeat_limit(mut self, repeat_limit: u32) -> Self {
        self.repeat_limit = repeat_limit;
        self
    }

    pub fn with_negation(mut self, negation: Negation) -> Self {
        self.negation = negation;
        self
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self::new()
    }
}
