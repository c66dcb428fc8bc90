/**
 * Construction-time errors. Once a generator is built, drawing from it
 * can't fail.
 */

use mg_regex::PatternError;

/// An AST that can't be turned into a generator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("pattern has no alternatives")]
    NoAlternatives,

    #[error("character class {0} contains no characters")]
    EmptyCharset(String),

    #[error("negated character class {charset} excludes the whole alphabet {alphabet}")]
    EmptyComplement {
        charset: String,
        alphabet: String,
    },

    #[error("negated character class {0} is not supported")]
    NegatedCharset(String),

    #[error("multiplicity {{{min},{max}}} has its maximum below its minimum")]
    InvalidMultiplicity {
        min: u32,
        max: u32,
    },

    #[error("repetition cap {cap} is below the minimum repetition count {min}")]
    CapBelowMinimum {
        min: u32,
        cap: u32,
    },

    #[error("repetition count {max} exceeds the limit of {limit}")]
    RepeatLimitExceeded {
        max: u32,
        limit: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("password length {length} is less than the number of character classes ({classes})")]
    InvalidPasswordConfig {
        length: usize,
        classes: usize,
    },

    #[error("cannot choose from an empty list")]
    EmptyChoice,

    #[error("empty range [{min}, {max})")]
    InvalidRange {
        min: String,
        max: String,
    },
}

impl GenError {
    pub(crate) fn invalid_range<T>(min: T, max: T) -> Self where T : std::fmt::Display {
        GenError::InvalidRange{ min: min.to_string(), max: max.to_string() }
    }
}
