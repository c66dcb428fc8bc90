/**
 * Uniform character draws out of character classes.
 */

use std::sync::Arc;
use rand::Rng;
use mg_regex::Charset;
use crate::error::CompileError;
use crate::generator::Generator;
use crate::options::Negation;

#[derive(Debug, Clone)]
enum Part {
    Listed(Charset),
    Chars(Vec<char>),
}

impl Part {
    fn count(&self) -> usize {
        match self {
            Part::Listed(cs) => cs.count(),
            Part::Chars(chars) => chars.len(),
        }
    }

    fn get(&self, idx: usize) -> Option<char> {
        match self {
            Part::Listed(cs) => cs.get(idx),
            Part::Chars(chars) => chars.get(idx).copied(),
        }
    }
}

/// An indexable multiset of characters. Indices walk the parts in the order
/// they were added, so draws are reproducible.
#[derive(Debug, Clone)]
pub struct CharPool {
    parts: Vec<Part>,
}

impl CharPool {
    /// The characters a charset generates, with negation resolved according to
    /// `negation`.
    pub fn from_charset(charset: &Charset, negation: &Negation) -> Result<Self, CompileError> {
        let part = if !charset.negated {
            Part::Listed(charset.clone())
        }
        else {
            match negation {
                Negation::Ignore => Part::Listed(charset.clone()),
                Negation::Reject => return Err(CompileError::NegatedCharset(charset.to_string())),
                Negation::Complement(alphabet) => {
                    let chars: Vec<char> = (0..alphabet.count())
                        .filter_map(|i| alphabet.get(i))
                        .filter(|c| !charset.contains(*c))
                        .collect();
                    if chars.is_empty() {
                        return Err(CompileError::EmptyComplement{
                            charset: charset.to_string(),
                            alphabet: alphabet.to_string(),
                        });
                    }
                    Part::Chars(chars)
                },
            }
        };
        if part.count() == 0 {
            return Err(CompileError::EmptyCharset(charset.to_string()));
        }
        Ok(Self{ parts: vec![part] })
    }

    /// Every character of every pool; duplicates count as many times as they
    /// appear.
    pub fn union<'a, I>(pools: I) -> Self where I : IntoIterator<Item = &'a CharPool> {
        Self{ parts: pools.into_iter().flat_map(|p| p.parts.iter().cloned()).collect() }
    }

    pub fn count(&self) -> usize {
        self.parts.iter().map(Part::count).sum()
    }

    pub fn get(&self, mut idx: usize) -> Option<char> {
        for part in &self.parts {
            let count = part.count();
            if idx < count {
                return part.get(idx);
            }
            idx -= count;
        }
        None
    }

    /// Uniform draw of an ordinal in `0..count()`, mapped to its character.
    pub fn generator(&self) -> Result<Generator<char>, CompileError> {
        let count = self.count();
        if count == 0 {
            return Err(CompileError::EmptyCharset(String::new()));
        }
        let pool = Arc::new(self.clone());
        Ok(Generator::from_fn(move |rng| {
            let idx = rng.gen_range(0, count);
            pool.get(idx).expect("ordinal below the pool size")
        }))
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
