/**
 * Turns a pattern AST into a generator of strings in its language.
 */

use log::{debug, trace};
use rand::Rng;
use mg_regex::{Alternatives, Atom, Charset, Expression, Sequence};
use crate::char_pool::CharPool;
use crate::error::{CompileError, GenError};
use crate::generator::{Generator, constant, pivot};
use crate::options::CompileOptions;

/// Compiles with the default options.
pub fn compile(ast: &Alternatives) -> Result<Generator<String>, CompileError> {
    compile_with(ast, &CompileOptions::default())
}

pub fn compile_with(ast: &Alternatives, options: &CompileOptions) -> Result<Generator<String>, CompileError> {
    let gen = Compiler{ options }.alternatives(ast)?;
    debug!("compiled pattern {} (repeat cap {})", ast, options.repeat_cap);
    Ok(gen)
}

/// Parses and compiles a pattern with the default options.
pub fn regex(pattern: &str) -> Result<Generator<String>, GenError> {
    regex_with(pattern, &CompileOptions::default())
}

pub fn regex_with(pattern: &str, options: &CompileOptions) -> Result<Generator<String>, GenError> {
    let ast = mg_regex::parse_pattern(pattern)?;
    Ok(compile_with(&ast, options)?)
}

struct Compiler<'a> {
    options: &'a CompileOptions,
}

impl <'a> Compiler<'a> {
    // Every alternative is equally likely, no matter how much it branches
    fn alternatives(&self, ast: &Alternatives) -> Result<Generator<String>, CompileError> {
        let gens = ast.sequences.iter()
            .map(|s| self.sequence(s))
            .collect::<Result<Vec<_>, _>>()?;
        trace!("alternatives {} with {} branch(es)", ast, gens.len());
        let n = gens.len();
        if n == 0 {
            return Err(CompileError::NoAlternatives);
        }
        // Drawn even for a single branch
        let index = Generator::from_fn(move |rng| rng.gen_range(0, n));
        Ok(index.bind(move |i| gens[i].clone()))
    }

    fn sequence(&self, ast: &Sequence) -> Result<Generator<String>, CompileError> {
        let gens = ast.atoms.iter()
            .map(|a| self.atom(a))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(pivot(gens).map(|parts| parts.concat()))
    }

    fn atom(&self, ast: &Atom) -> Result<Generator<String>, CompileError> {
        let mult = ast.multiplicity;
        let max = match mult.max {
            Some(max) if max < mult.min => {
                return Err(CompileError::InvalidMultiplicity{ min: mult.min, max });
            },
            Some(max) => max,
            None if self.options.repeat_cap < mult.min => {
                return Err(CompileError::CapBelowMinimum{ min: mult.min, cap: self.options.repeat_cap });
            },
            None => self.options.repeat_cap,
        };
        if max > self.options.repeat_limit {
            return Err(CompileError::RepeatLimitExceeded{ max, limit: self.options.repeat_limit });
        }
        let expr = self.expression(&ast.expression)?;
        trace!("atom {} repeats {}..={}", ast, mult.min, max);
        // The count is drawn even for exactly one repetition
        Ok(expr.sequence_in(mult.min as usize, max as usize + 1).map(|parts| parts.concat()))
    }

    fn expression(&self, ast: &Expression) -> Result<Generator<String>, CompileError> {
        match ast {
            Expression::Charset(charset) => self.charset(charset),
            Expression::Literal(literal) => Ok(constant(literal.value.clone())),
            Expression::Group(group) => self.alternatives(&group.root),
        }
    }

    fn charset(&self, ast: &Charset) -> Result<Generator<String>, CompileError> {
        let pool = CharPool::from_charset(ast, &self.options.negation)?;
        Ok(pool.generator()?.map(|c| c.to_string()))
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
