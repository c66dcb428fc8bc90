/**
 * Passwords that draw at least one character from every required class.
 */

use log::debug;
use mg_regex::parse_charset_body;
use crate::char_pool::CharPool;
use crate::error::GenError;
use crate::generator::{Generator, pivot, shuffle};
use crate::options::Negation;

/// Strings of exactly `length` characters. Each class body (like `a-z` or
/// `!@#$`) contributes at least one character, the other positions are
/// uniform over the union of all classes.
///
/// Fails if there are more classes than characters.
pub fn password(length: usize, classes: &[&str]) -> Result<Generator<String>, GenError> {
    let n = classes.len();
    if n > length {
        return Err(GenError::InvalidPasswordConfig{ length, classes: n });
    }

    let mut pools = Vec::with_capacity(n + 1);
    for class in classes {
        let charset = parse_charset_body(class)?;
        pools.push(CharPool::from_charset(&charset, &Negation::default())?);
    }
    let mut generators = pools.iter()
        .map(CharPool::generator)
        .collect::<Result<Vec<_>, _>>()?;
    // The union is only drawn from when positions remain after each class
    if length > n {
        generators.push(CharPool::union(pools.iter()).generator()?);
    }

    // 0, 1, ..., n-1 once each, then the union's index n for the rest
    let indices: Vec<usize> = (0..n)
        .chain(std::iter::repeat(n).take(length - n))
        .collect();

    debug!("password generator: {} character(s) over {} class(es)", length, n);
    Ok(shuffle(indices)
        .bind(move |perm| pivot(perm.into_iter().map(|i| generators[i].clone()).collect()))
        .map(|chars| chars.into_iter().collect()))
}

// Tests ///////////////////////////////////////////////////////////////////////
