/**
 * The randomized value monad.
 */

use std::sync::Arc;
use rand::{Rng, RngCore};
use crate::error::GenError;
use crate::rnd;

/// A generator of `T`: a function of a random source. Drawing twice from the
/// same source state gives the same value.
///
/// Generators are immutable and cheap to clone. They can be shared between
/// threads, each drawing from its own random source.
pub struct Generator<T> {
    gen: Arc<dyn Fn(&mut dyn RngCore) -> T + Send + Sync>,
}

impl <T> Clone for Generator<T> {
    fn clone(&self) -> Self {
        Self{ gen: self.gen.clone() }
    }
}

impl <T> std::fmt::Debug for Generator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Generator<{}>", std::any::type_name::<T>())
    }
}

impl <T> Generator<T> where T : 'static {
    pub fn from_fn<F>(f: F) -> Self where F : Fn(&mut dyn RngCore) -> T + Send + Sync + 'static {
        Self{ gen: Arc::new(f) }
    }

    /// Draws one value.
    pub fn generate(&self, rng: &mut dyn RngCore) -> T {
        (self.gen)(rng)
    }

    pub fn map<U, F>(&self, f: F) -> Generator<U> where U : 'static, F : Fn(T) -> U + Send + Sync + 'static {
        let this = self.clone();
        Generator::from_fn(move |rng| f(this.generate(rng)))
    }

    /// Draws from this generator, then from the generator computed from the
    /// value. Exactly one draw from each, in that order.
    pub fn bind<U, F>(&self, f: F) -> Generator<U>
        where U : 'static, F : Fn(T) -> Generator<U> + Send + Sync + 'static {

        let this = self.clone();
        Generator::from_fn(move |rng| {
            let first = this.generate(rng);
            f(first).generate(rng)
        })
    }

    /// Draws from this generator, then from `other`.
    pub fn zip<U>(&self, other: &Generator<U>) -> Generator<(T, U)> where U : 'static {
        let this = self.clone();
        let other = other.clone();
        Generator::from_fn(move |rng| {
            let a = this.generate(rng);
            let b = other.generate(rng);
            (a, b)
        })
    }

    /// `length` independent draws, in order.
    pub fn sequence(&self, length: usize) -> Generator<Vec<T>> {
        let this = self.clone();
        Generator::from_fn(move |rng| (0..length).map(|_| this.generate(rng)).collect())
    }

    /// First draws a length in `min_length..max_length`, then that many values.
    pub fn sequence_between(&self, min_length: usize, max_length: usize) -> Result<Generator<Vec<T>>, GenError> {
        if min_length >= max_length {
            return Err(GenError::invalid_range(min_length, max_length));
        }
        Ok(self.sequence_in(min_length, max_length))
    }

    // Bounds are checked by the caller
    pub(crate) fn sequence_in(&self, min_length: usize, max_length: usize) -> Generator<Vec<T>> {
        debug_assert!(min_length < max_length);
        let this = self.clone();
        Generator::from_fn(move |rng| {
            let length = rng.gen_range(min_length, max_length);
            (0..length).map(|_| this.generate(rng)).collect()
        })
    }
}

impl Generator<char> {
    /// A string of `min_length..max_length` characters.
    pub fn string_between(&self, min_length: usize, max_length: usize) -> Result<Generator<String>, GenError> {
        Ok(self.sequence_between(min_length, max_length)?.map(|chars| chars.into_iter().collect()))
    }
}

/**
 * Free-standing generators.
 */

/// Ignores the random source.
pub fn constant<T>(value: T) -> Generator<T> where T : Clone + Send + Sync + 'static {
    Generator::from_fn(move |_| value.clone())
}

/// Turns N generators into one generator of N values, drawing from each in
/// order.
pub fn pivot<T>(generators: Vec<Generator<T>>) -> Generator<Vec<T>> where T : 'static {
    Generator::from_fn(move |rng| generators.iter().map(|g| g.generate(rng)).collect())
}

/// A uniformly random permutation of `items`.
pub fn shuffle<T>(items: Vec<T>) -> Generator<Vec<T>> where T : Clone + Send + Sync + 'static {
    Generator::from_fn(move |rng| rnd::shuffle(rng, &items))
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod generator_tests {
    use super::*;
    use crate::rnd::seeded_rng;

    fn die() -> Generator<u32> {
        Generator::from_fn(|rng| rng.gen_range(1, 7))
    }

    #[test]
    fn constant_ignores_source() {
        let mut rng = seeded_rng(0);
        assert_eq!(constant("x").generate(&mut rng), "x");
    }

    #[test]
    fn map_transforms() {
        let mut rng = seeded_rng(0);
        let v = die().map(|x| x * 10).generate(&mut rng);
        assert!(v % 10 == 0 && (10..=60).contains(&v));
    }

    #[test]
    fn bind_draws_outer_then_inner() {
        // The bound value is the length of the inner sequence
        let g = die().bind(|n| constant('x').sequence(n as usize).map(move |xs| (n, xs.len())));
        let mut rng = seeded_rng(3);
        for _ in 0..20 {
            let (n, len) = g.generate(&mut rng);
            assert_eq!(n as usize, len);
        }
    }

    #[test]
    fn bind_matches_manual_draw_order() {
        let g = die().bind(|a| die().map(move |b| (a, b)));
        let mut rng = seeded_rng(11);
        let mut manual = seeded_rng(11);
        let expected = (manual.gen_range(1, 7), manual.gen_range(1, 7));
        assert_eq!(g.generate(&mut rng), expected);
    }

    #[test]
    fn sequence_has_length() {
        let mut rng = seeded_rng(5);
        assert_eq!(die().sequence(12).generate(&mut rng).len(), 12);
    }

    #[test]
    fn sequence_between_bounds() {
        let mut rng = seeded_rng(5);
        let g = die().sequence_between(2, 5).unwrap();
        for _ in 0..50 {
            let len = g.generate(&mut rng).len();
            assert!(len >= 2 && len < 5);
        }
        assert!(die().sequence_between(3, 3).is_err());
    }

    #[test]
    fn pivot_keeps_order() {
        let mut rng = seeded_rng(5);
        let g = pivot(vec![constant(1), die(), constant(3)]);
        let v = g.generate(&mut rng);
        assert_eq!((v[0], v[2]), (1, 3));
        assert!((1..=6).contains(&v[1]));
    }

    #[test]
    fn zip_pairs() {
        let mut rng = seeded_rng(5);
        assert_eq!(constant(1).zip(&constant('a')).generate(&mut rng), (1, 'a'));
    }

    #[test]
    fn string_between_from_chars() {
        let mut rng = seeded_rng(5);
        let s = constant('z').string_between(3, 4).unwrap().generate(&mut rng);
        assert_eq!(s, "zzz");
    }

    #[test]
    fn shared_between_threads() {
        let g = die().sequence(10);
        let handles: Vec<_> = (0..4).map(|seed| {
            let g = g.clone();
            std::thread::spawn(move || g.generate(&mut seeded_rng(seed)))
        }).collect();
        let results: Vec<Vec<u32>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for (seed, result) in results.iter().enumerate() {
            assert_eq!(*result, g.generate(&mut seeded_rng(seed as u64)));
        }
    }
}
