/**
 * Random utilities.
 */

use std::time::SystemTime;
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

/// The random source used for reproducible runs.
pub type SeededRng = Mcg128Xsl64;

pub fn seed_from_system_time() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// A random source that produces the same draws for the same seed.
pub fn seeded_rng(seed: u64) -> SeededRng {
    Mcg128Xsl64::seed_from_u64(seed)
}

/// Uniformly random permutation, using the inside-out Fisher-Yates shuffle:
/// the i-th item lands on a uniformly drawn slot j in `0..=i`, and the
/// previous occupant of j moves to i.
pub fn shuffle<T, R>(rng: &mut R, items: &[T]) -> Vec<T> where T : Clone, R : Rng + ?Sized {
    let mut result = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let j = rng.gen_range(0, i + 1);
        result.push(item.clone());
        result.swap(i, j);
    }
    result
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod rnd_tests {
    use super::*;

    #[test]
    fn same_seed_same_draws() {
        let mut a = seeded_rng(42);
        let mut b = seeded_rng(42);
        let xs: Vec<u32> = (0..8).map(|_| a.gen_range(0, 1000)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen_range(0, 1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = seeded_rng(7);
        let input: Vec<u32> = (0..16).collect();
        let mut perm = shuffle(&mut rng, &input);
        perm.sort();
        assert_eq!(perm, input);
    }

    #[test]
    fn shuffle_of_nothing() {
        let mut rng = seeded_rng(7);
        let empty: Vec<u32> = Vec::new();
        assert!(shuffle(&mut rng, &empty).is_empty());
    }

    #[test]
    fn shuffle_reaches_every_permutation() {
        let mut rng = seeded_rng(1);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..600 {
            seen.insert(shuffle(&mut rng, &['a', 'b', 'c']));
        }
        assert_eq!(seen.len(), 6);
    }
}
