
use mg_gen::{Generator, seeded_rng};

/// `count` draws from one seeded source.
pub fn draw<T>(gen: &Generator<T>, seed: u64, count: usize) -> Vec<T> where T : 'static {
    let mut rng = seeded_rng(seed);
    (0..count).map(|_| gen.generate(&mut rng)).collect()
}

/// Matches the whole string against a pattern written in the same syntax.
pub fn full_match(pattern: &str) -> regex::Regex {
    regex::Regex::new(&format!("^(?:{})$", pattern)).unwrap()
}
