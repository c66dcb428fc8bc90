/**
 * Uniform draws over numbers, dates, lists and character classes.
 */

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use crate::char_pool::CharPool;
use crate::error::GenError;
use crate::generator::Generator;
use crate::options::Negation;

/// Uniform in `[min, max)`.
pub fn int_range(min: i32, max: i32) -> Result<Generator<i32>, GenError> {
    if min >= max {
        return Err(GenError::invalid_range(min, max));
    }
    Ok(Generator::from_fn(move |rng| rng.gen_range(min, max)))
}

/// Uniform in `[min, max)`.
pub fn long_range(min: i64, max: i64) -> Result<Generator<i64>, GenError> {
    if min >= max {
        return Err(GenError::invalid_range(min, max));
    }
    Ok(Generator::from_fn(move |rng| rng.gen_range(min, max)))
}

/// Uniform in `[0, 1)`.
pub fn double() -> Generator<f64> {
    Generator::from_fn(|rng| rng.gen::<f64>())
}

/// Uniform over `[min, max)` at microsecond resolution.
pub fn date_range(min: DateTime<Utc>, max: DateTime<Utc>) -> Result<Generator<DateTime<Utc>>, GenError> {
    date_range_by(min, max, Duration::microseconds(1))
}

/// Uniform over the instants `min + k * step` that fall before `max`.
pub fn date_range_by(min: DateTime<Utc>, max: DateTime<Utc>, step: Duration)
    -> Result<Generator<DateTime<Utc>>, GenError> {

    let (steps, step) = match ((max - min).num_microseconds(), step.num_microseconds()) {
        (Some(span), Some(step)) if span > 0 && step > 0 => ((span + step - 1) / step, step),
        _ => return Err(GenError::invalid_range(min, max)),
    };
    Ok(long_range(0, steps)?.map(move |k| min + Duration::microseconds(k * step)))
}

/// Uniform over the listed items.
pub fn one_of<T>(items: Vec<T>) -> Result<Generator<T>, GenError> where T : Clone + Send + Sync + 'static {
    if items.is_empty() {
        return Err(GenError::EmptyChoice);
    }
    Ok(Generator::from_fn(move |rng| items[rng.gen_range(0, items.len())].clone()))
}

/// Types with a fixed, listable set of values, like field-less enums.
pub trait Variants : Sized {
    fn variants() -> Vec<Self>;
}

/// Uniform over every value of `E`.
pub fn one_of_variants<E>() -> Result<Generator<E>, GenError> where E : Variants + Clone + Send + Sync + 'static {
    one_of(E::variants())
}

/// Uniform over the characters of `items`.
pub fn char_of(items: &str) -> Result<Generator<char>, GenError> {
    one_of(items.chars().collect())
}

/// Uniform over a character class body, like `a-z0-9_`. A leading `^`
/// complements over printable ASCII.
pub fn character(charset_text: &str) -> Result<Generator<char>, GenError> {
    let charset = mg_regex::parse_charset_body(charset_text)?;
    let pool = CharPool::from_charset(&charset, &Negation::default())?;
    Ok(pool.generator()?)
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod ranges_tests {
    use super::*;
    use chrono::TimeZone;
    use crate::rnd::seeded_rng;

    fn draws<T>(gen: &Generator<T>, n: usize) -> Vec<T> where T : 'static {
        let mut rng = seeded_rng(7);
        (0..n).map(|_| gen.generate(&mut rng)).collect()
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Suit { Hearts, Spades }

    impl Variants for Suit {
        fn variants() -> Vec<Self> {
            vec![Suit::Hearts, Suit::Spades]
        }
    }

    #[test]
    fn int_range_is_half_open() {
        let out = draws(&int_range(-2, 2).unwrap(), 500);
        assert!(out.iter().all(|x| (-2..2).contains(x)));
        assert!(out.contains(&-2));
        assert!(out.contains(&1));
    }

    #[test]
    fn empty_ranges_rejected() {
        assert!(int_range(3, 3).is_err());
        assert!(long_range(5, 1).is_err());
    }

    #[test]
    fn double_in_unit_interval() {
        assert!(draws(&double(), 200).iter().all(|x| *x >= 0.0 && *x < 1.0));
    }

    #[test]
    fn dates_stay_in_range() {
        let min = Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap();
        let max = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let out = draws(&date_range(min, max).unwrap(), 200);
        assert!(out.iter().all(|d| *d >= min && *d < max));
    }

    #[test]
    fn dates_land_on_steps() {
        let min = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let max = Utc.with_ymd_and_hms(2020, 1, 11, 0, 0, 0).unwrap();
        let out = draws(&date_range_by(min, max, Duration::days(1)).unwrap(), 200);
        for d in &out {
            assert!(*d < max);
            assert_eq!((*d - min).num_seconds() % 86_400, 0);
        }
        assert!(out.contains(&min));
        assert!(out.contains(&(min + Duration::days(9))));
    }

    #[test]
    fn reversed_dates_rejected() {
        let min = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert!(date_range(min, min).is_err());
        assert!(date_range_by(min, min + Duration::days(1), Duration::zero()).is_err());
    }

    #[test]
    fn one_of_needs_items() {
        assert_eq!(one_of::<u8>(vec![]).unwrap_err(), GenError::EmptyChoice);
        assert!(draws(&one_of(vec![4, 5]).unwrap(), 50).iter().all(|x| *x == 4 || *x == 5));
    }

    #[test]
    fn enum_variants() {
        let out = draws(&one_of_variants::<Suit>().unwrap(), 100);
        assert!(out.contains(&Suit::Hearts));
        assert!(out.contains(&Suit::Spades));
    }

    #[test]
    fn chars_from_string() {
        assert!(draws(&char_of("xyz").unwrap(), 50).iter().all(|c| "xyz".contains(*c)));
        assert!(char_of("").is_err());
    }

    #[test]
    fn chars_from_class() {
        let out = draws(&character("a-c_").unwrap(), 200);
        assert!(out.iter().all(|c| ('a'..='c').contains(c) || *c == '_'));
        assert!(out.contains(&'_'));
    }

    #[test]
    fn negated_class_complements() {
        let out = draws(&character("^ -}").unwrap(), 20);
        assert!(out.iter().all(|c| *c == '~'));
    }
}
