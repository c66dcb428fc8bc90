/**
 * Composable random generators, and the compiler from patterns to string
 * generators.
 */

extern crate mg_regex;
extern crate rand;

mod char_pool;
mod compile;
mod error;
mod generator;
mod options;
mod password;
mod ranges;
mod rnd;

pub use char_pool::CharPool;
pub use compile::{compile, compile_with, regex, regex_with};
pub use error::{CompileError, GenError};
pub use generator::{Generator, constant, pivot, shuffle};
pub use options::{CompileOptions, Negation, DEFAULT_REPEAT_CAP, DEFAULT_REPEAT_LIMIT};
pub use password::password;
pub use ranges::{Variants, char_of, character, date_range, date_range_by, double, int_range, long_range,
    one_of, one_of_variants};
pub use rnd::{SeededRng, seed_from_system_time, seeded_rng};
