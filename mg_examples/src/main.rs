/**
 * Prints random strings, passwords or people.
 */

extern crate mg_gen;

mod person;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use mg_gen::{CompileOptions, DEFAULT_REPEAT_CAP, Generator, password, regex_with, seed_from_system_time, seeded_rng};

#[derive(Parser)]
#[command(name = "mongen")]
#[command(about = "Generates random data from patterns like MS[0-9]{6}|abcd")]
struct Cli {
    /// Seed of the random source; the system time when missing
    #[arg(long)]
    seed: Option<u64>,

    /// Number of values to print
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Repetition count used for the missing upper bound of *, + and {n,}
    #[arg(long, default_value_t = DEFAULT_REPEAT_CAP)]
    repeat_cap: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Strings matching a pattern
    Pattern {
        pattern: String,
    },

    /// Passwords with at least one character of every class
    Password {
        length: usize,

        /// Character class bodies, like a-z or !@#$
        #[arg(required = true)]
        classes: Vec<String>,
    },

    /// Person records
    People,
}

fn print_all<T>(gen: &Generator<T>, seed: u64, count: usize) where T : std::fmt::Display + 'static {
    let mut rng = seeded_rng(seed);
    for _ in 0..count {
        println!("{}", gen.generate(&mut rng));
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let seed = match cli.seed {
        Some(seed) => seed,
        None => {
            let seed = seed_from_system_time();
            info!("using seed {}", seed);
            seed
        },
    };

    match &cli.command {
        Command::Pattern{ pattern } => {
            let options = CompileOptions::default().with_repeat_cap(cli.repeat_cap);
            let gen = regex_with(pattern, &options)?;
            print_all(&gen, seed, cli.count);
        },
        Command::Password{ length, classes } => {
            let classes: Vec<&str> = classes.iter().map(String::as_str).collect();
            let gen = password(*length, &classes)
                .with_context(|| format!("cannot build a password generator for {:?}", classes))?;
            print_all(&gen, seed, cli.count);
        },
        Command::People => {
            print_all(&person::people()?, seed, cli.count);
        },
    }
    Ok(())
}
