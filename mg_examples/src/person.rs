/**
 * Synthetic person records.
 */

use std::fmt;
use anyhow::anyhow;
use chrono::{DateTime, TimeZone, Utc};
use mg_gen::{Generator, date_range, int_range, regex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub birthday: DateTime<Utc>,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>6}  {:<18} {}", self.id, self.name, self.birthday.format("%Y-%m-%d"))
    }
}

fn utc_midnight(year: i32, month: u32, day: u32) -> anyhow::Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .ok_or_else(|| anyhow!("no such date: {}-{}-{}", year, month, day))
}

/// People with ids in `[1, 100000)`, a capitalized name and a birthday in the
/// 20th century.
pub fn people() -> anyhow::Result<Generator<Person>> {
    let ids = int_range(1, 100_000)?;
    let names = regex("[A-Z][a-z]{2,16}")?;
    let birthdays = date_range(utc_midnight(1900, 1, 1)?, utc_midnight(2000, 1, 1)?)?;

    Ok(ids.zip(&names).zip(&birthdays).map(|((id, name), birthday)| Person{ id, name, birthday }))
}

// Tests ///////////////////////////////////////////////////////////////////////
