use chrono::{Local, NaiveDate};
use std::fmt;

pub const UNKNOWN_KEY: &str = "unknown";

/// File-name key of one calendar day, `YYYY_MM_DD`, derived from an entry
/// date written as `DD.MM.YYYY`.
///
/// Only the shape is checked: the date must split on `.` into exactly three
/// parts. The parts themselves are copied as-is, so `5.3.2024` becomes
/// `2024_3_5`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(String);

impl DateKey {
    pub fn parse(date: &str) -> Option<Self> {
        let parts: Vec<&str> = date.split('.').collect();
        match parts.as_slice() {
            [day, month, year] => Some(DateKey(format!("{}_{}_{}", year, month, day))),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self) -> String {
        file_name_for_key(&self.0)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// words_<key>.json, shared by daily files and the unknown bucket
pub fn file_name_for_key(key: &str) -> String {
    format!("words_{}.json", key)
}

/// Daily file name for a `DD.MM.YYYY` date, or `None` when the date is malformed.
pub fn daily_file_name(date: &str) -> Option<String> {
    DateKey::parse(date).map(|key| key.file_name())
}

// DD.MM.YYYY, zero padded
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
