//! Birth date parsing.
//!
//! A birth date is parsed and validated once, from the fixed `YYYY-MM-DD`
//! shape or from three components. Downstream code never re-validates.

use chrono::NaiveDate;

use crate::error::InputError;

/// Earliest supported birth year.
pub const MIN_YEAR: u32 = 1900;

/// Latest supported birth year.
pub const MAX_YEAR: u32 = 2100;

/// A validated Gregorian birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate {
    // Field order gives chronological Ord.
    year: u32,
    month: u32,
    day: u32,
}

impl BirthDate {
    /// Build from components, checking ranges and calendar existence.
    pub fn new(day: u32, month: u32, year: u32) -> Result<Self, InputError> {
        if !(1..=31).contains(&day) {
            return Err(InputError::DayOutOfRange(day));
        }
        if !(1..=12).contains(&month) {
            return Err(InputError::MonthOutOfRange(month));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(InputError::YearOutOfRange(year));
        }
        if NaiveDate::from_ymd_opt(year as i32, month, day).is_none() {
            return Err(InputError::NonexistentDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Parse the fixed `YYYY-MM-DD` shape (exactly ten characters).
    pub fn parse(s: &str) -> Result<Self, InputError> {
        let bytes = s.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !shape_ok {
            return Err(InputError::InvalidDateFormat(s.to_string()));
        }
        let number = |range: std::ops::Range<usize>| {
            bytes[range]
                .iter()
                .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
        };
        Self::new(number(8..10), number(5..7), number(0..4))
    }

    /// Day of month, 1..=31.
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Month, 1..=12.
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Year, 1900..=2100.
    pub const fn year(&self) -> u32 {
        self.year
    }

    /// The canonical `YYYY-MM-DD` string.
    pub fn canonical(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Decimal digits of the canonical form, in order.
    pub fn digits(&self) -> Vec<u32> {
        self.canonical()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .collect()
    }

    /// Same date as a chrono value.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year as i32, self.month, self.day)
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::str::FromStr for BirthDate {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
