//! Pay Date Value Object
//!
//! A calendar date in strict `mm/dd/yyyy` form:
//! - month and day are 1-2 ASCII digits
//! - year is exactly 4 ASCII digits
//! - the triple must be a real calendar date (no 13/40/2026, no 02/30/2026)
//!
//! Always rendered zero-padded, so `1/5/2026` and `01/05/2026` are the same
//! date and persist identically.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

pub const DATE_FORMAT_HINT: &str = "mm/dd/yyyy";

/// Error when a date string is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Not three `/`-separated numeric parts of the right widths
    Format,
    /// Well formed, but not a day on the calendar
    NotOnCalendar,
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::Format => write!(f, "date must be {}", DATE_FORMAT_HINT),
            DateError::NotOnCalendar => write!(f, "date does not exist on the calendar"),
        }
    }
}

impl std::error::Error for DateError {}

/// A validated `mm/dd/yyyy` date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PayDate(NaiveDate);

impl PayDate {
    /// Parse a date string. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, DateError> {
        let mut parts = input.trim().split('/');
        let (Some(month), Some(day), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(DateError::Format);
        };

        let month = digits(month, 1, 2)?;
        let day = digits(day, 1, 2)?;
        let year = digits(year, 4, 4)?;

        NaiveDate::from_ymd_opt(year as i32, month, day)
            .map(Self)
            .ok_or(DateError::NotOnCalendar)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

/// True iff `input` is a strict `mm/dd/yyyy` calendar date.
pub fn is_valid_date(input: &str) -> bool {
    PayDate::parse(input).is_ok()
}

fn digits(part: &str, min: usize, max: usize) -> Result<u32, DateError> {
    if part.len() < min || part.len() > max || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::Format);
    }
    part.parse().map_err(|_| DateError::Format)
}

impl fmt::Display for PayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:04}",
            self.0.month(),
            self.0.day(),
            self.0.year()
        )
    }
}

impl FromStr for PayDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
