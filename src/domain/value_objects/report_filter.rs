//! Report filter: every stored record, or only those starting on a date.

use std::fmt;
use std::str::FromStr;

use super::pay_date::{DateError, PayDate};

/// Literal (any case) that selects every record.
pub const ALL_TOKEN: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFilter {
    All,
    /// Records whose pay period starts on this date
    From(PayDate),
}

impl ReportFilter {
    pub fn parse(input: &str) -> Result<Self, DateError> {
        let input = input.trim();
        if input.eq_ignore_ascii_case(ALL_TOKEN) {
            return Ok(Self::All);
        }
        PayDate::parse(input).map(Self::From)
    }

    /// Match a stored from-date. Dates compare by calendar day, so `2/19/2026`
    /// on disk matches a `02/19/2026` filter; text that is not a date only
    /// matches `All`.
    pub fn matches(&self, stored_from: &str) -> bool {
        match self {
            ReportFilter::All => true,
            ReportFilter::From(date) => {
                PayDate::parse(stored_from).is_ok_and(|from| from == *date)
            }
        }
    }
}

impl fmt::Display for ReportFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFilter::All => write!(f, "All"),
            ReportFilter::From(date) => write!(f, "{}", date),
        }
    }
}

impl FromStr for ReportFilter {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
