//! Pay period covered by one payroll run.

use std::fmt;

use super::pay_date::PayDate;

/// The from/to date range a payroll run applies to.
///
/// Only the format of each date is validated; a period whose `to` precedes
/// its `from` is accepted as entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayPeriod {
    pub from: PayDate,
    pub to: PayDate,
}

impl PayPeriod {
    pub fn new(from: PayDate, to: PayDate) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}
