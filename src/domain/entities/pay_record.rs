//! Pay Record Entity
//!
//! One employee's raw inputs for one pay period. This is what gets persisted;
//! pay figures are always recomputed from it.

use crate::domain::services::{calculate_pay, PayResult};
use crate::domain::value_objects::PayPeriod;

/// A payroll entry as it sits in the history.
///
/// The period dates are kept as the text stored on the line. Records created
/// at the prompt always carry canonical `mm/dd/yyyy` dates and validated
/// numbers; records read back from a hand-edited file may not.
#[derive(Debug, Clone, PartialEq)]
pub struct PayRecord {
    pub from: String,
    pub to: String,
    pub employee: String,
    pub hours: f64,
    pub rate: f64,
    pub tax_rate: f64,
}

impl PayRecord {
    pub fn new(
        period: PayPeriod,
        employee: impl Into<String>,
        hours: f64,
        rate: f64,
        tax_rate: f64,
    ) -> Self {
        Self {
            from: period.from.to_string(),
            to: period.to.to_string(),
            employee: employee.into(),
            hours,
            rate,
            tax_rate,
        }
    }

    pub fn pay(&self) -> PayResult {
        calculate_pay(self.hours, self.rate, self.tax_rate)
    }
}
