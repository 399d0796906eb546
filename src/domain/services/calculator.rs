//! Pay calculation.
//!
//! `gross = hours * rate`, `tax = gross * tax_rate`, `net = gross - tax`.
//! Nothing is rounded here; rounding is a display concern.

/// Derived pay figures for one record. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PayResult {
    pub gross: f64,
    pub tax: f64,
    pub net: f64,
}

pub fn calculate_pay(hours: f64, rate: f64, tax_rate: f64) -> PayResult {
    let gross = hours * rate;
    let tax = gross * tax_rate;
    PayResult {
        gross,
        tax,
        net: gross - tax,
    }
}
