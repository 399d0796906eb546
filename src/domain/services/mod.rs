//! Domain Services
//!
//! Stateless calculations over domain values.

mod calculator;
mod totals;

pub use calculator::{calculate_pay, PayResult};
pub use totals::RunningTotals;
