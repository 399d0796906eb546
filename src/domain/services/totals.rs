//! Running totals for one loop (an entry session or a report scan).

use super::calculator::PayResult;

/// Aggregate accumulated over one loop. Start each loop from `default()`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunningTotals {
    pub employee_count: usize,
    pub total_hours: f64,
    pub total_gross: f64,
    pub total_tax: f64,
    pub total_net: f64,
}

impl RunningTotals {
    /// Fold one record's hours and pay into the totals.
    pub fn add(&mut self, hours: f64, pay: &PayResult) {
        self.employee_count += 1;
        self.total_hours += hours;
        self.total_gross += pay.gross;
        self.total_tax += pay.tax;
        self.total_net += pay.net;
    }

    pub fn is_empty(&self) -> bool {
        self.employee_count == 0
    }
}
