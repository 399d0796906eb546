//! Domain Value Objects
//!
//! Immutable, validated value types.

mod pay_date;
mod pay_inputs;
mod pay_period;
mod report_filter;

pub use pay_date::{is_valid_date, DateError, PayDate, DATE_FORMAT_HINT};
pub use pay_inputs::{
    check_range, parse_employee_name, parse_hours, parse_number, parse_rate, parse_tax_rate,
    InputError, NameInput, NumericField, END_TOKEN, FIELD_DELIMITER,
};
pub use pay_period::PayPeriod;
pub use report_filter::{ReportFilter, ALL_TOKEN};
