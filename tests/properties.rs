//! Property tests for payroll.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/pay_calculator.rs"]
mod pay_calculator;

#[path = "properties/history_format.rs"]
mod history_format;

#[path = "properties/date_validation.rs"]
mod date_validation;
