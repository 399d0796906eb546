//! Prompt loops for each field.
//!
//! Every field is asked for in a loop: prompt, parse, and on rejection print
//! the field's message and ask again. There is no retry ceiling; the only
//! other way out is the input stream closing.

use std::fmt::Display;

use tracing::debug;

use crate::domain::value_objects::{
    parse_employee_name, parse_hours, parse_rate, parse_tax_rate, NameInput, PayDate, PayPeriod,
    ReportFilter,
};
use crate::error::{PayrollError, PayrollResult};
use crate::presentation::views::render_input_error;
use crate::presentation::{Console, UiContext};

pub const FROM_DATE_PROMPT: &str = "Enter from date (mm/dd/yyyy)";
pub const TO_DATE_PROMPT: &str = "Enter to date (mm/dd/yyyy)";
pub const NAME_PROMPT: &str = "Enter employee name (or type 'End' to finish)";
pub const HOURS_PROMPT: &str = "Enter total hours worked";
pub const RATE_PROMPT: &str = "Enter hourly rate";
pub const TAX_RATE_PROMPT: &str = "Enter income tax rate (e.g., 0.20 for 20%)";
pub const REPORT_FILTER_PROMPT: &str = "Enter from date for report (mm/dd/yyyy) or 'All'";

const INVALID_FROM_DATE: &str = "Invalid from date. Use mm/dd/yyyy (example: 02/19/2026).";
const INVALID_TO_DATE: &str = "Invalid to date. Use mm/dd/yyyy (example: 02/25/2026).";
const INVALID_REPORT_FILTER: &str =
    "Invalid entry. Type 'All' or enter a valid date in mm/dd/yyyy.";

/// One employee's validated answers.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeInput {
    pub name: String,
    pub hours: f64,
    pub rate: f64,
    pub tax_rate: f64,
}

/// Result of one pass through the employee prompts.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Employee(EmployeeInput),
    End,
}

/// Ask until `parse` accepts the answer.
pub fn prompt_until<T, E, F>(
    console: &mut dyn Console,
    ui: &UiContext,
    field: &str,
    prompt: &str,
    parse: F,
) -> PayrollResult<T>
where
    E: Display,
    F: Fn(&str) -> Result<T, E>,
{
    loop {
        let Some(answer) = console.read_line(prompt)? else {
            return Err(PayrollError::input_closed(field));
        };
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(reason) => {
                debug!(field, input = %answer, %reason, "rejected input");
                console.emit(&render_input_error(&reason.to_string(), ui.color))?;
            }
        }
    }
}

pub fn collect_pay_period(console: &mut dyn Console, ui: &UiContext) -> PayrollResult<PayPeriod> {
    let from = prompt_until(console, ui, "from date", FROM_DATE_PROMPT, |s| {
        PayDate::parse(s).map_err(|_| INVALID_FROM_DATE)
    })?;
    let to = prompt_until(console, ui, "to date", TO_DATE_PROMPT, |s| {
        PayDate::parse(s).map_err(|_| INVALID_TO_DATE)
    })?;
    Ok(PayPeriod::new(from, to))
}

pub fn collect_employee(console: &mut dyn Console, ui: &UiContext) -> PayrollResult<Entry> {
    let name = match prompt_until(console, ui, "employee name", NAME_PROMPT, parse_employee_name)? {
        NameInput::End => return Ok(Entry::End),
        NameInput::Employee(name) => name,
    };
    let hours = prompt_until(console, ui, "hours", HOURS_PROMPT, parse_hours)?;
    let rate = prompt_until(console, ui, "hourly rate", RATE_PROMPT, parse_rate)?;
    let tax_rate = prompt_until(console, ui, "tax rate", TAX_RATE_PROMPT, parse_tax_rate)?;

    Ok(Entry::Employee(EmployeeInput {
        name,
        hours,
        rate,
        tax_rate,
    }))
}

pub fn collect_report_filter(
    console: &mut dyn Console,
    ui: &UiContext,
) -> PayrollResult<ReportFilter> {
    prompt_until(console, ui, "report filter", REPORT_FILTER_PROMPT, |s| {
        ReportFilter::parse(s).map_err(|_| INVALID_REPORT_FILTER)
    })
}
