//! Text rendering for pay stubs and totals.
//!
//! Every function here is pure: it returns the text and the caller decides
//! where it goes. Currency shows as `$` with 2 decimals, tax rates as a
//! percentage, hours with 2 decimals.

use crate::domain::entities::PayRecord;
use crate::domain::services::{PayResult, RunningTotals};

use super::text::ColoredText;

pub const NO_DATA_MESSAGE: &str = "No data file found yet. Enter employee records first.";
pub const NO_MATCH_MESSAGE: &str = "No matching records found.";

pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", positive_zero(amount))
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", positive_zero(hours))
}

pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", positive_zero(rate * 100.0))
}

// `-0.0` would otherwise print as "-0.00".
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

fn block(heading: &str, lines: &[String], footer: &str, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&ColoredText::info(heading).bold().render(color));
    out.push('\n');
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&ColoredText::dim(footer).render(color));
    out.push('\n');
    out
}

pub fn render_pay_stub(record: &PayRecord, pay: &PayResult, color: bool) -> String {
    let lines = [
        format!("Pay Period: {} to {}", record.from, record.to),
        format!("Name: {}", record.employee),
        format!("Hours Worked: {}", format_hours(record.hours)),
        format!("Hourly Rate: {}", format_currency(record.rate)),
        format!("Gross Pay: {}", format_currency(pay.gross)),
        format!("Tax Rate: {}", format_percent(record.tax_rate)),
        format!("Income Tax: {}", format_currency(pay.tax)),
        format!(
            "Net Pay: {}",
            ColoredText::success(format_currency(pay.net)).render(color)
        ),
    ];
    block(
        "--- Employee Pay Information ---",
        &lines,
        "--------------------------------",
        color,
    )
}

fn totals_lines(totals: &RunningTotals) -> [String; 5] {
    [
        format!("Total Employees: {}", totals.employee_count),
        format!("Total Hours: {}", format_hours(totals.total_hours)),
        format!("Total Gross Pay: {}", format_currency(totals.total_gross)),
        format!("Total Income Tax: {}", format_currency(totals.total_tax)),
        format!("Total Net Pay: {}", format_currency(totals.total_net)),
    ]
}

/// Totals for the records entered during this run.
pub fn render_run_summary(totals: &RunningTotals, color: bool) -> String {
    block(
        "=== Payroll Summary (This Run) ===",
        &totals_lines(totals),
        "==================================",
        color,
    )
}

pub fn render_report_header(color: bool) -> String {
    let mut out = ColoredText::info("=========== FILE REPORT ===========")
        .bold()
        .render(color);
    out.push('\n');
    out
}

/// Totals for the records matched by one report.
pub fn render_report_totals(totals: &RunningTotals, color: bool) -> String {
    block(
        "--- Report Totals ---",
        &totals_lines(totals),
        "===================================",
        color,
    )
}

pub fn render_notice(message: &str, color: bool) -> String {
    format!("{}\n", ColoredText::warning(message).render(color))
}

/// A rejected answer, shown before the prompt repeats.
pub fn render_input_error(message: &str, color: bool) -> String {
    format!("{}\n", ColoredText::error(message).render(color))
}
