//! Parsers for the numeric and name fields typed in during entry.
//!
//! Each parser separates a format error (not a number) from a range error
//! (a number outside the field's domain). Both are recoverable: the input
//! collector prints the message and asks again.

use thiserror::Error;

/// Token typed at the name prompt to finish entry (any case).
pub const END_TOKEN: &str = "end";

/// Field separator of the flat file; never allowed inside a name.
pub const FIELD_DELIMITER: char = '|';

/// A numeric field of a pay record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Hours,
    HourlyRate,
    TaxRate,
}

impl NumericField {
    pub fn label(self) -> &'static str {
        match self {
            NumericField::Hours => "hours",
            NumericField::HourlyRate => "hourly rate",
            NumericField::TaxRate => "tax rate",
        }
    }
}

/// Rejected field input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid number for hours.")]
    HoursNotANumber,

    #[error("Please enter a valid number for hourly rate.")]
    RateNotANumber,

    #[error("Please enter a valid number for tax rate (example: 0.20).")]
    TaxRateNotANumber,

    #[error("Hours cannot be negative.")]
    NegativeHours,

    #[error("Hourly rate cannot be negative.")]
    NegativeRate,

    #[error("Tax rate must be between 0 and 1 (example: 0.20).")]
    TaxRateOutOfRange,

    #[error("Employee name cannot be empty.")]
    EmptyName,

    #[error("Employee name cannot contain '|'.")]
    NameContainsDelimiter,
}

impl InputError {
    /// Format errors are "not a number"; everything else is a range error.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            InputError::HoursNotANumber | InputError::RateNotANumber | InputError::TaxRateNotANumber
        )
    }
}

/// What was typed at the name prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameInput {
    Employee(String),
    End,
}

/// Parse a decimal number, rejecting `nan`/`inf` along with non-numeric text.
pub fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub fn parse_hours(input: &str) -> Result<f64, InputError> {
    let hours = parse_number(input).ok_or(InputError::HoursNotANumber)?;
    check_range(NumericField::Hours, hours)
}

pub fn parse_rate(input: &str) -> Result<f64, InputError> {
    let rate = parse_number(input).ok_or(InputError::RateNotANumber)?;
    check_range(NumericField::HourlyRate, rate)
}

pub fn parse_tax_rate(input: &str) -> Result<f64, InputError> {
    let tax_rate = parse_number(input).ok_or(InputError::TaxRateNotANumber)?;
    check_range(NumericField::TaxRate, tax_rate)
}

pub fn parse_employee_name(input: &str) -> Result<NameInput, InputError> {
    let name = input.trim();
    if name.eq_ignore_ascii_case(END_TOKEN) {
        return Ok(NameInput::End);
    }
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }
    if name.contains(FIELD_DELIMITER) {
        return Err(InputError::NameContainsDelimiter);
    }
    Ok(NameInput::Employee(name.to_string()))
}

/// Range check for an already parsed number.
pub fn check_range(field: NumericField, value: f64) -> Result<f64, InputError> {
    match field {
        NumericField::Hours if value < 0.0 => Err(InputError::NegativeHours),
        NumericField::HourlyRate if value < 0.0 => Err(InputError::NegativeRate),
        NumericField::TaxRate if !(0.0..=1.0).contains(&value) => {
            Err(InputError::TaxRateOutOfRange)
        }
        _ => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_accept_zero_and_fractions() {
        assert_eq!(parse_hours("0"), Ok(0.0));
        assert_eq!(parse_hours(" 37.5 "), Ok(37.5));
    }

    #[test]
    fn format_and_range_errors_are_distinct() {
        let format = parse_hours("forty").unwrap_err();
        let range = parse_hours("-1").unwrap_err();
        assert!(format.is_format_error());
        assert!(!range.is_format_error());
        assert_ne!(format.to_string(), range.to_string());
    }

    #[test]
    fn non_finite_numbers_are_format_errors() {
        assert_eq!(parse_rate("nan"), Err(InputError::RateNotANumber));
        assert_eq!(parse_rate("inf"), Err(InputError::RateNotANumber));
        assert_eq!(parse_hours("-inf"), Err(InputError::HoursNotANumber));
    }

    #[test]
    fn tax_rate_bounds_are_inclusive() {
        assert_eq!(parse_tax_rate("0"), Ok(0.0));
        assert_eq!(parse_tax_rate("1"), Ok(1.0));
        assert_eq!(parse_tax_rate("1.01"), Err(InputError::TaxRateOutOfRange));
        assert_eq!(parse_tax_rate("-0.1"), Err(InputError::TaxRateOutOfRange));
        assert_eq!(parse_tax_rate("20%"), Err(InputError::TaxRateNotANumber));
    }

    #[test]
    fn messages_match_prompts() {
        assert_eq!(
            InputError::TaxRateOutOfRange.to_string(),
            "Tax rate must be between 0 and 1 (example: 0.20)."
        );
        assert_eq!(
            InputError::NameContainsDelimiter.to_string(),
            "Employee name cannot contain '|'."
        );
    }

    #[test]
    fn end_token_is_case_insensitive() {
        for token in ["end", "End", "END", "  eNd  "] {
            assert_eq!(parse_employee_name(token), Ok(NameInput::End));
        }
    }

    #[test]
    fn names_are_trimmed() {
        assert_eq!(
            parse_employee_name("  Ada Lovelace "),
            Ok(NameInput::Employee("Ada Lovelace".to_string()))
        );
        assert_eq!(
            parse_employee_name("Endicott"),
            Ok(NameInput::Employee("Endicott".to_string()))
        );
    }

    #[test]
    fn names_reject_blank_and_delimiter() {
        assert_eq!(parse_employee_name("   "), Err(InputError::EmptyName));
        assert_eq!(
            parse_employee_name("a|b"),
            Err(InputError::NameContainsDelimiter)
        );
    }

    #[test]
    fn check_range_per_field() {
        assert!(check_range(NumericField::Hours, -0.5).is_err());
        assert!(check_range(NumericField::HourlyRate, 0.0).is_ok());
        assert!(check_range(NumericField::TaxRate, 1.5).is_err());
        assert_eq!(NumericField::TaxRate.label(), "tax rate");
    }
}
