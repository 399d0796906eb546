//! Pipe-delimited line format of the payroll history
//!
//! `from|to|name|hours|rate|tax_rate`, one record per line, no header.
//! Numbers are written with `f64`'s shortest round-trip `Display`, so a line
//! reads back to bit-identical values.
//!
//! Reading is lenient past the field count and number syntax: dates stay as
//! stored text and numbers are not range checked, so a hand-edited line
//! still counts in reports.

use thiserror::Error;

use crate::domain::entities::PayRecord;
use crate::domain::value_objects::{parse_number, NumericField, FIELD_DELIMITER};

pub const FIELD_COUNT: usize = 6;

/// Why a stored line was skipped
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineError {
    #[error("expected 6 fields, found {found}")]
    FieldCount { found: usize },

    #[error("{} '{value}' is not a number", .field.label())]
    NotANumber { field: NumericField, value: String },
}

pub fn encode_line(record: &PayRecord) -> String {
    format!(
        "{from}{d}{to}{d}{name}{d}{hours}{d}{rate}{d}{tax_rate}",
        d = FIELD_DELIMITER,
        from = record.from,
        to = record.to,
        name = record.employee,
        hours = record.hours,
        rate = record.rate,
        tax_rate = record.tax_rate,
    )
}

/// Decode one already-trimmed, non-empty line.
pub fn decode_line(line: &str) -> Result<PayRecord, LineError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    let [from, to, name, hours, rate, tax_rate] = fields[..] else {
        return Err(LineError::FieldCount {
            found: fields.len(),
        });
    };

    Ok(PayRecord {
        from: from.to_string(),
        to: to.to_string(),
        employee: name.to_string(),
        hours: number(NumericField::Hours, hours)?,
        rate: number(NumericField::HourlyRate, rate)?,
        tax_rate: number(NumericField::TaxRate, tax_rate)?,
    })
}

fn number(field: NumericField, raw: &str) -> Result<f64, LineError> {
    parse_number(raw).ok_or_else(|| LineError::NotANumber {
        field,
        value: raw.to_string(),
    })
}
