//! Error types for payroll
//!
//! Uses `thiserror` for library errors. Validation failures that are recovered
//! by re-prompting live next to their parsers (`InputError`, `LineError`);
//! only the errors below ever propagate out of an operation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for payroll operations
pub type PayrollResult<T> = Result<T, PayrollError>;

/// Main error type for payroll operations
#[derive(Error, Debug)]
pub enum PayrollError {
    /// IO error (data file, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input was closed while a prompt was waiting for an answer
    #[error("input closed while waiting for {field}")]
    InputClosed { field: String },

    /// Interactive prompt failed
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Config file exists but cannot be parsed
    #[error("invalid config in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },
}

impl PayrollError {
    pub fn input_closed(field: impl Into<String>) -> Self {
        Self::InputClosed {
            field: field.into(),
        }
    }

    /// True when the error only means "no more input is coming".
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed { .. })
    }
}
