//! payroll - payroll data entry and reporting
//!
//! Prompts for a pay period and employee hours/rate/tax data, computes
//! gross/tax/net pay, appends each record to a pipe-delimited history file,
//! and re-displays stored records filtered by pay period start date with
//! running totals.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ReportOutcome, ReportUseCase, SessionOutcome, SessionUseCase};
pub use config::{ColorMode, Config};
pub use domain::entities::PayRecord;
pub use domain::ports::{RecordStore, StoredRecords};
pub use domain::services::{calculate_pay, PayResult, RunningTotals};
pub use domain::value_objects::{is_valid_date, PayDate, PayPeriod, ReportFilter};
pub use error::{PayrollError, PayrollResult};
pub use infrastructure::FlatFileStore;
