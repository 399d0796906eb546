//! Application Layer
//!
//! Use cases that drive the prompt loops, the store, and the views.
//!
//! - `SessionUseCase` - the full run: pay period, entry, run summary, report
//! - `ReportUseCase` - filtered re-display of stored records with totals
//! - `collect` - per-field prompt loops
//! - `entry` - the employee entry loop

pub mod collect;
pub mod entry;
pub mod report;
pub mod session;

pub use collect::{EmployeeInput, Entry};
pub use entry::run_entry;
pub use report::{ReportOutcome, ReportUseCase};
pub use session::{SessionOutcome, SessionUseCase};
