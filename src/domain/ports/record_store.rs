//! RecordStore port - abstraction over the append-only payroll history
//!
//! Implementations must never rewrite or delete stored records, and must skip
//! (not fail on) stored lines they cannot read.

use crate::domain::entities::PayRecord;
use crate::error::PayrollResult;

/// Everything readable from the store, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredRecords {
    pub records: Vec<PayRecord>,
    /// Non-empty lines that could not be read back as a record
    pub skipped: usize,
}

/// Append-only record history
pub trait RecordStore {
    /// Append one record to the end of the history.
    fn append(&self, record: &PayRecord) -> PayrollResult<()>;

    /// Read the whole history. `Ok(None)` means nothing was ever stored.
    fn load(&self) -> PayrollResult<Option<StoredRecords>>;
}
