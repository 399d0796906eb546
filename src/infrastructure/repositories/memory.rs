//! In-memory RecordStore for tests
//!
//! Keeps raw lines so tests can plant malformed history the same way a
//! hand-edited file would contain it.

use std::cell::RefCell;

use crate::domain::entities::PayRecord;
use crate::domain::ports::{RecordStore, StoredRecords};
use crate::error::PayrollResult;

use super::flat_file::parse_history;
use super::line_codec::encode_line;

#[derive(Debug, Default)]
pub struct MemoryStore {
    lines: RefCell<Option<Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: RefCell::new(Some(lines.into_iter().map(Into::into).collect())),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone().unwrap_or_default()
    }
}

impl RecordStore for MemoryStore {
    fn append(&self, record: &PayRecord) -> PayrollResult<()> {
        self.lines
            .borrow_mut()
            .get_or_insert_with(Vec::new)
            .push(encode_line(record));
        Ok(())
    }

    fn load(&self) -> PayrollResult<Option<StoredRecords>> {
        Ok(self
            .lines
            .borrow()
            .as_ref()
            .map(|lines| parse_history(&lines.join("\n"))))
    }
}
