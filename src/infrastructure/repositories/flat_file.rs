//! Flat File Record Store
//!
//! Implements the RecordStore port over a UTF-8 text file, one record per
//! line. The file is opened for each call and closed before it returns.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::entities::PayRecord;
use crate::domain::ports::{RecordStore, StoredRecords};
use crate::error::PayrollResult;

use super::line_codec::{decode_line, encode_line};

/// Default history file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "payroll_data.txt";

/// Append-only payroll history on local disk
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FlatFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl RecordStore for FlatFileStore {
    fn append(&self, record: &PayRecord) -> PayrollResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut line = encode_line(record);
        line.push('\n');
        file.write_all(line.as_bytes())?;

        info!(
            file = %self.path.display(),
            employee = %record.employee,
            "appended pay record"
        );
        Ok(())
    }

    fn load(&self) -> PayrollResult<Option<StoredRecords>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(file = %self.path.display(), "no history file yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Some(parse_history(&String::from_utf8_lossy(&bytes))))
    }
}

/// Parse a whole history file, skipping lines that cannot be read back.
pub fn parse_history(content: &str) -> StoredRecords {
    let mut stored = StoredRecords::default();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match decode_line(line) {
            Ok(record) => stored.records.push(record),
            Err(reason) => {
                debug!(line = index + 1, %reason, "skipping malformed history line");
                stored.skipped += 1;
            }
        }
    }

    stored
}
