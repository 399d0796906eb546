//! Domain Ports (Interfaces)
//!
//! Infrastructure provides the concrete implementations.

pub mod record_store;

pub use record_store::{RecordStore, StoredRecords};
