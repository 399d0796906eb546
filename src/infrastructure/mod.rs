//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. All file I/O lives here.

pub mod repositories;

pub use repositories::{FlatFileStore, DEFAULT_DATA_FILE};
#[cfg(test)]
pub use repositories::MemoryStore;
