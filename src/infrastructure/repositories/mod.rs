//! Repository Implementations
//!
//! Concrete implementations of the RecordStore port.

mod flat_file;
pub mod line_codec;
#[cfg(test)]
mod memory;

pub use flat_file::{parse_history, FlatFileStore, DEFAULT_DATA_FILE};
pub use line_codec::{decode_line, encode_line, LineError};
#[cfg(test)]
pub use memory::MemoryStore;
