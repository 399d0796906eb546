//! Domain Layer
//!
//! Pure payroll logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - The persisted pay record
//! - `value_objects/` - Validated dates and typed-in field values
//! - `services/` - Pay calculation and running totals
//! - `ports/` - Interface for the record store

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
