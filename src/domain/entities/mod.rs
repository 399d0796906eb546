//! Domain Entities

mod pay_record;

pub use pay_record::PayRecord;
