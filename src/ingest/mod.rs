//! Transaction ingestion
//!
//! Turns the raw, loosely shaped transaction feed into uniform records.

pub mod normalizer;
pub mod types;

pub use normalizer::{extract_entries, normalize, normalize_entry, AMOUNT_SCALE, REQUIRED_COLUMNS};
pub use types::{Action, TransactionRecord};
